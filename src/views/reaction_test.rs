//! The reaction test page.

use axum::response::{Html, IntoResponse, Response};

use super::{View, ViewContext, STATIC_URL};

/// Serves the page that runs the reaction time test.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactionTest;

impl View for ReactionTest {
    fn name(&self) -> &'static str {
        "reaction_test"
    }

    fn render(&self, ctx: &ViewContext<'_>) -> Response {
        let complete_url = ctx.url_for("test_complete");
        Html(page(&complete_url)).into_response()
    }
}

fn page(complete_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Reaction Time Test</title>
  <style>.hidden {{ display: none; }}</style>
</head>
<body data-complete-url="{complete_url}">
  <div id="main-container">
    <h1>Reaction Time Test</h1>
    <p>Press the space bar, click, or tap as soon as READY appears.</p>
    <fieldset>
      <legend>Test duration</legend>
      <label><input type="radio" name="duration" value="30"> 30 seconds</label>
      <label><input type="radio" name="duration" value="60"> 1 minute</label>
      <label><input type="radio" name="duration" value="180"> 3 minutes</label>
      <label><input type="radio" name="duration" value="360" checked> 6 minutes</label>
      <label><input type="radio" name="duration" value="custom" id="custom-radio"> Custom</label>
      <input type="number" id="custom-duration" min="1" placeholder="minutes" disabled>
    </fieldset>
    <button id="start-btn" type="button">Start</button>
  </div>
  <div id="test-area" class="hidden">
    <div id="trigger"></div>
    <div id="result"></div>
  </div>
  <script src="{STATIC_URL}/webgui/js/reaction_test.js"></script>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::url_patterns;

    #[test]
    fn test_page_links_to_completion_route() {
        let html = page("/test-complete/");
        assert!(html.contains(r#"data-complete-url="/test-complete/""#));
        assert!(html.contains(r#"id="start-btn""#));
        assert!(html.contains(r#"value="360" checked"#));
        assert!(html.contains(r#"<script src="/static/webgui/js/reaction_test.js">"#));
        assert!(html.contains(".hidden { display: none; }"));
    }

    #[tokio::test]
    async fn test_render() {
        let routes = url_patterns().unwrap();
        let response = ReactionTest.render(&ViewContext::new(&routes, None));

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Reaction Time Test"));
        assert!(body.contains("/test-complete/"));
    }
}
