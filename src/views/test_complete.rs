//! The summary page shown when a test run ends.

use axum::response::{Html, IntoResponse, Response};

use super::{View, ViewContext, STATIC_URL};

/// Serves the completion page. The browser fills in the scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestComplete;

impl View for TestComplete {
    fn name(&self) -> &'static str {
        "test_complete"
    }

    fn render(&self, ctx: &ViewContext<'_>) -> Response {
        let restart_url = ctx.url_for("reaction_test");
        Html(page(&restart_url)).into_response()
    }
}

fn page(restart_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Test Complete</title>
</head>
<body>
  <h1>Test Complete</h1>
  <dl>
    <dt>Harmonic mean reaction time (ms)</dt>
    <dd id="harmonic-mean">--</dd>
    <dt>Valid responses (%)</dt>
    <dd id="valid-percentage">--</dd>
  </dl>
  <a href="{restart_url}">Run the test again</a>
  <script src="{STATIC_URL}/webgui/js/test_complete.js"></script>
</body>
</html>
"#
    )
}
