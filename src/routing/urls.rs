//! URL patterns served by the web GUI.

use crate::routing::router::{Route, RouteError, RouteTable};
use crate::views::{ReactionTest, TestComplete};

/// Build the application's route table in declaration order.
pub fn url_patterns() -> Result<RouteTable, RouteError> {
    RouteTable::new(vec![
        Route::new("", ReactionTest, "reaction_test"),
        Route::new("test-complete/", TestComplete, "test_complete"),
    ])
}
