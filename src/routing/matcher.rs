//! Route matching logic.
//!
//! # Responsibilities
//! - Compare a normalized request path against a route pattern
//!
//! # Design Decisions
//! - Path matching is case-sensitive and byte-exact
//! - No trimming or slash folding: normalization belongs to the host layer
//! - No regex or wildcards, so matching is O(len(path))

/// Trait for matching normalized request paths against a route pattern.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;

    /// The pattern this matcher was built from.
    fn pattern(&self) -> &str;
}

/// Matches a literal path exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactMatcher {
    literal: String,
}

impl ExactMatcher {
    /// Create a new exact matcher.
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }
}

impl Matcher for ExactMatcher {
    fn matches(&self, path: &str) -> bool {
        path == self.literal
    }

    fn pattern(&self) -> &str {
        &self.literal
    }
}
