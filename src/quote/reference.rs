//! Quote reference identifiers.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique reference stamped on exported documents, e.g. `QTE-01J9K3...`.
///
/// ULIDs sort by creation time, so references from the same contractor
/// stay chronological in a file listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteRef(String);

impl QuoteRef {
    pub const PREFIX: &'static str = "QTE";

    pub fn new() -> Self {
        Self(format!("{}-{}", Self::PREFIX, Ulid::new()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for QuoteRef {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for QuoteRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
