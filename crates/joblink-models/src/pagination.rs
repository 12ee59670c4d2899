//! Paginated list envelope.

use serde::{Deserialize, Serialize};

/// Envelope the backend wraps list responses in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Total number of matching records
    pub count: u64,

    /// URL of the next page, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// URL of the previous page, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,

    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// Whether more pages follow this one.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
