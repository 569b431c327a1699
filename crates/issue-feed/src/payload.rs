//! Wire payload shapes for the issue collection endpoint.
//!
//! The backend returns either a bare JSON array or the paginated
//! `{count, next, previous, results}` envelope depending on configuration;
//! both decode to the same normalized issue list.

use analyzer_types::Issue;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IssuePayload {
    Envelope(Envelope),
    Bare(Vec<Value>),
}

/// Paginated collection envelope.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<Value>,
}

impl IssuePayload {
    /// Normalize every element, whatever the wrapping shape was.
    pub fn into_issues(self) -> Vec<Issue> {
        let raw = match self {
            IssuePayload::Envelope(envelope) => envelope.results,
            IssuePayload::Bare(items) => items,
        };
        raw.iter().map(Issue::from_value).collect()
    }
}
