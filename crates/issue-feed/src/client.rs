//! HTTP client for the issue collection endpoint.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::FetchError;
use crate::payload::IssuePayload;
use analyzer_types::Issue;

/// Optional filters for the issue listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueQuery {
    pub report: Option<String>,
    pub project: Option<String>,
}

impl IssueQuery {
    pub fn all() -> Self {
        IssueQuery::default()
    }

    pub fn for_report(report: impl Into<String>) -> Self {
        IssueQuery {
            report: Some(report.into()),
            project: None,
        }
    }

    pub fn for_project(project: impl Into<String>) -> Self {
        IssueQuery {
            report: None,
            project: Some(project.into()),
        }
    }
}

/// Client for `GET {base}/issues/`.
///
/// Rapid re-filtering in the dashboard can issue a new fetch while an older
/// one is still in flight; the client stamps each request with a generation
/// number and discards any response that resolves after a newer request has
/// been issued, so a slow early response never overwrites newer data.
#[derive(Debug)]
pub struct IssueClient {
    base_url: String,
    client: Client,
    generation: AtomicU64,
}

impl IssueClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create HTTP client");

        IssueClient {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            generation: AtomicU64::new(0),
        }
    }

    /// Fetch and normalize the issue collection.
    ///
    /// Accepts both the bare-array and paginated-envelope response shapes.
    /// Transport and decode failures come back as [`FetchError`] with a
    /// readable message; a response outlived by a newer request comes back
    /// as [`FetchError::Superseded`].
    pub async fn fetch_issues(&self, query: &IssueQuery) -> Result<Vec<Issue>, FetchError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let mut request = self.client.get(format!("{}/issues/", self.base_url));
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(report) = &query.report {
            params.push(("report", report));
        }
        if let Some(project) = &query.project {
            params.push(("project", project));
        }
        if !params.is_empty() {
            request = request.query(&params);
        }

        let response = request
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let payload: IssuePayload = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding stale issue response");
            return Err(FetchError::Superseded);
        }

        let issues = payload.into_issues();
        debug!(generation, count = issues.len(), "fetched issues");
        Ok(issues)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = IssueClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_query_constructors() {
        assert_eq!(IssueQuery::all(), IssueQuery::default());
        assert_eq!(
            IssueQuery::for_report("r-9").report.as_deref(),
            Some("r-9")
        );
        assert_eq!(
            IssueQuery::for_project("p-3").project.as_deref(),
            Some("p-3")
        );
    }
}
