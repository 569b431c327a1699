//! Issue feed for the analysis dashboard.
//!
//! Fetches the backend's issue collection (bare array or paginated envelope),
//! normalizes every element into a strictly-typed [`analyzer_types::Issue`],
//! and provides the pure client-side transforms the issue table applies:
//! search/severity filtering, stable multi-field sorting, and pagination.

pub mod client;
pub mod error;
pub mod payload;
pub mod transform;

pub use client::{IssueClient, IssueQuery};
pub use error::FetchError;
pub use payload::IssuePayload;
pub use transform::{apply_filters, issue_stats, paginate, sort_issues, IssueStats};
