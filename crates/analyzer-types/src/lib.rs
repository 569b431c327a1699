pub mod types;

pub use types::{Issue, Severity, SeverityFilter, SortField, SortOrder, MISSING_MESSAGE};
