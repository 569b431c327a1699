//! Client-side issue list transforms: filter, sort, paginate, summarize.
//!
//! All pure functions over a fetched snapshot; the snapshot itself is never
//! mutated by a later fetch, only replaced.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use analyzer_types::{Issue, Severity, SeverityFilter, SortField, SortOrder};

/// Search-term and severity filtering, AND-composed.
///
/// The search term matches case-insensitively against message, rule name, or
/// file name (any one suffices); an empty or whitespace term passes
/// everything.
pub fn apply_filters(
    issues: &[Issue],
    search_term: &str,
    severity: SeverityFilter,
) -> Vec<Issue> {
    let term = search_term.trim().to_lowercase();
    issues
        .iter()
        .filter(|issue| {
            term.is_empty()
                || issue.message.to_lowercase().contains(&term)
                || issue.rule_name.to_lowercase().contains(&term)
                || issue.file_name.to_lowercase().contains(&term)
        })
        .filter(|issue| severity.matches(issue.severity))
        .cloned()
        .collect()
}

/// Stable sort by the requested column.
///
/// `created_at` compares parsed timestamps, `severity` uses the fixed rank
/// (critical first ascending), `line_number` compares numerically; the rest
/// are case-sensitive lexical comparisons. Equal keys keep their relative
/// input order.
pub fn sort_issues(issues: &mut [Issue], field: SortField, order: SortOrder) {
    issues.sort_by(|a, b| {
        let ordering = match field {
            SortField::Severity => a.severity.rank().cmp(&b.severity.rank()),
            SortField::CreatedAt => parse_timestamp(&a.created_at).cmp(&parse_timestamp(&b.created_at)),
            SortField::LineNumber => a.line_number.cmp(&b.line_number),
            SortField::RuleName => a.rule_name.cmp(&b.rule_name),
            SortField::FileName => a.file_name.cmp(&b.file_name),
            SortField::Category => a.category.cmp(&b.category),
            SortField::Message => a.message.cmp(&b.message),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Zero-indexed page slice, clipped to the available length.
///
/// An out-of-range page is an empty slice, never an error.
pub fn paginate(issues: &[Issue], page: usize, page_size: usize) -> &[Issue] {
    let start = page.saturating_mul(page_size).min(issues.len());
    let end = start.saturating_add(page_size).min(issues.len());
    &issues[start..end]
}

/// Summary numbers for the dashboard's header cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueStats {
    pub total: usize,
    pub critical: usize,
    pub major: usize,
    pub minor: usize,
    pub info: usize,
    /// Distinct projects with at least one issue.
    pub affected_projects: usize,
}

pub fn issue_stats(issues: &[Issue]) -> IssueStats {
    let mut stats = IssueStats {
        total: issues.len(),
        ..IssueStats::default()
    };
    let mut projects = HashSet::new();

    for issue in issues {
        match issue.severity {
            Severity::Critical => stats.critical += 1,
            Severity::Major => stats.major += 1,
            Severity::Minor => stats.minor += 1,
            Severity::Info => stats.info += 1,
        }
        if !issue.project.is_empty() {
            projects.insert(issue.project.as_str());
        }
    }

    stats.affected_projects = projects.len();
    stats
}

/// Timestamp value for sorting. RFC 3339 first, then the backend's naive
/// formats; unparseable strings sort as the epoch.
fn parse_timestamp(raw: &str) -> i64 {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.timestamp_millis();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.and_utc().timestamp_millis();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or(0);
    }
    0
}
