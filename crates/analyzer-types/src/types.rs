//! Shared domain model for the analysis dashboard core.
//!
//! Issues arrive from the backend as loosely-shaped JSON; [`Issue::from_value`]
//! is the single normalization point that turns any object into a
//! fully-defaulted, strictly-typed record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder used when the backend omits the issue message entirely.
pub const MISSING_MESSAGE: &str = "No message provided";

/// Issue priority classification.
///
/// Ordering follows the dashboard's fixed rank, not alphabetic order:
/// critical sorts before major, major before minor, minor before info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Major,
    Minor,
    Info,
}

impl Severity {
    /// Parse a backend severity string, case-insensitively.
    ///
    /// Unrecognized values (including empty strings) fall back to `Info`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "critical" => Severity::Critical,
            "major" => Severity::Major,
            "minor" => Severity::Minor,
            "info" => Severity::Info,
            _ => Severity::Info,
        }
    }

    /// Fixed sort rank: critical(0) < major(1) < minor(2) < info(3).
    pub fn rank(self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::Major => 1,
            Severity::Minor => 2,
            Severity::Info => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Major => "major",
            Severity::Minor => "minor",
            Severity::Info => "info",
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Info
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single static-analysis finding.
///
/// Constructed fresh on every fetch and never mutated in place; a new fetch
/// supersedes the previous snapshot wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    /// Owning report reference.
    pub report: String,
    /// Owning project reference.
    pub project: String,
    pub rule_name: String,
    pub severity: Severity,
    pub category: String,
    pub file_name: String,
    /// 1-based line in the analyzed file.
    pub line_number: u32,
    pub message: String,
    /// Timestamp as delivered by the backend (RFC 3339 in practice).
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Issue {
    /// Normalize an arbitrary JSON value into an `Issue`.
    ///
    /// Total: every field read is defaulted, so a missing property, wrong
    /// type, or numeric string never propagates as an error. Missing
    /// severity becomes `Info`, missing line number becomes 1, missing
    /// message becomes [`MISSING_MESSAGE`].
    pub fn from_value(value: &Value) -> Self {
        Issue {
            id: string_field(value, "id"),
            report: string_field(value, "report"),
            project: string_field(value, "project"),
            rule_name: string_field(value, "rule_name"),
            severity: value
                .get("severity")
                .and_then(Value::as_str)
                .map(Severity::parse)
                .unwrap_or_default(),
            category: string_field(value, "category"),
            file_name: string_field(value, "file_name"),
            line_number: line_number_field(value),
            message: match value.get("message").and_then(Value::as_str) {
                Some(m) if !m.is_empty() => m.to_string(),
                _ => MISSING_MESSAGE.to_string(),
            },
            created_at: string_field(value, "created_at"),
            suggestion: value
                .get("suggestion")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// Read a string field, coercing numeric ids and defaulting to empty.
fn string_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Read `line_number` as a number or numeric string, clamped to >= 1.
fn line_number_field(value: &Value) -> u32 {
    let parsed = match value.get("line_number") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed
        .map(|n| n.min(u64::from(u32::MAX)) as u32)
        .filter(|&n| n >= 1)
        .unwrap_or(1)
}

/// Issue list columns the dashboard can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Severity,
    CreatedAt,
    RuleName,
    FileName,
    Category,
    Message,
    LineNumber,
}

impl SortField {
    /// Parse a backend column name (`"created_at"`, `"severity"`, ...).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "severity" => Some(SortField::Severity),
            "created_at" => Some(SortField::CreatedAt),
            "rule_name" => Some(SortField::RuleName),
            "file_name" => Some(SortField::FileName),
            "category" => Some(SortField::Category),
            "message" => Some(SortField::Message),
            "line_number" => Some(SortField::LineNumber),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse `"asc"` / `"desc"`; anything else keeps the dashboard's
    /// initial descending order.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "asc" => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// Severity dropdown state: `"all"` passes everything, any other value
/// keeps only exact matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityFilter {
    All,
    Only(Severity),
}

impl SeverityFilter {
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("all") {
            SeverityFilter::All
        } else {
            SeverityFilter::Only(Severity::parse(raw))
        }
    }

    pub fn matches(self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(wanted) => severity == wanted,
        }
    }
}
