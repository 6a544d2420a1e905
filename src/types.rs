//! # Common Types
//!
//! This module contains the common types used throughout the crate for
//! representing commits, contributors and report configuration.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// A read-only view of one commit, valid for a single visitor callback.
///
/// The traversal source builds one of these per visited commit. It carries
/// both the raw author identity as recorded in the commit and the canonical
/// identity after mailmap resolution; when the repository has no mailmap
/// entry for the author, the canonical fields equal the raw ones.
#[derive(Clone, Debug)]
pub struct CommitSummary {
    /// Author name as recorded in the commit
    pub author_name: String,
    /// Author email as recorded in the commit
    pub author_email: String,
    /// Author name after mailmap resolution
    pub canonical_name: String,
    /// Author email after mailmap resolution; the aggregation key
    pub canonical_email: String,
    /// Author timestamp, carrying the author's own UTC offset
    pub author_date: DateTime<FixedOffset>,
}

/// One aggregated contributor, keyed by canonical author email.
///
/// Mutable only while a traversal is running; the aggregation hands out the
/// finished records once the walk completes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Contributor {
    /// Display name, seeded from the first commit seen for this identity
    pub name: String,
    /// Display email, seeded from the first commit seen for this identity
    pub email: String,
    /// Number of commits attributed to this identity
    pub count: usize,
    /// Earliest author timestamp seen for this identity
    pub first_commit_date: DateTime<FixedOffset>,
}

/// Sort order for the contributors report.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortKey {
    /// Contribution count descending, then name ascending
    #[default]
    Count,
    /// Earliest contribution date ascending, then name ascending
    Date,
    /// Display name ascending
    Name,
}

impl SortKey {
    /// Normalize a configured sort value.
    ///
    /// Anything other than exactly `count`, `date` or `name` (including an
    /// unset value) silently falls back to `count`. Normalization is
    /// idempotent and runs before every report generation.
    pub fn parse(value: Option<&str>) -> SortKey {
        match value {
            Some("count") => SortKey::Count,
            Some("date") => SortKey::Date,
            Some("name") => SortKey::Name,
            _ => SortKey::Count,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Count => "count",
            SortKey::Date => "date",
            SortKey::Name => "name",
        }
    }
}

/// Configuration for rendering the contributors report.
///
/// Header, footer and prefix are trusted configuration and are emitted
/// unescaped; escaping only ever applies to contributor names and emails.
#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Text emitted before the contributor lines, followed by a blank
    /// separator line when non-empty. Literal `\n` sequences are expanded
    /// to real line breaks.
    pub header: String,
    /// Text emitted after the contributor lines; same `\n` expansion
    pub footer: String,
    /// Prefix for each contributor line
    pub contributor_prefix: String,
    /// Append " (N)" with the contribution count to each line
    pub show_counts: bool,
    /// Append " (email)" to each line; takes precedence over `show_counts`
    pub show_email: bool,
    /// Replace `<` and `>` in names and emails with HTML entities
    pub escape_html: bool,
    /// Backslash-escape `[` and `]` in names and emails
    pub escape_markdown: bool,
    /// Requested sort order; normalized via [`SortKey::parse`]
    pub sort: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            header: "Contributors\\n============".to_string(),
            footer: String::new(),
            contributor_prefix: " * ".to_string(),
            show_counts: true,
            show_email: false,
            escape_html: false,
            escape_markdown: false,
            sort: None,
        }
    }
}

/// Facts about a single commit, read from the repository head.
///
/// The `id` and `abbrev` fields already include the configured dirty marker
/// when the working tree has uncommitted changes; the underlying repository
/// identity is never modified.
#[derive(Clone, Debug, Serialize)]
pub struct CommitFacts {
    /// Full commit hash, with the dirty marker appended when dirty
    pub id: String,
    /// Abbreviated commit hash, with the dirty marker appended when dirty
    pub abbrev: String,
    /// Author name
    pub author_name: String,
    /// Author email
    pub author_email: String,
    /// Author date, formatted in the author's timezone
    pub author_date: String,
    /// Committer name
    pub committer_name: String,
    /// Committer email
    pub committer_email: String,
    /// Committer date, formatted in the committer's timezone
    pub committer_date: String,
    /// Whether the working tree had uncommitted changes
    pub dirty: bool,
}

impl CommitFacts {
    /// Flatten the facts into `(field, value)` pairs for property-style
    /// consumers (`commit.id`, `commit.author.name`, ...).
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("commit.id", self.id.clone()),
            ("commit.sha", self.id.clone()),
            ("commit.abbrev", self.abbrev.clone()),
            ("commit.author.name", self.author_name.clone()),
            ("commit.author.email", self.author_email.clone()),
            ("commit.author.date", self.author_date.clone()),
            ("commit.committer.name", self.committer_name.clone()),
            ("commit.committer.email", self.committer_email.clone()),
            ("commit.committer.date", self.committer_date.clone()),
            ("commit.dirty", self.dirty.to_string()),
        ]
    }
}
