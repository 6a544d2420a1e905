//! # Git Commit Facts Library
//!
//! `gitfacts` extracts structured facts from a Git repository's commit
//! history and renders them as human-readable reports or flat key/value
//! metadata. It walks the first-parent history, folds commits into
//! contributor records keyed by mailmap-canonical author identity, and
//! writes deterministic, escapable text reports with a configurable sort
//! order.
//!
//! ## Features
//!
//! - Contributor lists aggregated by canonical author identity
//! - Stable sorting by commit count, first-contribution date or name
//! - Optional HTML and Markdown escaping of names and emails
//! - Single-commit facts (ids, identities, dates) with dirty-tree marking
//! - All-or-nothing report generation: a repository fault never produces
//!   partial output
//!
//! ## Example
//!
//! ```no_run
//! use std::io;
//! use std::path::Path;
//! use gitfacts::{generate_contributors_report, GitRepo, ReportConfig};
//!
//! let repo = GitRepo::discover(Path::new(".")).unwrap();
//! let config = ReportConfig::default();
//! generate_contributors_report(&repo, &config, &mut io::stdout()).unwrap();
//! ```

pub mod error;
pub mod facts;
pub mod report;
pub mod repository;
pub mod types;
pub mod walk;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use facts::{head_commit_facts, FactsConfig};
pub use report::{contributors_report_lines, generate_contributors_report, sort_contributors};
pub use repository::GitRepo;
pub use types::{CommitFacts, CommitSummary, Contributor, ReportConfig, SortKey};
pub use walk::{CommitVisitor, ContributorsWalkAction};
