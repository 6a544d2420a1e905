//! # Commit Facts
//!
//! Reads identity and date facts from the repository's head commit and
//! marks them when the working tree is dirty. Dates are formatted with a
//! configurable strftime pattern, each timestamp in its own timezone.

use crate::error::Result;
use crate::repository::{git_time_to_date, GitRepo};
use crate::types::CommitFacts;

/// Default strftime pattern for author and committer dates.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Configuration for single-commit fact extraction.
#[derive(Clone, Debug)]
pub struct FactsConfig {
    /// strftime pattern applied to author and committer dates
    pub date_format: String,
    /// Marker appended to the reported commit ids when the tree is dirty;
    /// `None` leaves the ids untouched even when dirty
    pub dirty_flag: Option<String>,
    /// Do not count untracked files as dirt
    pub dirty_ignore_untracked: bool,
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            dirty_flag: Some("-dirty".to_string()),
            dirty_ignore_untracked: false,
        }
    }
}

/// Extract facts from the head commit.
///
/// When the working tree is dirty and a dirty flag is configured, the flag
/// is appended to both the full and the abbreviated id in the result. Only
/// the reported strings change; the repository itself is untouched.
pub fn head_commit_facts(repo: &GitRepo, config: &FactsConfig) -> Result<CommitFacts> {
    let commit = repo.head_commit()?;
    let mut id = commit.id().to_string();
    let mut abbrev = repo.abbreviated_commit_id(&commit)?;

    let author = commit.author();
    let committer = commit.committer();

    // The same pattern is applied twice, once per timestamp, each in that
    // timestamp's own timezone.
    let author_date = git_time_to_date(author.when())
        .format(&config.date_format)
        .to_string();
    let committer_date = git_time_to_date(committer.when())
        .format(&config.date_format)
        .to_string();

    let dirty = repo.is_dirty(config.dirty_ignore_untracked)?;
    if dirty {
        if let Some(flag) = &config.dirty_flag {
            id.push_str(flag);
            abbrev.push_str(flag);
        }
    }

    Ok(CommitFacts {
        id,
        abbrev,
        author_name: author.name().unwrap_or_default().to_string(),
        author_email: author.email().unwrap_or_default().to_string(),
        author_date,
        committer_name: committer.name().unwrap_or_default().to_string(),
        committer_email: committer.email().unwrap_or_default().to_string(),
        committer_date,
        dirty,
    })
}
