//! # Repository Access
//!
//! Thin wrapper around [`git2::Repository`] providing the handful of
//! operations the reports need: a first-parent newest-first commit walk,
//! mailmap-aware author resolution, head commit access and a working-tree
//! dirty check.

use std::path::Path;

use chrono::{DateTime, FixedOffset};
use git2::{Mailmap, Repository, Signature, Sort, StatusOptions, Time};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::CommitSummary;
use crate::walk::CommitVisitor;

/// A Git repository opened for fact extraction.
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository containing `path`, searching upward the way the
    /// `git` command line does.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path).map_err(Error::Open)?;
        debug!("opened git repository at {:?}", repo.path());
        Ok(Self { repo })
    }

    /// Name of the branch the head currently points at.
    pub fn branch(&self) -> Result<String> {
        let head = self.repo.head().map_err(Error::Branch)?;
        Ok(head.shorthand().unwrap_or("HEAD").to_string())
    }

    /// Walk the first-parent history from the head, newest commit first,
    /// handing each commit to `visitor` exactly once.
    ///
    /// A repository fault during the walk and an error returned by the
    /// visitor both abort the traversal immediately; no commits are skipped
    /// and nothing is retried.
    pub fn walk_commits(&self, visitor: &mut dyn CommitVisitor) -> Result<()> {
        // Mailmap resolution happens here at the traversal boundary so
        // visitors only ever see commits with canonical identity attached.
        let mailmap = self.repo.mailmap().ok();

        let inner = || -> std::result::Result<Vec<git2::Oid>, git2::Error> {
            let mut revwalk = self.repo.revwalk()?;
            revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
            revwalk.simplify_first_parent()?;
            revwalk.push_head()?;
            revwalk.collect()
        };
        let oids = inner().map_err(Error::Contributors)?;
        debug!("walking {} commits", oids.len());

        for oid in oids {
            let commit = self.repo.find_commit(oid).map_err(Error::Contributors)?;
            let summary = summarize(&commit, mailmap.as_ref());
            visitor.visit(&summary)?;
        }

        Ok(())
    }

    /// The commit the head currently points at.
    pub fn head_commit(&self) -> Result<git2::Commit<'_>> {
        self.repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(Error::Commit)
    }

    /// Abbreviated object id of the given commit.
    pub fn abbreviated_commit_id(&self, commit: &git2::Commit<'_>) -> Result<String> {
        let buf = commit.as_object().short_id().map_err(Error::Commit)?;
        Ok(buf.as_str().unwrap_or_default().to_string())
    }

    /// Whether the working tree has uncommitted changes.
    ///
    /// With `ignore_untracked` set, files unknown to the index do not count
    /// as dirt.
    pub fn is_dirty(&self, ignore_untracked: bool) -> Result<bool> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(!ignore_untracked)
            .include_ignored(false);
        let statuses = self
            .repo
            .statuses(Some(&mut options))
            .map_err(Error::Commit)?;
        Ok(!statuses.is_empty())
    }
}

/// Build the per-visit commit view, resolving the author identity through
/// the mailmap when one is available. An unmapped identity resolves to
/// itself.
fn summarize(commit: &git2::Commit<'_>, mailmap: Option<&Mailmap>) -> CommitSummary {
    let author = commit.author();
    let canonical = mailmap
        .and_then(|map| map.resolve_signature(&author).ok())
        .unwrap_or_else(|| author.to_owned());

    CommitSummary {
        author_name: author.name().unwrap_or_default().to_string(),
        author_email: author.email().unwrap_or_default().to_string(),
        canonical_name: canonical.name().unwrap_or_default().to_string(),
        canonical_email: canonical.email().unwrap_or_default().to_string(),
        author_date: signature_date(&author),
    }
}

/// Convert a git timestamp into a [`DateTime`] carrying its own UTC offset.
pub(crate) fn git_time_to_date(time: Time) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60)
        .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
    DateTime::from_timestamp(time.seconds(), 0)
        .unwrap_or_default()
        .with_timezone(&offset)
}

/// Author timestamp of a signature, in the author's own timezone.
pub(crate) fn signature_date(signature: &Signature<'_>) -> DateTime<FixedOffset> {
    git_time_to_date(signature.when())
}
