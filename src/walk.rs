//! # Commit Traversal
//!
//! The traversal source invokes a [`CommitVisitor`] once per commit, newest
//! first along the first-parent chain. Visitors fold each commit into their
//! own accumulated state; a failure returned from the callback aborts the
//! traversal immediately and propagates to the caller.

use std::collections::HashMap;

use crate::error::Result;
use crate::types::{CommitSummary, Contributor};

/// Callback invoked once per commit during a history traversal.
///
/// The commit is passed as an explicit parameter and is only valid for the
/// duration of the call. Implementations must not be shared between
/// simultaneous traversals; a traversal is a single synchronous pass.
pub trait CommitVisitor {
    /// Visit one commit. Returning an error stops the traversal; the error
    /// propagates unchanged and no further commits are delivered.
    fn visit(&mut self, commit: &CommitSummary) -> Result<()>;
}

/// Folds a commit stream into one [`Contributor`] record per canonical
/// author identity.
///
/// Commits whose raw identities resolve to the same canonical email always
/// aggregate into a single record, even when their raw spellings differ.
/// Display name and email are seeded from the first commit seen for an
/// identity; later commits only bump the count and the earliest date.
#[derive(Default)]
pub struct ContributorsWalkAction {
    contributors: HashMap<String, Contributor>,
}

impl ContributorsWalkAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the action and hand out the accumulated records, in no
    /// particular order. Callers are expected to sort before rendering.
    pub fn into_contributors(self) -> Vec<Contributor> {
        self.contributors.into_values().collect()
    }
}

impl CommitVisitor for ContributorsWalkAction {
    fn visit(&mut self, commit: &CommitSummary) -> Result<()> {
        self.contributors
            .entry(commit.canonical_email.clone())
            .and_modify(|contributor| {
                contributor.count += 1;
                if commit.author_date < contributor.first_commit_date {
                    contributor.first_commit_date = commit.author_date;
                }
            })
            .or_insert_with(|| Contributor {
                name: commit.canonical_name.clone(),
                email: commit.canonical_email.clone(),
                count: 1,
                first_commit_date: commit.author_date,
            });

        Ok(())
    }
}
