//! Commit collection from a repository range.

use git2::{Oid, Repository};

use crate::analyzer::RawCommit;
use crate::error::GitError;

/// Collect raw commits reachable from `to` but not from `from`, newest first.
///
/// With `from` absent the walk covers the whole history up to `to`, which is
/// the first-release case where no tag bounds the range.
pub fn collect_commits(
    repo: &Repository,
    from: Option<Oid>,
    to: Oid,
) -> Result<Vec<RawCommit>, GitError> {
    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;

    revwalk.push(to).map_err(GitError::RevwalkError)?;
    if let Some(from) = from {
        revwalk.hide(from).map_err(GitError::RevwalkError)?;
    }

    let mut commits = Vec::new();

    for oid_result in revwalk {
        let oid = oid_result.map_err(GitError::RevwalkError)?;
        let commit = repo.find_commit(oid).map_err(GitError::ParseCommit)?;
        commits.push(RawCommit {
            hash: Some(oid.to_string()),
            message: commit.message().unwrap_or("").to_string(),
        });
    }

    Ok(commits)
}
