//! Commit range resolution.

use git2::{Oid, Repository};

use crate::error::GitError;

use super::tags::latest_reachable_tag;

/// Resolved commit range. `from` is absent when no previous release exists,
/// in which case the range covers the whole history.
#[derive(Debug, Clone)]
pub struct CommitRange {
    pub from: Option<Oid>,
    pub to: Oid,
    pub from_ref: String,
    pub to_ref: String,
}

/// Resolve a commit range from user-provided references.
///
/// If `from` is None, the latest reachable release tag bounds the range; if
/// no such tag exists the range is unbounded at the start. If `to` is None,
/// HEAD is used.
pub fn resolve_range(
    repo: &Repository,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<CommitRange, GitError> {
    let to_ref = to.unwrap_or("HEAD");
    let to_oid = resolve_reference(repo, to_ref)?;

    let (from_oid, from_ref) = if let Some(from_str) = from {
        (Some(resolve_reference(repo, from_str)?), from_str.to_string())
    } else if let Some(tag_info) = latest_reachable_tag(repo)? {
        (Some(tag_info.oid), tag_info.name)
    } else {
        (None, "start of history".to_string())
    };

    Ok(CommitRange {
        from: from_oid,
        to: to_oid,
        from_ref,
        to_ref: to_ref.to_string(),
    })
}

/// Resolve a reference (tag, branch, commit hash) to an OID.
fn resolve_reference(repo: &Repository, reference: &str) -> Result<Oid, GitError> {
    // Try as a direct OID first
    if let Ok(oid) = Oid::from_str(reference) {
        if repo.find_commit(oid).is_ok() {
            return Ok(oid);
        }
    }

    // Then as a reference (branch or tag)
    if let Ok(obj) = repo.revparse_single(reference) {
        return Ok(obj.peel_to_commit().map_err(GitError::ParseCommit)?.id());
    }

    Err(GitError::ReferenceNotFound(
        reference.to_string(),
        git2::Error::from_str("Reference not found"),
    ))
}
