//! Git operations using git2-rs.

pub mod commits;
pub mod range;
pub mod tags;

pub use commits::collect_commits;
pub use range::{CommitRange, resolve_range};
pub use tags::{TagInfo, latest_reachable_tag, version_from_tag};
