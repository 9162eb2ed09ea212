//! krites - determines the semantic-release bump type from commit messages.
//!
//! # Overview
//!
//! krites parses conventional commits, matches their type keywords and footer
//! notes against a changelogrc-style configuration, and reduces the batch to
//! the single strongest release type: one of `prerelease`, `prepatch`,
//! `patch`, `preminor`, `minor`, `premajor`, `major`, or none at all.

pub mod analyzer;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod release;

// Re-export commonly used types
pub use analyzer::{AnalyzeContext, PluginConfig, RawCommit, analyze_commits};
pub use commit::{Note, ParsedCommit, parse_commit_message};
pub use config::{
    FileStyleProvider, NoteRule, StaticStyleProvider, StyleConfig, StyleProvider, TypeRule,
};
pub use error::{AnalyzerError, ConfigError, GitError};
pub use release::{ReleaseType, higher_of};
