//! Commit batch analysis: the release-pipeline entry point.

pub mod aggregate;
pub mod rules;

use serde::Deserialize;
use tracing::debug;

use crate::commit::{ParsedCommit, parse_commit_message};
use crate::config::StyleProvider;
use crate::error::AnalyzerError;
use crate::release::ReleaseType;

pub use aggregate::highest_release_type;
pub use rules::{release_type_from_commit, release_type_from_commit_type, release_type_from_note};

/// Host-supplied plugin configuration.
///
/// Unused by the core analysis; accepted and carried so hosts can extend the
/// plugin without changing its signature.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginConfig {}

/// A raw commit log entry as handed over by the host pipeline. Only the
/// message participates in analysis.
#[derive(Debug, Clone)]
pub struct RawCommit {
    pub hash: Option<String>,
    pub message: String,
}

impl RawCommit {
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            hash: None,
            message: message.into(),
        }
    }
}

/// The run context: the commits under analysis, in input order.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeContext {
    pub commits: Vec<RawCommit>,
}

/// Analyze a batch of commits and return the strongest implied release type.
///
/// Fetches the style configuration exactly once, before any commit is
/// evaluated, then parses every commit message, drops the ones that do not
/// parse, and reduces the rest with [`highest_release_type`]. `Ok(None)`
/// means no commit warrants a release.
pub async fn analyze_commits<P>(
    _plugin_config: &PluginConfig,
    context: &AnalyzeContext,
    provider: &P,
) -> Result<Option<ReleaseType>, AnalyzerError>
where
    P: StyleProvider + ?Sized,
{
    let style = provider.style_config().await?;

    let parsed: Vec<ParsedCommit> = context
        .commits
        .iter()
        .filter_map(|commit| parse_commit_message(&commit.message))
        .collect();

    debug!(
        total = context.commits.len(),
        parsed = parsed.len(),
        "Parsed commit batch"
    );

    let release_type = highest_release_type(&parsed, &style)?;

    debug!(release_type = ?release_type, "Analysis complete");
    Ok(release_type)
}
