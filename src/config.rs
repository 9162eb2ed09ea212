//! Style configuration: the mapping from commit taxonomy to release severity.
//!
//! The configuration shape mirrors a `.changelogrc` file: a list of commit
//! type rules and a list of footer note rules, each optionally carrying the
//! release severity it implies.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// Maps a commit type keyword (e.g. "feat") to a release severity.
///
/// `release` stays a raw string here: it is validated against the release
/// type enumeration at resolution time, so a malformed value surfaces as an
/// analysis error rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeRule {
    pub key: String,
    #[serde(default)]
    pub release: Option<String>,
}

/// Maps a footer note title (or any of its aliases) to a release severity.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteRule {
    pub keyword: String,
    #[serde(default)]
    pub alias: Option<Vec<String>>,
    #[serde(default)]
    pub release: Option<String>,
}

/// The style configuration for one analysis run.
///
/// Fetched once per run and read-only from then on; every resolution call in
/// the batch borrows the same value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub types: Vec<TypeRule>,
    pub notes: Vec<NoteRule>,
}

impl StyleConfig {
    /// The conventional-commits preset, used when no config file is present.
    pub fn conventional() -> Self {
        fn type_rule(key: &str, release: Option<&str>) -> TypeRule {
            TypeRule {
                key: key.to_string(),
                release: release.map(str::to_string),
            }
        }

        StyleConfig {
            types: vec![
                type_rule("feat", Some("minor")),
                type_rule("fix", Some("patch")),
                type_rule("perf", Some("patch")),
                type_rule("docs", None),
                type_rule("style", None),
                type_rule("refactor", None),
                type_rule("test", None),
                type_rule("build", None),
                type_rule("ci", None),
                type_rule("chore", None),
            ],
            notes: vec![NoteRule {
                keyword: "BREAKING CHANGE".to_string(),
                alias: Some(vec!["BREAKING CHANGES".to_string(), "BREAKING-CHANGE".to_string()]),
                release: Some("major".to_string()),
            }],
        }
    }
}

/// Source of the style configuration.
///
/// Implementations are fetched exactly once per analysis run, before any
/// commit is evaluated. The trait exists so hosts and tests can substitute
/// their own source.
#[async_trait]
pub trait StyleProvider {
    async fn style_config(&self) -> Result<StyleConfig, ConfigError>;
}

/// Loads the style configuration from a `.changelogrc`-style JSON file.
#[derive(Debug, Clone)]
pub struct FileStyleProvider {
    path: PathBuf,
}

impl FileStyleProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StyleProvider for FileStyleProvider {
    async fn style_config(&self) -> Result<StyleConfig, ConfigError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ConfigError::ReadFailed {
                path: self.path.clone(),
                source,
            })?;

        let config: StyleConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::ParseFailed {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            path = %self.path.display(),
            types = config.types.len(),
            notes = config.notes.len(),
            "Loaded style configuration"
        );

        Ok(config)
    }
}

/// Serves a fixed in-memory style configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticStyleProvider {
    config: StyleConfig,
}

impl StaticStyleProvider {
    pub fn new(config: StyleConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl StyleProvider for StaticStyleProvider {
    async fn style_config(&self) -> Result<StyleConfig, ConfigError> {
        Ok(self.config.clone())
    }
}
