//! Reduction of a commit batch to a single release decision.

use tracing::debug;

use crate::commit::ParsedCommit;
use crate::config::StyleConfig;
use crate::error::AnalyzerError;
use crate::release::{ReleaseType, higher_of};

use super::rules::release_type_from_commit;

/// Reduce parsed commits, in input order, to the strongest implied release
/// type.
///
/// The accumulator only ever grows in severity. Once it reaches `major` no
/// later commit can change the outcome, so rule evaluation stops there. The
/// first configuration error aborts the reduction and becomes the result for
/// the whole batch; later commits cannot override it.
pub fn highest_release_type(
    commits: &[ParsedCommit],
    config: &StyleConfig,
) -> Result<Option<ReleaseType>, AnalyzerError> {
    let mut strongest: Option<ReleaseType> = None;

    for commit in commits {
        if strongest.is_some_and(|release_type| release_type.is_max()) {
            break;
        }

        strongest = higher_of(strongest, release_type_from_commit(commit, config)?);
    }

    debug!(release_type = ?strongest, commits = commits.len(), "Reduced commit batch");
    Ok(strongest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::Note;

    fn config() -> StyleConfig {
        serde_json::from_str(
            r#"{
                "types": [
                    {"key": "feat", "release": "minor"},
                    {"key": "fix", "release": "patch"}
                ],
                "notes": [{"keyword": "BREAKING CHANGE", "release": "major"}]
            }"#,
        )
        .unwrap()
    }

    fn commit(commit_type: Option<&str>, note_titles: &[&str]) -> ParsedCommit {
        ParsedCommit {
            commit_type: commit_type.map(str::to_string),
            scope: None,
            subject: None,
            notes: note_titles
                .iter()
                .map(|title| Note {
                    title: title.to_string(),
                    text: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_note_overrides_type_rules() {
        let commits = vec![
            commit(Some("fix"), &[]),
            commit(Some("feat"), &["BREAKING CHANGE"]),
        ];
        let result = highest_release_type(&commits, &config()).unwrap();
        assert_eq!(result, Some(ReleaseType::Major));
    }

    #[test]
    fn test_strongest_type_rule_wins() {
        let commits = vec![commit(Some("fix"), &[]), commit(Some("feat"), &[])];
        let result = highest_release_type(&commits, &config()).unwrap();
        assert_eq!(result, Some(ReleaseType::Minor));
    }

    #[test]
    fn test_no_matching_rule_yields_none() {
        let commits = vec![commit(Some("chore"), &[])];
        let result = highest_release_type(&commits, &config()).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_empty_batch_yields_none() {
        let result = highest_release_type(&[], &config()).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_first_error_wins() {
        let bad_config: StyleConfig = serde_json::from_str(
            r#"{"types": [
                {"key": "feat", "release": "huge"},
                {"key": "fix", "release": "patch"}
            ]}"#,
        )
        .unwrap();
        let commits = vec![commit(Some("feat"), &[]), commit(Some("fix"), &[])];
        let err = highest_release_type(&commits, &bad_config).unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidReleaseType(ref v) if v == "huge"));
    }

    #[test]
    fn test_major_short_circuits_later_errors() {
        // The second commit would trip the invalid "huge" type rule, but the
        // first commit already settled the batch at major.
        let config: StyleConfig = serde_json::from_str(
            r#"{
                "types": [{"key": "oops", "release": "huge"}],
                "notes": [{"keyword": "BREAKING CHANGE", "release": "major"}]
            }"#,
        )
        .unwrap();
        let commits = vec![
            commit(Some("feat"), &["BREAKING CHANGE"]),
            commit(Some("oops"), &[]),
        ];
        let result = highest_release_type(&commits, &config).unwrap();
        assert_eq!(result, Some(ReleaseType::Major));
    }

    #[test]
    fn test_idempotent_over_immutable_inputs() {
        let commits = vec![
            commit(Some("fix"), &[]),
            commit(Some("feat"), &[]),
            commit(None, &["BREAKING CHANGE"]),
        ];
        let config = config();
        let first = highest_release_type(&commits, &config).unwrap();
        let second = highest_release_type(&commits, &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, Some(ReleaseType::Major));
    }
}
