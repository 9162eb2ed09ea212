//! Rule resolution: mapping one parsed commit to a release severity.

use crate::commit::{Note, ParsedCommit};
use crate::config::{NoteRule, StyleConfig};
use crate::error::AnalyzerError;
use crate::release::{ReleaseType, higher_of};

/// Release type implied by a commit's type keyword, if any.
///
/// The first matching `types` entry wins. An entry without a `release`
/// matches but implies nothing. An absent commit type matches nothing.
pub fn release_type_from_commit_type(
    commit_type: Option<&str>,
    config: &StyleConfig,
) -> Result<Option<ReleaseType>, AnalyzerError> {
    let Some(commit_type) = commit_type else {
        return Ok(None);
    };

    let rule = config.types.iter().find(|rule| rule.key == commit_type);

    match rule.and_then(|rule| rule.release.as_deref()) {
        Some(release) => Ok(Some(release.parse()?)),
        None => Ok(None),
    }
}

fn note_rule_applies(note: &Note, rule: &NoteRule) -> bool {
    note.title == rule.keyword
        || rule
            .alias
            .as_ref()
            .is_some_and(|aliases| aliases.iter().any(|alias| *alias == note.title))
}

/// Release type implied by one footer note, if any.
///
/// Every note rule that declares a release is validated, whether or not it
/// applies to this note; a malformed configured release is a fatal
/// configuration error, never skipped. When several rules apply (overlapping
/// aliases), the strongest release wins.
pub fn release_type_from_note(
    note: &Note,
    config: &StyleConfig,
) -> Result<Option<ReleaseType>, AnalyzerError> {
    let mut strongest = None;

    for rule in &config.notes {
        let Some(release) = rule.release.as_deref() else {
            continue;
        };
        let release: ReleaseType = release.parse()?;

        if note_rule_applies(note, rule) {
            strongest = higher_of(strongest, Some(release));
        }
    }

    Ok(strongest)
}

/// Release type implied by a whole commit: the stronger of its type rule and
/// the strongest of its note rules.
pub fn release_type_from_commit(
    commit: &ParsedCommit,
    config: &StyleConfig,
) -> Result<Option<ReleaseType>, AnalyzerError> {
    let from_type = release_type_from_commit_type(commit.commit_type.as_deref(), config)?;

    let mut from_notes = None;
    for note in &commit.notes {
        from_notes = higher_of(from_notes, release_type_from_note(note, config)?);
    }

    Ok(higher_of(from_type, from_notes))
}
