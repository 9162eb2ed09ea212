//! Conventional commit message parsing.
//!
//! Turns a raw commit message into the structure the rule resolver works
//! with: an optional commit type keyword and a list of footer notes. The
//! analysis core never reads raw message text itself.

use regex_lite::Regex;

/// A structured footer annotation, e.g. a breaking-change marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub text: String,
}

/// A commit message parsed into conventional-commit structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    pub commit_type: Option<String>,
    pub scope: Option<String>,
    pub subject: Option<String>,
    pub notes: Vec<Note>,
}

/// Parse a commit message.
///
/// Returns `None` for empty or blank messages; those commits are skipped by
/// the analyzer, never errored. Non-conventional messages still parse, with
/// no commit type, and their footer lines are still scanned for notes.
pub fn parse_commit_message(message: &str) -> Option<ParsedCommit> {
    if message.trim().is_empty() {
        return None;
    }

    let first_line = message.lines().next().unwrap_or("");

    // Header: type(scope)!: subject
    let header_re = Regex::new(r"^(\w+)(?:\(([^)]+)\))?(!)?\s*:\s*(.+)$").unwrap();

    let (commit_type, scope, breaking_mark, subject) = match header_re.captures(first_line) {
        Some(caps) => (
            caps.get(1).map(|m| m.as_str().to_string()),
            caps.get(2).map(|m| m.as_str().to_string()),
            caps.get(3).is_some(),
            caps.get(4).map(|m| m.as_str().trim().to_string()),
        ),
        None => (None, None, false, None),
    };

    let mut notes = parse_notes(message);

    // `type!: subject` is shorthand for a BREAKING CHANGE footer
    if breaking_mark && !notes.iter().any(|n| n.title == "BREAKING CHANGE") {
        notes.push(Note {
            title: "BREAKING CHANGE".to_string(),
            text: subject.clone().unwrap_or_default(),
        });
    }

    Some(ParsedCommit {
        commit_type,
        scope,
        subject,
        notes,
    })
}

/// Collect footer notes from the lines after the header.
///
/// A note opens on a line of the form `UPPER-CASE TITLE: text` and keeps
/// collecting following lines into its text until the next note or the end
/// of the message.
fn parse_notes(message: &str) -> Vec<Note> {
    let note_re = Regex::new(r"^([A-Z][A-Z -]*[A-Z]): (.*)$").unwrap();

    let mut notes: Vec<Note> = Vec::new();

    for line in message.lines().skip(1) {
        if let Some(caps) = note_re.captures(line) {
            notes.push(Note {
                title: caps[1].to_string(),
                text: caps[2].trim().to_string(),
            });
        } else if let Some(open) = notes.last_mut() {
            let line = line.trim();
            if !line.is_empty() {
                if !open.text.is_empty() {
                    open.text.push('\n');
                }
                open.text.push_str(line);
            }
        }
    }

    notes
}
