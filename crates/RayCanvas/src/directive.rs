//! # Directive Parser
//!
//! Turns loosely formatted text such as
//! `"Blue lines from four corners, green lines from the midpoints of four sides"`
//! into an ordered list of [`Directive`]s.
//!
//! Parsing is total: every fragment either resolves or is skipped. Skipped
//! fragments are reported through `tracing` and never reach the caller.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::anchor::AnchorKind;

static FRAGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+) lines from ([\w ]+)").expect("fragment pattern is valid"));

/// A single parsed `(color, anchor)` instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    /// The color word as typed (lowercased). Resolved at draw time.
    pub color: String,
    pub anchor: AnchorKind,
}

impl Directive {
    pub fn new(color: impl Into<String>, anchor: AnchorKind) -> Self {
        Self {
            color: color.into(),
            anchor,
        }
    }
}

/// Why a fragment produced no directive.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FragmentError {
    #[error("fragment does not read `<color> lines from <anchor>`")]
    NoMatch,
    #[error("unknown anchor `{0}`")]
    UnknownAnchor(String),
}

/// Lowercases `text` and drops everything except ASCII word characters,
/// commas and spaces.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ',' | ' '))
        .collect()
}

/// Parses one already-normalized fragment.
pub fn parse_fragment(fragment: &str) -> Result<Directive, FragmentError> {
    let caps = FRAGMENT.captures(fragment).ok_or(FragmentError::NoMatch)?;
    let color = &caps[1];
    let phrase = caps[2].trim();

    let anchor = AnchorKind::from_phrase(phrase)
        .ok_or_else(|| FragmentError::UnknownAnchor(phrase.to_string()))?;

    Ok(Directive::new(color, anchor))
}

/// Parses a full instruction string.
///
/// Output order follows the comma-separated fragments. Duplicates are kept:
/// each one draws another set of rays.
pub fn parse(text: &str) -> Vec<Directive> {
    let normalized = normalize(text);

    normalized
        .split(',')
        .filter_map(|fragment| match parse_fragment(fragment) {
            Ok(directive) => Some(directive),
            Err(err) => {
                tracing::debug!(fragment = %fragment, error = %err, "Skipping fragment");
                None
            }
        })
        .collect()
}
