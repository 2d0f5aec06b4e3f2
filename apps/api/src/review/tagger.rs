//! Splits free-text model feedback into labelled sections.
//!
//! Lines are classified on their trimmed form, first match wins:
//! 1. marker bullet (✅ ❌ ⚠️) → appended to the current section
//! 2. `overall rating:` (any case) → replaces the `Overall` entry
//! 3. ends with `:` → starts (or restarts) a section with that label
//! 4. anything else → appended to the current section
//!
//! Appended lines keep their original, untrimmed text plus a `\n`.
//! Header lines are consumed and never stored. Only the one trailing colon
//! is dropped from a header label: `Skills::` becomes `Skills:`, and colons
//! inside the label are kept.
//!
//! Line boundaries are the universal newlines set: `\n`, `\r\n`, a lone
//! `\r`, VT, FF, FS, GS, RS, NEL, U+2028 and U+2029.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::review::prompts::{MARKER_BAD, MARKER_CAUTION, MARKER_GOOD};

pub const GENERAL_SECTION: &str = "General";
pub const OVERALL_KEY: &str = "Overall";

const OVERALL_PREFIX: &str = "overall rating:";

/// Section label → accumulated text, in first-seen order.
///
/// Serializes as a JSON object with keys in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedFeedback {
    sections: Vec<(String, String)>,
}

impl TaggedFeedback {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, text)| text.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(l, _)| l.as_str())
    }

    pub(crate) fn len(&self) -> usize {
        self.sections.len()
    }

    /// Existing entry for `label`, or a new empty one at the end. An existing
    /// entry keeps its position.
    fn entry(&mut self, label: &str) -> &mut String {
        let idx = match self.sections.iter().position(|(l, _)| l == label) {
            Some(idx) => idx,
            None => {
                self.sections.push((label.to_string(), String::new()));
                self.sections.len() - 1
            }
        };
        &mut self.sections[idx].1
    }
}

impl Serialize for TaggedFeedback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (label, text) in &self.sections {
            map.serialize_entry(label, text)?;
        }
        map.end()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Marker,
    Overall,
    Header(&'a str),
    Body,
}

fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if [MARKER_GOOD, MARKER_BAD, MARKER_CAUTION]
        .iter()
        .any(|m| trimmed.starts_with(m))
    {
        return LineKind::Marker;
    }
    if trimmed.to_lowercase().starts_with(OVERALL_PREFIX) {
        return LineKind::Overall;
    }
    match trimmed.strip_suffix(':') {
        Some(label) => LineKind::Header(label),
        None => LineKind::Body,
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{1C}' | '\u{1D}' | '\u{1E}' | '\u{85}'
            | '\u{2028}' | '\u{2029}'
    )
}

/// Splits on every line boundary, treating `\r\n` as one. A trailing
/// boundary does not produce an empty last line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..idx]);
        let mut end = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(_, '\n')) = chars.peek() {
                chars.next();
                end += 1;
            }
        }
        start = end;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Partitions `feedback` into sections. `General` is always present and first.
pub fn tag_feedback(feedback: &str) -> TaggedFeedback {
    let mut tagged = TaggedFeedback::default();
    tagged.entry(GENERAL_SECTION);
    let mut current = GENERAL_SECTION.to_string();

    for line in split_lines(feedback) {
        match classify(line) {
            LineKind::Marker | LineKind::Body => {
                let text = tagged.entry(&current);
                text.push_str(line);
                text.push('\n');
            }
            LineKind::Overall => {
                *tagged.entry(OVERALL_KEY) = line.to_string();
            }
            LineKind::Header(label) => {
                tagged.entry(label).clear();
                current = label.to_string();
            }
        }
    }

    tagged
}
