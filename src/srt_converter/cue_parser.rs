// Block → Cue state machine: expecting-index → expecting-timestamp → collecting-text
// Malformed blocks degrade to "whatever is left is text"; nothing here fails

use regex_automata::meta::Regex;

use super::normalization::join_cue_lines;
use super::{Block, Cue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    ExpectingIndex,
    ExpectingTimestamp,
    CollectingText,
}

/// Subtitle sequence number: non-empty and ASCII digits only
pub fn is_index_line(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

/// Extract the cue text of one block
///
/// The index line is only recognised as the first line and the timestamp line
/// only directly after it (or first, when the index is missing).
pub fn parse_block(block: &Block<'_>, timestamp: &Regex) -> Cue {
    let mut state = ParseState::ExpectingIndex;
    let mut has_index = false;
    let mut has_timestamp = false;
    let mut text_lines: Vec<&str> = Vec::with_capacity(block.lines.len());

    for raw_line in &block.lines {
        // WHY: a trailing space or stray `\r` would otherwise double the single
        // space used when joining lines, and indented index lines would not match
        let line = raw_line.trim();

        if state == ParseState::ExpectingIndex {
            state = ParseState::ExpectingTimestamp;
            if is_index_line(line) {
                has_index = true;
                continue;
            }
        }

        if state == ParseState::ExpectingTimestamp {
            state = ParseState::CollectingText;
            if timestamp.is_match(line) {
                has_timestamp = true;
                continue;
            }
        }

        text_lines.push(line);
    }

    Cue {
        text: join_cue_lines(&text_lines),
        has_index,
        has_timestamp,
    }
}
