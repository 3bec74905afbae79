use super::Cue;

const CONTINUOUS_SEPARATOR: &str = " ";
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Join non-empty cues into the output text
///
/// Continuous mode separates cues with a single space; paragraph mode with a
/// blank line. Empty cues are skipped and never introduce a separator. No
/// trailing newline is added.
pub fn render(cues: &[Cue], paragraph_mode: bool) -> String {
    let separator = if paragraph_mode {
        PARAGRAPH_SEPARATOR
    } else {
        CONTINUOUS_SEPARATOR
    };

    cues.iter()
        .filter(|cue| !cue.is_empty())
        .map(|cue| cue.text.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
