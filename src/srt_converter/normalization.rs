// Cue text normalization: line joining and the optional punctuation tidy pass

/// Punctuation that attaches to the preceding word when tidying
const TIGHT_PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

/// Join a block's text lines with single spaces and trim the result
pub fn join_cue_lines(lines: &[&str]) -> String {
    let mut result = String::new();
    join_cue_lines_into(lines, &mut result);
    result
}

/// Join cue lines into supplied buffer, clearing it first
pub fn join_cue_lines_into(lines: &[&str], buffer: &mut String) {
    buffer.clear();
    buffer.reserve(lines.iter().map(|line| line.len() + 1).sum());

    for line in lines {
        if !buffer.is_empty() {
            buffer.push(' ');
        }
        buffer.push_str(line);
    }

    let trimmed = buffer.trim();
    if trimmed.len() != buffer.len() {
        let trimmed_content = trimmed.to_string();
        buffer.clear();
        buffer.push_str(&trimmed_content);
    }
}

/// Drop whitespace before `. , ! ? ; :` and collapse other whitespace runs to one space
///
/// Leading and trailing whitespace is removed as well.
pub fn tidy_punctuation(text: &str) -> String {
    let mut buffer = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }

        if pending_space && !buffer.is_empty() && !TIGHT_PUNCTUATION.contains(&ch) {
            buffer.push(' ');
        }
        pending_space = false;
        buffer.push(ch);
    }

    buffer
}
