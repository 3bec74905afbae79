use super::Block;

/// Split text into blocks of consecutive non-blank lines
///
/// A line is blank when it is empty or whitespace only. Runs of blank lines,
/// including those at either end of the text, never produce empty blocks.
pub fn segment(text: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(Block { lines: std::mem::take(&mut current) });
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(Block { lines: current });
    }

    blocks
}
