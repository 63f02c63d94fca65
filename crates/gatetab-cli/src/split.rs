//! Input-document splitting.
//!
//! Circuit blocks carry no separator token. A block ends on a line that
//! contains a space (a gate-wiring line) when the following line has
//! none (the next block's pin-count line), or at end of input.

/// Splits a document into per-circuit blocks.
pub fn split_blocks(doc: &str) -> Vec<String> {
    let lines: Vec<&str> = doc.lines().collect();
    let mut blocks = Vec::new();
    let mut block = String::new();
    for (i, line) in lines.iter().enumerate() {
        block.push_str(line);
        let boundary = line.contains(' ')
            && lines.get(i + 1).is_some_and(|next| !next.contains(' '));
        if boundary {
            blocks.push(std::mem::take(&mut block));
        } else {
            block.push('\n');
        }
    }
    // The last block has no following pin-count line to close it.
    if !block.trim().is_empty() {
        blocks.push(block);
    }
    blocks
}
