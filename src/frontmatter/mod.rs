//! Leading YAML frontmatter handling.
//!
//! A frontmatter block starts with a first line that is exactly `---`
//! (surrounding whitespace ignored, Unicode whitespace included) and ends at
//! the next such line.
//! An unterminated block is not frontmatter: the input is left as is.

const DELIMITER: &[u8] = b"---";

/// Split `input` into the frontmatter block and the body that follows it.
///
/// The block is the raw bytes between the two delimiter lines, the body is
/// everything after the closing delimiter line.
/// Returns `None` if the input does not start with a terminated block.
pub fn split(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let mut lines = input.split(|b| *b == b'\n');

    let first = lines.next()?;
    if !is_delimiter(first) {
        return None;
    }

    let block_start = first.len() + 1;
    let mut offset = block_start;

    for line in lines {
        let line_end = offset + line.len();

        if is_delimiter(line) {
            // The closing line may be the last one, without a trailing `\n`.
            let body_start = (line_end + 1).min(input.len());
            return Some((&input[block_start..offset], &input[body_start..]));
        }

        offset = line_end + 1;
    }

    None
}

/// Return the bytes to hand to the Markdown converter.
pub fn strip(input: &[u8]) -> &[u8] {
    match split(input) {
        Some((block, body)) => {
            tracing::debug!("stripped frontmatter: {} bytes", block.len());
            body
        }
        None => input,
    }
}

fn is_delimiter(line: &[u8]) -> bool {
    match std::str::from_utf8(line) {
        Ok(line) => line.trim().as_bytes() == DELIMITER,
        Err(_) => line.trim_ascii() == DELIMITER,
    }
}
