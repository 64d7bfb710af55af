use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ParsingConfig;

/// Line prefixes that open a new question: a number followed by a period
/// (`12.`) or `Q` followed by a number (`Q7`).
static BLOCK_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:\d+\.|Q\d+)").unwrap());

/// Split document text into question candidate blocks.
///
/// A new block begins at every line (other than the first line of the text)
/// that starts with a block marker. The line break in front of the marker
/// is consumed by the split. Blocks are returned untrimmed and may be
/// empty; text before the first marker forms the first block.
pub fn segment_blocks(text: &str) -> Vec<&str> {
    segment_blocks_with_config(text, &ParsingConfig::default())
}

/// Config-aware version of [`segment_blocks`].
pub(crate) fn segment_blocks_with_config<'a>(text: &'a str, config: &ParsingConfig) -> Vec<&'a str> {
    let marker_re = config.block_marker_re.as_ref().unwrap_or(&BLOCK_MARKER_RE);

    let mut blocks = Vec::new();
    let mut start = 0;
    for (newline, _) in text.match_indices('\n') {
        let line_start = newline + 1;
        if marker_re.is_match(&text[line_start..]) {
            blocks.push(&text[start..newline]);
            start = line_start;
        }
    }
    blocks.push(&text[start..]);
    blocks
}
