//! Text-block splitting: turns a raw model response into candidate record blocks.

use std::borrow::Cow;

/// Separator between record blocks in a model response.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Normalises Windows line endings so `\r\n\r\n` splits the same as `\n\n`.
pub fn normalize_newlines(raw: &str) -> Cow<'_, str> {
    if raw.contains('\r') {
        Cow::Owned(raw.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Splits `raw` on blank lines, returning trimmed, non-empty blocks in source order.
pub fn split_blocks(raw: &str) -> Vec<String> {
    normalize_newlines(raw)
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_blocks_preserves_order() {
        let raw = "Title: A\nDescription: first\n\nTitle: B\nDescription: second";
        let blocks = split_blocks(raw);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("Title: A"));
        assert!(blocks[1].starts_with("Title: B"));
    }

    #[test]
    fn test_split_blocks_drops_whitespace_only_blocks() {
        let raw = "\n\nTitle: A\n\n   \n\n\n\nTitle: B\n\n";
        let blocks = split_blocks(raw);
        assert_eq!(blocks, vec!["Title: A".to_string(), "Title: B".to_string()]);
    }

    #[test]
    fn test_split_blocks_empty_input() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("   \n\n \n").is_empty());
    }

    #[test]
    fn test_split_blocks_handles_crlf() {
        let raw = "Name: Alpha\r\nExplanation: one\r\n\r\nName: Beta\r\nExplanation: two";
        let blocks = split_blocks(raw);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "Name: Alpha\nExplanation: one");
    }

    #[test]
    fn test_split_blocks_trims_each_block() {
        let blocks = split_blocks("  Title: A  \n\n\tTitle: B\t");
        assert_eq!(blocks, vec!["Title: A".to_string(), "Title: B".to_string()]);
    }
}
