//! Line preprocessing.

/// Byte order mark some editors write at the start of UTF-8 files.
const BOM: char = '\u{feff}';

/// Marks a comment line when it is the first non-whitespace character.
pub(crate) const COMMENT: char = ';';

/// Split `text` into its significant lines.
///
/// Each line is trimmed; blank lines and `;` comment lines are dropped. Order
/// is preserved and the returned slices borrow from `text`.
pub fn significant_lines(text: &str) -> Vec<&str> {
    text.strip_prefix(BOM)
        .unwrap_or(text)
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_blank_and_comment_lines() {
        let text = "; leading comment\n\n  [Server]  \n\t\n  ; indented comment\naddress = localhost\n";
        assert_eq!(significant_lines(text), vec!["[Server]", "address = localhost"]);
    }

    #[test]
    fn test_handles_crlf() {
        let text = "[Server]\r\nport = 80\r\n";
        assert_eq!(significant_lines(text), vec!["[Server]", "port = 80"]);
    }

    #[test]
    fn test_strips_bom() {
        let text = "\u{feff}[Server]\nport = 80";
        assert_eq!(significant_lines(text), vec!["[Server]", "port = 80"]);
    }

    #[test]
    fn test_semicolon_inside_line_is_kept() {
        assert_eq!(significant_lines("text = a;b"), vec!["text = a;b"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(significant_lines("").is_empty());
        assert!(significant_lines("\n ; only a comment\n\n").is_empty());
    }
}
