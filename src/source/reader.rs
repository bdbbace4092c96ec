//! Line-oriented source list reader.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Read the usable entries from a source list file.
///
/// Returns the non-empty, non-comment lines in file order, trimmed of
/// surrounding whitespace. A file that cannot be opened yields an empty
/// sequence; callers treat that the same as a file with no usable content.
pub fn read_entries(path: impl AsRef<Path>) -> Vec<String> {
    match File::open(path) {
        Ok(file) => read_entries_from(file),
        Err(_) => Vec::new(),
    }
}

/// Read usable entries from any reader.
///
/// A line is a comment if its first non-whitespace character is `#`.
/// Everything else is kept verbatim after trimming; no domain or CIDR
/// validation happens here.
pub fn read_entries_from<R: Read>(reader: R) -> Vec<String> {
    let buf_reader = BufReader::new(reader);
    let mut entries = Vec::new();

    for line in buf_reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        entries.push(line.to_string());
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_blanks_and_comments() {
        let text = "\
# streaming services
netflix.com

hulu.com
   # indented comment
   max.com   \n";

        let entries = read_entries_from(text.as_bytes());
        assert_eq!(entries, ["netflix.com", "hulu.com", "max.com"]);
    }

    #[test]
    fn test_inline_hash_is_not_a_comment() {
        let text = "example.com#fragment\n";
        let entries = read_entries_from(text.as_bytes());
        assert_eq!(entries, ["example.com#fragment"]);
    }

    #[test]
    fn test_only_blanks_and_comments() {
        let text = "# a\n\n   \n# b\n";
        assert!(read_entries_from(text.as_bytes()).is_empty());
    }

    #[test]
    fn test_order_preserved_no_dedup() {
        let text = "b.com\na.com\nb.com\n";
        let entries = read_entries_from(text.as_bytes());
        assert_eq!(entries, ["b.com", "a.com", "b.com"]);
    }

    #[test]
    fn test_missing_file_is_empty() {
        assert!(read_entries("/nonexistent/path.lst").is_empty());
    }
}
