//! Line splitting for diff input.
//!
//! Splits a text blob into its lines the way a line reader would: CR, LF,
//! and CRLF all end a line, with the terminator discarded. A blob ending at
//! a line boundary produces no trailing empty line.

use std::io::BufRead;

use crate::error::DiffResult;

/// Split a text blob into its lines.
///
/// A final unterminated fragment is kept as the last line. No normalization
/// happens beyond discarding the terminators themselves.
///
/// `str::lines` is not used here because it does not treat a lone CR as a
/// line boundary.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => lines.push(std::mem::take(&mut current)),
            '\r' => {
                // CRLF counts as a single boundary.
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Read a streamed text blob to the end and split it into lines.
///
/// Any read error aborts with [`DiffError::InputRead`](crate::DiffError);
/// lines read before the failure are discarded rather than diffed as if they
/// were the whole text.
pub fn read_lines<R: BufRead>(mut reader: R) -> DiffResult<Vec<String>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(split_lines(&text))
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read};

    use super::*;

    #[test]
    fn lf_terminated_lines() {
        assert_eq!(split_lines("a\nb\nc\n"), vec!["a", "b", "c"]);
    }

    #[test]
    fn crlf_terminated_lines() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn lone_cr_is_a_boundary() {
        assert_eq!(split_lines("a\rb\rc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn mixed_terminators() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn unterminated_fragment_is_kept() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn trailing_terminator_adds_no_empty_line() {
        assert_eq!(split_lines("a\n").len(), 1);
        assert_eq!(split_lines("a\r\n").len(), 1);
        assert_eq!(split_lines("a\r").len(), 1);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn interior_blank_lines_are_preserved() {
        assert_eq!(split_lines("a\n\n\nb"), vec!["a", "", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn read_lines_from_cursor() {
        let lines = read_lines(Cursor::new("x\ny\n")).unwrap();
        assert_eq!(lines, vec!["x", "y"]);
    }

    /// Reader that fails partway through, after yielding some content.
    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                Err(io::Error::new(io::ErrorKind::Other, "stream broke"))
            } else {
                self.served = true;
                buf[..5].copy_from_slice(b"a\nb\n ");
                Ok(5)
            }
        }
    }

    #[test]
    fn read_failure_discards_partial_lines() {
        let reader = io::BufReader::new(FailingReader { served: false });
        let err = read_lines(reader).unwrap_err();
        assert!(matches!(err, crate::DiffError::InputRead(_)));
    }
}
