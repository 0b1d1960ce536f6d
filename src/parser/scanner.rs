//! Character-level scanning helpers: bracket matching and identifiers.

use crate::error::{LogicError, Result};

/// Input text split into characters, with positions counted in characters.
pub(crate) struct Scanner {
    text: String,
    chars: Vec<char>,
}

impl Scanner {
    pub(crate) fn new(text: &str) -> Self {
        Scanner {
            text: text.to_string(),
            chars: text.chars().collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.chars.len()
    }

    pub(crate) fn at(&self, i: usize) -> char {
        self.chars[i]
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    /// Verify that brackets balance over the whole input.
    pub(crate) fn check_brackets(&self) -> Result<()> {
        let mut depth: i64 = 0;
        for (i, c) in self.chars.iter().enumerate() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth < 0 {
                        return Err(self.bracket_error(i));
                    }
                }
                _ => {}
            }
        }
        if depth != 0 {
            return Err(self.bracket_error(self.chars.len()));
        }
        Ok(())
    }

    /// Index of the bracket closing the one opened at `open`.
    pub(crate) fn matching_close(&self, open: usize, end: usize) -> Result<usize> {
        let mut depth = 0usize;
        for i in open..end {
            match self.chars[i] {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(i);
                    }
                }
                _ => {}
            }
        }
        Err(self.bracket_error(open))
    }

    pub(crate) fn bracket_error(&self, position: usize) -> LogicError {
        LogicError::Bracket {
            text: self.text.clone(),
            position,
        }
    }

    /// Skip whitespace starting at `i`, stopping at `end`.
    pub(crate) fn skip_whitespace(&self, mut i: usize, end: usize) -> usize {
        while i < end && self.chars[i].is_whitespace() {
            i += 1;
        }
        i
    }

    /// Read an identifier starting at `i`. Returns the name and the index after it.
    pub(crate) fn identifier(&self, start: usize, end: usize) -> Option<(String, usize)> {
        let mut i = start;
        while i < end && is_identifier_char(self.chars[i]) {
            i += 1;
        }
        if i == start {
            None
        } else {
            Some((self.slice(start, i), i))
        }
    }
}

pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_brackets() {
        assert!(Scanner::new("(P(x) ∧ Q(y))").check_brackets().is_ok());
    }

    #[test]
    fn test_unbalanced_brackets_report_position() {
        let err = Scanner::new("P(x))").check_brackets().unwrap_err();
        assert!(matches!(err, LogicError::Bracket { position: 4, .. }));
        let err = Scanner::new("((P(x)").check_brackets().unwrap_err();
        assert!(matches!(err, LogicError::Bracket { position: 6, .. }));
    }

    #[test]
    fn test_matching_close_skips_nested() {
        let s = Scanner::new("(f(x), y)");
        assert_eq!(s.matching_close(0, s.len()).unwrap(), 8);
        assert_eq!(s.matching_close(2, s.len()).unwrap(), 4);
    }

    #[test]
    fn test_identifier_with_unicode_and_underscore() {
        let s = Scanner::new("Größe_2(x)");
        assert_eq!(s.identifier(0, s.len()), Some(("Größe_2".to_string(), 7)));
        assert_eq!(s.identifier(7, s.len()), None);
    }
}
