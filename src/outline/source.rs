//! Read-only line access for outline extraction and navigation

use std::borrow::Cow;

/// A random-access sequence of lines (without line terminators)
pub trait LineSource {
    fn line_count(&self) -> usize;

    /// Line text without its trailing newline, `None` when out of bounds
    fn line_at(&self, idx: usize) -> Option<Cow<'_, str>>;

    /// Length of a line in chars, 0 when out of bounds
    fn line_len(&self, idx: usize) -> usize {
        self.line_at(idx).map(|l| l.chars().count()).unwrap_or(0)
    }

    /// Every line in order
    fn iter_lines<'a>(&'a self) -> Box<dyn Iterator<Item = Cow<'a, str>> + 'a> {
        Box::new((0..self.line_count()).filter_map(move |idx| self.line_at(idx)))
    }
}

/// Whole text; lines split on `\n` or `\r\n` as [`str::lines`] does
impl LineSource for str {
    fn line_count(&self) -> usize {
        self.lines().count()
    }

    fn line_at(&self, idx: usize) -> Option<Cow<'_, str>> {
        self.lines().nth(idx).map(|l| Cow::Borrowed(l.trim_end_matches('\r')))
    }

    fn iter_lines<'a>(&'a self) -> Box<dyn Iterator<Item = Cow<'a, str>> + 'a> {
        Box::new(self.lines().map(|l| Cow::Borrowed(l.trim_end_matches('\r'))))
    }
}

impl<S: AsRef<str>> LineSource for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_at(&self, idx: usize) -> Option<Cow<'_, str>> {
        self.get(idx)
            .map(|l| Cow::Borrowed(l.as_ref().trim_end_matches(['\n', '\r'])))
    }
}

impl<S: AsRef<str>> LineSource for Vec<S> {
    fn line_count(&self) -> usize {
        self.as_slice().line_count()
    }

    fn line_at(&self, idx: usize) -> Option<Cow<'_, str>> {
        self.as_slice().line_at(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_source_trims_terminators() {
        let lines = ["first\r\n", "second"];
        assert_eq!(lines[..].line_count(), 2);
        assert_eq!(lines[..].line_at(0).as_deref(), Some("first"));
        assert_eq!(lines[..].line_len(1), 6);
        assert!(lines[..].line_at(2).is_none());
    }

    #[test]
    fn test_str_source_matches_slice_source() {
        let text = "class A {\r\n  x = 1;\n\n}\n";
        let lines = ["class A {", "  x = 1;", "", "}"];

        assert_eq!(text.line_count(), lines[..].line_count());
        for idx in 0..=lines.len() {
            assert_eq!(text.line_at(idx), lines[..].line_at(idx), "line {}", idx);
            assert_eq!(text.line_len(idx), lines[..].line_len(idx), "line {}", idx);
        }
        let walked: Vec<Cow<'_, str>> = text.iter_lines().collect();
        let expected: Vec<Cow<'_, str>> = lines[..].iter_lines().collect();
        assert_eq!(walked, expected);
    }

    #[test]
    fn test_empty_str_has_no_lines() {
        assert_eq!("".line_count(), 0);
        assert!("".line_at(0).is_none());
        assert_eq!("".iter_lines().count(), 0);
    }

    #[test]
    fn test_line_len_counts_chars() {
        let lines = vec!["naïve".to_string()];
        assert_eq!(lines.line_len(0), 5);
        assert_eq!(lines.line_len(9), 0);
    }
}
