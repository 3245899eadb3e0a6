use serde::{Deserialize, Serialize};
use std::fmt;

use crate::line::SourceLine;

/// Source location span.
///
/// All line/column values are 1-based for human-readable error messages.
/// Columns count characters, not bytes, so Turkish keywords line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    #[serde(rename = "line")]
    pub start_line: u32,
    #[serde(rename = "column")]
    pub start_col: u32,
    pub end_line: u32,
    #[serde(rename = "end_column")]
    pub end_col: u32,
}

impl Span {
    /// Create a new span.
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Create a zero-width span at a single position.
    pub fn point(line: u32, col: u32) -> Self {
        Self::new(line, col, line, col)
    }

    /// Span of the non-whitespace part of a physical line.
    ///
    /// A blank line yields a point span at column 1.
    pub fn of_trimmed(line: u32, raw: &str) -> Self {
        let leading = raw.chars().take_while(|c| c.is_whitespace()).count();
        let body = raw.trim().chars().count();
        if body == 0 {
            return Self::point(line, 1);
        }
        let start = leading as u32 + 1;
        Self::new(line, start, line, start + body as u32)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_col)
    }
}

/// Holds the source text of one ATA buffer.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub source: String,
    /// Cached line start byte offsets for fast line lookup.
    line_starts: Vec<usize>,
}

impl SourceFile {
    /// Create a new source file.
    ///
    /// Lines break on `\n`, `\r\n` and a lone `\r`.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let bytes = source.as_bytes();
        let line_starts = std::iter::once(0)
            .chain(bytes.iter().enumerate().filter_map(|(i, &b)| {
                let breaks = b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n'));
                breaks.then_some(i + 1)
            }))
            .collect();
        Self {
            name: name.into(),
            source,
            line_starts,
        }
    }

    /// Extract a source line by 1-based line number.
    ///
    /// Returns `None` if the line number is out of range.
    pub fn line(&self, line_number: u32) -> Option<&str> {
        let idx = line_number.checked_sub(1)? as usize;
        if idx >= self.line_starts.len() {
            return None;
        }
        let start = self.line_starts[idx];
        let end = self
            .line_starts
            .get(idx + 1)
            .map(|&s| s.saturating_sub(1)) // strip the break
            .unwrap_or(self.source.len());
        let line = &self.source[start..end];
        // CRLF leaves its \r behind
        Some(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Get the total number of lines.
    ///
    /// A trailing line break does not start a new line, matching how
    /// editors count.
    pub fn line_count(&self) -> usize {
        if self.line_starts.len() > 1 && self.line_starts.last() == Some(&self.source.len()) {
            self.line_starts.len() - 1
        } else {
            self.line_starts.len()
        }
    }

    /// Iterate the physical lines in order.
    pub fn lines(&self) -> impl Iterator<Item = SourceLine<'_>> + '_ {
        (1..=self.line_count() as u32).filter_map(move |number| {
            self.line(number).map(|text| SourceLine { number, text })
        })
    }

    /// Render the line-number gutter for this buffer.
    ///
    /// One right-aligned number per physical line; an empty buffer still
    /// shows line 1, like an empty editor does.
    pub fn gutter(&self) -> String {
        let count = self.line_count().max(1);
        let width = count.to_string().len();
        (1..=count)
            .map(|n| format!("{n:>width$}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The buffer with the gutter printed beside every line.
    pub fn numbered(&self) -> String {
        let width = self.line_count().max(1).to_string().len();
        self.lines()
            .map(|l| format!("{:>width$} | {}", l.number, l.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_point() {
        let s = Span::point(1, 5);
        assert_eq!(s.start_line, 1);
        assert_eq!(s.start_col, 5);
        assert_eq!(s.end_line, 1);
        assert_eq!(s.end_col, 5);
    }

    #[test]
    fn test_span_of_trimmed_counts_chars() {
        let s = Span::of_trimmed(4, "    eğer x ise  ");
        assert_eq!(s.start_line, 4);
        assert_eq!(s.start_col, 5);
        assert_eq!(s.end_col, 5 + "eğer x ise".chars().count() as u32);
    }

    #[test]
    fn test_span_of_blank_line() {
        assert_eq!(Span::of_trimmed(2, "   "), Span::point(2, 1));
    }

    #[test]
    fn test_span_display() {
        let s = Span::new(3, 7, 3, 15);
        assert_eq!(format!("{s}"), "3:7");
    }

    #[test]
    fn test_source_file_line_extraction() {
        let src = SourceFile::new("test.ata", "line one\nline two\nline three");
        assert_eq!(src.line(1), Some("line one"));
        assert_eq!(src.line(2), Some("line two"));
        assert_eq!(src.line(3), Some("line three"));
        assert_eq!(src.line(0), None);
        assert_eq!(src.line(4), None);
    }

    #[test]
    fn test_source_file_crlf() {
        let src = SourceFile::new("test.ata", "yaz 1\r\nyaz 2\r\n");
        assert_eq!(src.line(1), Some("yaz 1"));
        assert_eq!(src.line(2), Some("yaz 2"));
        assert_eq!(src.line_count(), 2);
    }

    #[test]
    fn test_source_file_lone_cr() {
        let src = SourceFile::new("test.ata", "tekrar 2\ryaz 1\rbitti\r");
        assert_eq!(src.line_count(), 3);
        assert_eq!(src.line(2), Some("yaz 1"));
        assert_eq!(src.line(3), Some("bitti"));

        let mixed = SourceFile::new("test.ata", "a\r\nb\rc\nd");
        let texts: Vec<&str> = mixed.lines().map(|l| l.text).collect();
        assert_eq!(texts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_source_file_line_count() {
        let src = SourceFile::new("test.ata", "a\nb\nc");
        assert_eq!(src.line_count(), 3);
    }

    #[test]
    fn test_source_file_empty() {
        let src = SourceFile::new("test.ata", "");
        assert_eq!(src.line_count(), 1);
        assert_eq!(src.line(1), Some(""));
    }

    #[test]
    fn test_lines_are_numbered_from_one() {
        let src = SourceFile::new("test.ata", "yaz 1\n\n# not\nbitti\n");
        let numbers: Vec<u32> = src.lines().map(|l| l.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(src.lines().last().map(|l| l.text), Some("bitti"));
    }

    #[test]
    fn test_gutter_right_aligns() {
        let text = (1..=10).map(|i| format!("yaz {i}")).collect::<Vec<_>>().join("\n");
        let src = SourceFile::new("test.ata", text);
        let gutter = src.gutter();
        let rows: Vec<&str> = gutter.lines().collect();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], " 1");
        assert_eq!(rows[9], "10");
    }

    #[test]
    fn test_gutter_of_empty_buffer() {
        assert_eq!(SourceFile::new("a.ata", "").gutter(), "1");
    }

    #[test]
    fn test_numbered_view() {
        let src = SourceFile::new("test.ata", "tekrar 2\nyaz 1\nbitti");
        assert_eq!(src.numbered(), "1 | tekrar 2\n2 | yaz 1\n3 | bitti");
    }
}
