//! Line normalizer: trims each physical line and tags the ones the
//! classifier never sees.

use ata_types::{NormalizedLine, SkipReason, SourceFile, SourceLine, Span};

/// Prefix that turns a line into a comment.
pub const COMMENT_PREFIX: char = '#';

/// Normalize one physical line.
///
/// Blank lines and lines whose trimmed text starts with `#` become
/// [`NormalizedLine::Skip`]. Never fails.
pub fn normalize<'src>(line: &SourceLine<'src>) -> NormalizedLine<'src> {
    let trimmed = line.text.trim();
    if trimmed.is_empty() {
        return NormalizedLine::Skip {
            number: line.number,
            reason: SkipReason::Blank,
        };
    }
    if trimmed.starts_with(COMMENT_PREFIX) {
        return NormalizedLine::Skip {
            number: line.number,
            reason: SkipReason::Comment,
        };
    }
    NormalizedLine::Line {
        number: line.number,
        trimmed,
        span: Span::of_trimmed(line.number, line.text),
    }
}

/// Re-render a buffer as its surviving, trimmed lines.
///
/// Applying this to its own output returns the same text.
pub fn normalize_source(source: &str) -> String {
    let file = SourceFile::new("", source);
    let kept: Vec<&str> = file.lines().filter_map(|line| normalize(&line).text()).collect();
    kept.join("\n")
}
