//! Physical and normalized source lines.

use crate::Span;

/// One physical line of an ATA buffer, as split on line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'src> {
    /// 1-based line number.
    pub number: u32,
    /// Raw text without the line terminator.
    pub text: &'src str,
}

impl<'src> SourceLine<'src> {
    pub fn new(number: u32, text: &'src str) -> Self {
        Self { number, text }
    }
}

/// Why a line was elided before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    Comment,
}

/// A source line after whitespace trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizedLine<'src> {
    /// A line carrying a statement.
    Line {
        number: u32,
        trimmed: &'src str,
        span: Span,
    },
    /// A blank or `#` comment line.
    Skip { number: u32, reason: SkipReason },
}

impl<'src> NormalizedLine<'src> {
    /// The originating 1-based line number.
    pub fn number(&self) -> u32 {
        match self {
            Self::Line { number, .. } | Self::Skip { number, .. } => *number,
        }
    }

    /// The trimmed text, or `None` for skipped lines.
    pub fn text(&self) -> Option<&'src str> {
        match self {
            Self::Line { trimmed, .. } => Some(trimmed),
            Self::Skip { .. } => None,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip { .. })
    }
}
