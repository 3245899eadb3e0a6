use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error category, determined by error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Structure,
}

/// Numeric error code (E100–E199).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Structure errors (E100–E199) ──
    pub const UNMATCHED_CLOSE: Self = Self(100);
    pub const UNTERMINATED_BLOCK: Self = Self(101);

    /// Get the category for this error code.
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            100..=199 => ErrorCategory::Structure,
            _ => ErrorCategory::Structure, // fallback
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// A structured ATA compile error.
///
/// Compilation stops at the first one; there is no warnings mode.
/// Editors render these from the fields, not by parsing the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtaError {
    /// Source file name.
    pub file: String,
    /// Error code (e.g., E100).
    pub code: ErrorCode,
    /// Error category (derived from code).
    pub category: ErrorCategory,
    /// Human-readable error message.
    pub message: String,
    /// Source location.
    #[serde(flatten)]
    pub span: Span,
    /// The exact source line for context.
    pub source_line: String,
    /// Optional fix suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl AtaError {
    /// Create a new error.
    pub fn new(
        file: impl Into<String>,
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            code,
            category: code.category(),
            message: message.into(),
            span,
            source_line: source_line.into(),
            suggestion: None,
        }
    }

    /// Attach a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// `true` for a `değilse`/`bitti` with no open block.
    pub fn is_unmatched_close(&self) -> bool {
        self.code == ErrorCode::UNMATCHED_CLOSE
    }

    /// `true` when input ended with blocks still open.
    pub fn is_unterminated_block(&self) -> bool {
        self.code == ErrorCode::UNTERMINATED_BLOCK
    }

    /// Render the error with the offending line and a caret underline.
    pub fn render(&self) -> String {
        let mut out = format!("{self}");
        if !self.source_line.is_empty() {
            let number = self.span.start_line.to_string();
            let pad = " ".repeat(number.len());
            let indent = " ".repeat(self.span.start_col.saturating_sub(1) as usize);
            let width = self.span.end_col.saturating_sub(self.span.start_col).max(1) as usize;
            out.push_str(&format!(
                "\n{pad} |\n{number} | {}\n{pad} | {indent}{}",
                self.source_line,
                "^".repeat(width)
            ));
        }
        if let Some(suggestion) = &self.suggestion {
            out.push_str(&format!("\n  = help: {suggestion}"));
        }
        out
    }
}

impl fmt::Display for AtaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}] {}",
            self.file, self.span, self.code, self.category, self.message
        )
    }
}

impl std::error::Error for AtaError {}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure => write!(f, "structure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AtaError {
        AtaError::new(
            "kare.ata",
            ErrorCode::UNMATCHED_CLOSE,
            "line 3: 'bitti' has no open block to close",
            Span::new(3, 1, 3, 6),
            "bitti",
        )
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::UNMATCHED_CLOSE.category(), ErrorCategory::Structure);
        assert_eq!(ErrorCode::UNTERMINATED_BLOCK.category(), ErrorCategory::Structure);
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::UNMATCHED_CLOSE), "E100");
        assert_eq!(format!("{}", ErrorCode::UNTERMINATED_BLOCK), "E101");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            sample().to_string(),
            "kare.ata:3:1: E100 [structure] line 3: 'bitti' has no open block to close"
        );
    }

    #[test]
    fn test_error_with_suggestion() {
        let err = sample().with_suggestion("remove the extra 'bitti'");
        assert_eq!(err.suggestion.as_deref(), Some("remove the extra 'bitti'"));
        assert!(err.render().ends_with("= help: remove the extra 'bitti'"));
    }

    #[test]
    fn test_render_underlines_span() {
        let rendered = sample().render();
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows[2], "3 | bitti");
        assert_eq!(rows[3], "  | ^^^^^");
    }

    #[test]
    fn test_error_json_serialization() {
        let err = sample().with_suggestion("remove it");
        let json = serde_json::to_string_pretty(&err).unwrap();
        assert!(json.contains("\"code\""));
        assert!(json.contains("\"source_line\""));
        assert!(json.contains("\"suggestion\""));
        assert!(json.contains("\"line\""), "JSON must use 'line' not 'start_line'");
        assert!(json.contains("\"column\""), "JSON must use 'column' not 'start_col'");
        assert!(json.contains("\"end_column\""));

        let back: AtaError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_error_kind_predicates() {
        assert!(sample().is_unmatched_close());
        assert!(!sample().is_unterminated_block());
    }
}
