//! Codegen error types.

use ata_types::StatementKind;
use thiserror::Error;

/// Block-structure violations found while tracking depth.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// A closing keyword arrived with no open block.
    #[error("line {line}: '{keyword}' has no open block to close")]
    UnmatchedClose { keyword: StatementKind, line: u32 },

    /// Input ended while blocks were still open.
    #[error("missing 'bitti': {open} block(s) still open, innermost opened by '{keyword}' on line {line}")]
    UnterminatedBlock {
        open: usize,
        keyword: StatementKind,
        line: u32,
    },
}

impl StructuralError {
    /// The source line the error points at.
    pub fn line(&self) -> u32 {
        match self {
            Self::UnmatchedClose { line, .. } | Self::UnterminatedBlock { line, .. } => *line,
        }
    }
}

/// Codegen result type alias.
pub type CodegenResult<T> = Result<T, StructuralError>;
