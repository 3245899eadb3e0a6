//! Indentation manager.
//!
//! Tracks how many blocks are open while the pipeline walks the source.
//! Closers (`değilse`, `bitti`) lower the depth *before* their line is
//! emitted so they sit at the parent's indentation; openers raise it
//! *after*, so the body lands one level deeper than the opening line.
//! `değilse` does both.
//!
//! Depth is the length of the open-block stack. The stack only exists so
//! an unterminated block can be reported at the line that opened it.

use ata_types::StatementKind;

use crate::error::{CodegenResult, StructuralError};

/// A block that has been opened and not yet closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenBlock {
    kind: StatementKind,
    line: u32,
}

/// Depth state for one compilation. Starts at zero.
#[derive(Debug, Default)]
pub struct IndentState {
    open: Vec<OpenBlock>,
}

impl IndentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Apply the closing half of `kind`, if any.
    ///
    /// Fails without changing depth when nothing is open.
    pub fn before_emit(&mut self, kind: StatementKind, line: u32) -> CodegenResult<()> {
        if !kind.block_effect().closes() {
            return Ok(());
        }
        match self.open.pop() {
            Some(_) => Ok(()),
            None => Err(StructuralError::UnmatchedClose { keyword: kind, line }),
        }
    }

    /// Apply the opening half of `kind`, if any.
    pub fn after_emit(&mut self, kind: StatementKind, line: u32) {
        if kind.block_effect().opens() {
            self.open.push(OpenBlock { kind, line });
        }
    }

    /// Check that every block was closed.
    pub fn finalize(self) -> CodegenResult<()> {
        match self.open.last() {
            None => Ok(()),
            Some(innermost) => Err(StructuralError::UnterminatedBlock {
                open: self.open.len(),
                keyword: innermost.kind,
                line: innermost.line,
            }),
        }
    }
}
