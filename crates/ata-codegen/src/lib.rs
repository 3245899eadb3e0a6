//! ATA code generator: turns classified statements into indented Python.
//!
//! # Architecture
//!
//! Two pieces cooperate per statement:
//!
//! - [`IndentState`] owns the depth for one compilation and enforces that
//!   closers never run below zero and that every block is closed.
//! - [`emit`] renders the statement at the current depth.
//!
//! The result is a [`CompiledProgram`]: one [`EmittedLine`] per statement
//! plus a [`SourceMap`] back to ATA line numbers.

pub mod emitter;
pub mod error;
pub mod indent;
pub mod program;
pub mod source_map;

pub use emitter::{emit, render, BLOCK_END_MARKER, INDENT_UNIT};
pub use error::{CodegenResult, StructuralError};
pub use indent::IndentState;
pub use program::{CompiledProgram, EmittedLine};
pub use source_map::{SourceMap, SourceMapEntry};
