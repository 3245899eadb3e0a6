//! Shared types for the ATA transpiler.
//!
//! This crate defines source lines and spans, the [`Statement`] variant
//! produced by classification, and the structured error type used across
//! all compiler stages.

mod error;
mod line;
mod span;
mod statement;

pub use error::{AtaError, ErrorCategory, ErrorCode};
pub use line::{NormalizedLine, SkipReason, SourceLine};
pub use span::{SourceFile, Span};
pub use statement::{BlockEffect, ClassifiedLine, Statement, StatementKind};

/// Result type used throughout the ATA compiler.
pub type Result<T> = std::result::Result<T, AtaError>;
