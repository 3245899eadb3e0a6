//! ATA compiler: orchestrates the full compilation pipeline.
//!
//! ```text
//! ATA Source → Normalizer → Classifier → Indentation → Emitter → Python
//! ```
//!
//! The pipeline is a single pass. Each call owns its own
//! [`IndentState`], so compilations never share depth.

pub mod reference;

use ata_classifier::{classify_line, normalize};
use ata_codegen::{emit, CompiledProgram, IndentState, StructuralError};
use ata_types::{AtaError, ErrorCode, SourceFile, Span, StatementKind};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub use ata_codegen::{EmittedLine, SourceMap};

/// ATA language version accepted by this compiler.
pub const ATA_LANGUAGE_VERSION: &str = "1.1";

/// File name used in diagnostics when the caller has none.
pub const DEFAULT_FILE_NAME: &str = "main.ata";

// ══════════════════════════════════════════════════════════════════════════════
// Pipeline
// ══════════════════════════════════════════════════════════════════════════════

/// Compile ATA source text to a Python program.
pub fn compile(source: &str) -> Result<CompiledProgram, AtaError> {
    compile_file(&SourceFile::new(DEFAULT_FILE_NAME, source))
}

/// Compile a named source file to a Python program.
pub fn compile_file(file: &SourceFile) -> Result<CompiledProgram, AtaError> {
    let _span = tracing::debug_span!("compile", file = %file.name).entered();

    let mut state = IndentState::new();
    let mut lines = Vec::new();

    for line in file.lines() {
        let Some(classified) = classify_line(&normalize(&line)) else {
            continue;
        };
        let kind = classified.statement.kind();

        state
            .before_emit(kind, classified.number)
            .map_err(|e| structural_error(file, e))?;
        let emitted = emit(&classified.statement, state.depth(), classified.number);
        tracing::trace!(
            line = classified.number,
            %kind,
            depth = emitted.depth,
            rendered = %emitted.rendered,
            "emit"
        );
        lines.push(emitted);
        state.after_emit(kind, classified.number);
    }

    state.finalize().map_err(|e| structural_error(file, e))?;

    tracing::debug!(lines = lines.len(), "compiled");
    Ok(CompiledProgram::new(lines, source_hash(&file.source)))
}

/// Run the pipeline for diagnostics only.
pub fn check(source: &str, filename: &str) -> Option<AtaError> {
    compile_file(&SourceFile::new(filename, source)).err()
}

/// Hex SHA-256 of the source text.
pub fn source_hash(source: &str) -> String {
    format!("{:x}", Sha256::digest(source.as_bytes()))
}

fn structural_error(file: &SourceFile, err: StructuralError) -> AtaError {
    let line = err.line();
    let raw = file.line(line).unwrap_or_default();
    let span = Span::of_trimmed(line, raw);
    let (code, suggestion) = match &err {
        StructuralError::UnmatchedClose { keyword: StatementKind::Else, .. } => (
            ErrorCode::UNMATCHED_CLOSE,
            "'değilse' must follow the body of an 'eğer' block".to_string(),
        ),
        StructuralError::UnmatchedClose { keyword, .. } => (
            ErrorCode::UNMATCHED_CLOSE,
            format!("remove this '{keyword}' or open a block before it"),
        ),
        StructuralError::UnterminatedBlock { line, .. } => (
            ErrorCode::UNTERMINATED_BLOCK,
            format!("add 'bitti' to close the block opened on line {line}"),
        ),
    };
    tracing::debug!(code = %code, line, "compile failed");
    AtaError::new(&file.name, code, err.to_string(), span, raw.trim_end()).with_suggestion(suggestion)
}

// ══════════════════════════════════════════════════════════════════════════════
// Structured result
// ══════════════════════════════════════════════════════════════════════════════

/// The serializable outcome of one compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileResult {
    pub success: bool,
    /// Generated Python, present on success.
    pub python: Option<String>,
    /// Hex SHA-256 of the ATA source.
    pub source_hash: String,
    /// Host line → ATA line, present on success.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source_map: Option<SourceMap>,
    /// The compile error, present on failure.
    pub error: Option<AtaError>,
}

/// Compile and package the outcome for JSON consumers.
pub fn compile_to_result(source: &str, filename: &str) -> CompileResult {
    match compile_file(&SourceFile::new(filename, source)) {
        Ok(program) => CompileResult {
            success: true,
            python: Some(program.to_host_source()),
            source_hash: program.source_hash().to_string(),
            source_map: Some(program.source_map().clone()),
            error: None,
        },
        Err(error) => CompileResult {
            success: false,
            python: None,
            source_hash: source_hash(source),
            source_map: None,
            error: Some(error),
        },
    }
}
