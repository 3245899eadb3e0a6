//! Statement classifier. Maps one trimmed line to one [`Statement`].
//!
//! Walks [`KEYWORDS`] in order and stops at the first match. Lines that
//! match nothing are raw pass-through. Payloads are sliced out of the line
//! and never inspected, so classification is total.

use ata_types::{ClassifiedLine, NormalizedLine, Statement, StatementKind};

use crate::keyword::KEYWORDS;

/// Suffix dropped from `eğer` conditions.
const IF_SUFFIX: &str = " ise";

/// Classify a trimmed, non-comment line.
pub fn classify(line: &str) -> Statement {
    for keyword in KEYWORDS {
        if let Some(rest) = keyword.strip(line) {
            return build(keyword.kind, line, rest);
        }
    }
    Statement::Raw(line.to_string())
}

/// Classify a normalized line, keeping its origin.
///
/// Returns `None` for skipped lines.
pub fn classify_line(line: &NormalizedLine<'_>) -> Option<ClassifiedLine> {
    match *line {
        NormalizedLine::Line { number, trimmed, span } => Some(ClassifiedLine {
            number,
            span,
            statement: classify(trimmed),
        }),
        NormalizedLine::Skip { .. } => None,
    }
}

fn build(kind: StatementKind, line: &str, rest: &str) -> Statement {
    match kind {
        StatementKind::Print => Statement::Print(rest.to_string()),
        StatementKind::FuncDef => Statement::FuncDef(rest.to_string()),
        StatementKind::Return => Statement::Return(rest.to_string()),
        StatementKind::If => {
            Statement::If(rest.strip_suffix(IF_SUFFIX).unwrap_or(rest).to_string())
        }
        StatementKind::Else => Statement::Else,
        StatementKind::While => Statement::While(rest.to_string()),
        // Only the second token counts; anything after it is dropped.
        StatementKind::Repeat => Statement::Repeat(
            line.split_whitespace()
                .nth(1)
                .unwrap_or_default()
                .to_string(),
        ),
        StatementKind::BlockEnd => Statement::BlockEnd,
        StatementKind::Raw => Statement::Raw(line.to_string()),
    }
}
