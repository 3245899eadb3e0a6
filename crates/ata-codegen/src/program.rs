//! The compiled artifact handed to a host executor.

use serde::{Deserialize, Serialize};

use crate::emitter::INDENT_UNIT;
use crate::source_map::SourceMap;

/// One emitted host line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmittedLine {
    /// Nesting depth; indentation is derived from this alone.
    pub depth: usize,
    /// Host text without indentation.
    pub rendered: String,
    /// The ATA line this came from (1-based).
    pub source_line: u32,
}

impl EmittedLine {
    /// The line with its indentation applied.
    pub fn to_host_line(&self) -> String {
        format!("{}{}", INDENT_UNIT.repeat(self.depth), self.rendered)
    }
}

/// An ordered, immutable sequence of emitted lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledProgram {
    lines: Vec<EmittedLine>,
    /// Hex SHA-256 of the ATA source this was compiled from.
    source_hash: String,
    source_map: SourceMap,
}

impl CompiledProgram {
    pub fn new(lines: Vec<EmittedLine>, source_hash: impl Into<String>) -> Self {
        let source_map = SourceMap::from_lines(&lines);
        Self {
            lines,
            source_hash: source_hash.into(),
            source_map,
        }
    }

    pub fn lines(&self) -> &[EmittedLine] {
        &self.lines
    }

    pub fn source_hash(&self) -> &str {
        &self.source_hash
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The full Python program, one line per statement.
    pub fn to_host_source(&self) -> String {
        self.lines
            .iter()
            .map(EmittedLine::to_host_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(depth: usize, rendered: &str, source_line: u32) -> EmittedLine {
        EmittedLine {
            depth,
            rendered: rendered.into(),
            source_line,
        }
    }

    #[test]
    fn host_source_joins_indented_lines() {
        let program = CompiledProgram::new(
            vec![line(0, "if x:", 1), line(1, "print(x)", 2), line(0, "# bitti", 3)],
            "abc",
        );
        assert_eq!(program.to_host_source(), "if x:\n    print(x)\n# bitti");
        assert_eq!(program.len(), 3);
        assert_eq!(program.source_hash(), "abc");
    }

    #[test]
    fn empty_program() {
        let program = CompiledProgram::new(Vec::new(), "");
        assert!(program.is_empty());
        assert_eq!(program.to_host_source(), "");
        assert!(program.source_map().entries.is_empty());
    }
}
