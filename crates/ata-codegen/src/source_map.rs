//! Source mapping: host line → ATA source line.
//!
//! Every statement emits exactly one host line, so the map is a straight
//! list. The executor uses it to point runtime tracebacks back at the ATA
//! line the user wrote.

use serde::{Deserialize, Serialize};

use crate::program::EmittedLine;

/// A complete source map for a compiled ATA program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMap {
    pub entries: Vec<SourceMapEntry>,
}

/// A single source map entry: one host line → one ATA line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMapEntry {
    /// 1-based line in the generated Python.
    pub host_line: u32,
    /// 1-based line in the ATA source.
    pub ata_line: u32,
}

impl SourceMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build the map for a sequence of emitted lines.
    pub fn from_lines(lines: &[EmittedLine]) -> Self {
        let mut map = Self::new();
        for (i, line) in lines.iter().enumerate() {
            map.push(i as u32 + 1, line.source_line);
        }
        map
    }

    /// Push a new entry.
    pub fn push(&mut self, host_line: u32, ata_line: u32) {
        self.entries.push(SourceMapEntry {
            host_line,
            ata_line,
        });
    }

    /// Resolve a host line back to its ATA line.
    pub fn ata_line(&self, host_line: u32) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.host_line == host_line)
            .map(|e| e.ata_line)
    }
}
