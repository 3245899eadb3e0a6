//! Statement types for the ATA language.
//!
//! ATA has no expression grammar: every payload is an opaque string that is
//! carried through to the host language untouched. A [`Statement`] is built
//! from exactly one source line and never changes afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Span;

// ══════════════════════════════════════════════════════════════════════════════
// Statement
// ══════════════════════════════════════════════════════════════════════════════

/// A classified ATA statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `yaz <expr>`
    Print(String),
    /// `fonksiyon <name>(<params>):`
    FuncDef(String),
    /// `döndür <expr>`
    Return(String),
    /// `eğer <cond> ise`
    If(String),
    /// `değilse`
    Else,
    /// `iken <cond>`
    While(String),
    /// `tekrar <count>`
    Repeat(String),
    /// `bitti`
    BlockEnd,
    /// Any other line, passed through verbatim.
    Raw(String),
}

impl Statement {
    /// The payload-free kind of this statement.
    pub fn kind(&self) -> StatementKind {
        match self {
            Self::Print(_) => StatementKind::Print,
            Self::FuncDef(_) => StatementKind::FuncDef,
            Self::Return(_) => StatementKind::Return,
            Self::If(_) => StatementKind::If,
            Self::Else => StatementKind::Else,
            Self::While(_) => StatementKind::While,
            Self::Repeat(_) => StatementKind::Repeat,
            Self::BlockEnd => StatementKind::BlockEnd,
            Self::Raw(_) => StatementKind::Raw,
        }
    }

    /// The opaque payload, if this kind carries one.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Print(s)
            | Self::FuncDef(s)
            | Self::Return(s)
            | Self::If(s)
            | Self::While(s)
            | Self::Repeat(s)
            | Self::Raw(s) => Some(s),
            Self::Else | Self::BlockEnd => None,
        }
    }

    /// How this statement changes block depth.
    pub fn block_effect(&self) -> BlockEffect {
        self.kind().block_effect()
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// StatementKind
// ══════════════════════════════════════════════════════════════════════════════

/// Statement kinds without payloads, for logging and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    Print,
    FuncDef,
    Return,
    If,
    Else,
    While,
    Repeat,
    BlockEnd,
    Raw,
}

impl StatementKind {
    /// The ATA keyword that introduces this kind (`None` for raw lines).
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Print => Some("yaz"),
            Self::FuncDef => Some("fonksiyon"),
            Self::Return => Some("döndür"),
            Self::If => Some("eğer"),
            Self::Else => Some("değilse"),
            Self::While => Some("iken"),
            Self::Repeat => Some("tekrar"),
            Self::BlockEnd => Some("bitti"),
            Self::Raw => None,
        }
    }

    pub fn block_effect(self) -> BlockEffect {
        match self {
            Self::FuncDef | Self::If | Self::While | Self::Repeat => BlockEffect::Open,
            Self::Else => BlockEffect::Reopen,
            Self::BlockEnd => BlockEffect::Close,
            Self::Print | Self::Return | Self::Raw => BlockEffect::None,
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.keyword() {
            Some(kw) => write!(f, "{kw}"),
            None => write!(f, "raw"),
        }
    }
}

/// Effect of a statement on the indentation depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEffect {
    /// Depth unchanged.
    None,
    /// Depth +1 after the line is emitted.
    Open,
    /// Depth −1 before the line is emitted.
    Close,
    /// Depth −1 before and +1 after the line is emitted.
    Reopen,
}

impl BlockEffect {
    /// Whether depth drops before the line is emitted.
    pub fn closes(self) -> bool {
        matches!(self, Self::Close | Self::Reopen)
    }

    /// Whether depth rises after the line is emitted.
    pub fn opens(self) -> bool {
        matches!(self, Self::Open | Self::Reopen)
    }
}

/// A statement together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// 1-based source line number.
    pub number: u32,
    /// Columns of the trimmed text within the physical line.
    pub span: Span,
    pub statement: Statement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openers_and_closers() {
        assert_eq!(Statement::If("x".into()).block_effect(), BlockEffect::Open);
        assert_eq!(Statement::Else.block_effect(), BlockEffect::Reopen);
        assert_eq!(Statement::BlockEnd.block_effect(), BlockEffect::Close);
        assert_eq!(Statement::Raw("x = 1".into()).block_effect(), BlockEffect::None);

        assert!(BlockEffect::Reopen.closes() && BlockEffect::Reopen.opens());
        assert!(!BlockEffect::Close.opens());
        assert!(!BlockEffect::Open.closes());
    }

    #[test]
    fn payload_only_on_carrying_kinds() {
        assert_eq!(Statement::Print("1".into()).payload(), Some("1"));
        assert_eq!(Statement::Else.payload(), None);
        assert_eq!(Statement::BlockEnd.payload(), None);
    }

    #[test]
    fn kind_display_uses_keyword() {
        assert_eq!(StatementKind::Else.to_string(), "değilse");
        assert_eq!(StatementKind::Raw.to_string(), "raw");
    }
}
