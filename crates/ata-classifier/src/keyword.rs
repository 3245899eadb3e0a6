//! The ATA keyword table.
//!
//! Defines [`KEYWORDS`], the ordered dispatch table the classifier walks.
//! Order matters: the first matching entry wins, and anything that matches
//! no entry is a raw pass-through line.

use ata_types::StatementKind;

/// How a keyword is recognised on a trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordForm {
    /// The line starts with the word followed by a single space.
    Prefix,
    /// The whole line is exactly the word.
    Exact,
}

/// One entry in the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    /// The ATA word, e.g. `"yaz"`.
    pub word: &'static str,
    pub form: KeywordForm,
    /// The statement kind this word produces.
    pub kind: StatementKind,
    /// Usage shown in the language reference.
    pub usage: &'static str,
    /// Host rendering shown in the language reference.
    pub host: &'static str,
}

impl Keyword {
    /// If `line` matches this keyword, return the text after the keyword.
    ///
    /// Exact keywords return an empty remainder.
    pub fn strip<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.form {
            KeywordForm::Exact => (line == self.word).then_some(""),
            KeywordForm::Prefix => line.strip_prefix(self.word)?.strip_prefix(' '),
        }
    }
}

/// All ATA keywords in classification order.
pub const KEYWORDS: &[Keyword] = &[
    Keyword {
        word: "yaz",
        form: KeywordForm::Prefix,
        kind: StatementKind::Print,
        usage: "yaz <ifade>",
        host: "print(<ifade>)",
    },
    Keyword {
        word: "fonksiyon",
        form: KeywordForm::Prefix,
        kind: StatementKind::FuncDef,
        usage: "fonksiyon <ad>(<parametreler>):",
        host: "def <ad>(<parametreler>):",
    },
    Keyword {
        word: "döndür",
        form: KeywordForm::Prefix,
        kind: StatementKind::Return,
        usage: "döndür <ifade>",
        host: "return <ifade>",
    },
    Keyword {
        word: "eğer",
        form: KeywordForm::Prefix,
        kind: StatementKind::If,
        usage: "eğer <koşul> ise",
        host: "if <koşul>:",
    },
    Keyword {
        word: "değilse",
        form: KeywordForm::Exact,
        kind: StatementKind::Else,
        usage: "değilse",
        host: "else:",
    },
    Keyword {
        word: "iken",
        form: KeywordForm::Prefix,
        kind: StatementKind::While,
        usage: "iken <koşul>",
        host: "while <koşul>:",
    },
    Keyword {
        word: "tekrar",
        form: KeywordForm::Prefix,
        kind: StatementKind::Repeat,
        usage: "tekrar <sayı>",
        host: "for _ in range(<sayı>):",
    },
    Keyword {
        word: "bitti",
        form: KeywordForm::Exact,
        kind: StatementKind::BlockEnd,
        usage: "bitti",
        host: "(closes the nearest open block)",
    },
];

/// Look up the table entry for a statement kind.
pub fn keyword_for(kind: StatementKind) -> Option<&'static Keyword> {
    KEYWORDS.iter().find(|k| k.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_words_match_kind_keywords() {
        for kw in KEYWORDS {
            assert_eq!(kw.kind.keyword(), Some(kw.word), "mismatch for {}", kw.word);
        }
    }

    #[test]
    fn prefix_requires_trailing_space() {
        let yaz = keyword_for(StatementKind::Print).unwrap();
        assert_eq!(yaz.strip("yaz 5"), Some("5"));
        assert_eq!(yaz.strip("yaz"), None);
        assert_eq!(yaz.strip("yazdır 5"), None);
    }

    #[test]
    fn exact_requires_whole_line() {
        let bitti = keyword_for(StatementKind::BlockEnd).unwrap();
        assert_eq!(bitti.strip("bitti"), Some(""));
        assert_eq!(bitti.strip("bitti x"), None);
    }

    #[test]
    fn every_keyword_kind_is_unique() {
        for (i, a) in KEYWORDS.iter().enumerate() {
            for b in &KEYWORDS[i + 1..] {
                assert_ne!(a.kind, b.kind);
            }
        }
    }
}
