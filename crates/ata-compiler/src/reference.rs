//! Machine-generated ATA reference and keyword table.
//!
//! Produces two artifacts from the classifier's [`KEYWORDS`] table:
//! 1. **Language reference**: plain text for editors and learners
//! 2. **Keyword table** (JSON) for tooling
//!
//! Both follow the table, so adding a keyword updates them.

use ata_classifier::{KeywordForm, KEYWORDS};
use ata_types::StatementKind;
use serde_json::json;

// ══════════════════════════════════════════════════════════════════════════════
// Language Reference
// ══════════════════════════════════════════════════════════════════════════════

/// Generate the ATA language reference.
pub fn generate_reference() -> String {
    let width = KEYWORDS.iter().map(|k| k.usage.chars().count()).max().unwrap_or(0);
    let mut out = String::with_capacity(2048);

    out.push_str(REFERENCE_PREAMBLE);
    out.push_str("KEYWORDS (one statement per line, first match wins):\n");
    for kw in KEYWORDS {
        let pad = width - kw.usage.chars().count();
        out.push_str(&format!(
            "  {}{}  ->  {}{}\n",
            kw.usage,
            " ".repeat(pad),
            kw.host,
            block_note(kw.kind)
        ));
    }
    out.push('\n');
    out.push_str(REFERENCE_POSTAMBLE);
    out
}

fn block_note(kind: StatementKind) -> &'static str {
    let effect = kind.block_effect();
    match (effect.closes(), effect.opens()) {
        (true, true) => "   [closes + opens]",
        (false, true) => "   [opens a block]",
        (true, false) => "   [closes a block]",
        (false, false) => "",
    }
}

const REFERENCE_PREAMBLE: &str = r#"ATA: a Turkish teaching language that compiles line by line to Python.
Files use the .ata extension. Comments start with # at the beginning of a line.

"#;

const REFERENCE_POSTAMBLE: &str = r#"RULES:
  - Every block (fonksiyon, eğer, değilse, iken, tekrar) ends with 'bitti'
  - 'değilse' closes the 'eğer' body and opens the else body; one 'bitti' ends both
  - Leading whitespace in the source is ignored; nesting comes from the keywords
  - Expressions are Python and are copied as written
  - Any line that is not a keyword statement is copied as Python at the current depth
  - 'tekrar' uses only the word after it as the count
"#;

// ══════════════════════════════════════════════════════════════════════════════
// Keyword Table Generation (JSON)
// ══════════════════════════════════════════════════════════════════════════════

/// Generate a structured JSON keyword table.
///
/// Output format:
/// ```json
/// {
///   "version": "1.1",
///   "keywords": [
///     { "word": "yaz", "form": "prefix", "kind": "print", "usage": "...", "host": "...",
///       "opens": false, "closes": false }
///   ]
/// }
/// ```
pub fn generate_keyword_table() -> String {
    let keywords: Vec<_> = KEYWORDS
        .iter()
        .map(|kw| {
            let effect = kw.kind.block_effect();
            json!({
                "word": kw.word,
                "form": match kw.form {
                    KeywordForm::Prefix => "prefix",
                    KeywordForm::Exact => "exact",
                },
                "kind": kw.kind,
                "usage": kw.usage,
                "host": kw.host,
                "opens": effect.opens(),
                "closes": effect.closes(),
            })
        })
        .collect();

    let table = json!({
        "version": crate::ATA_LANGUAGE_VERSION,
        "keywords": keywords,
    });
    serde_json::to_string_pretty(&table).unwrap_or_default()
}
