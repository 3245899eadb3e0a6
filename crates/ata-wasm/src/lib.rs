//! ATA compiler as a WASM module for browser editors.
//!
//! This crate exposes the ATA compilation pipeline via `wasm-bindgen`, so a
//! web editor can compile as the user types and hand the Python to an
//! in-browser interpreter.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { compile, gutter } from 'ata-wasm';
//!
//! await init();
//!
//! const result = JSON.parse(compile("tekrar 3\nyaz 1\nbitti", "deneme.ata"));
//! // { success: true, python: "for _ in range(3):\n    print(1)\n# bitti", ... }
//! ```

use ata_types::SourceFile;
use wasm_bindgen::prelude::*;

/// Compile ATA source to Python.
///
/// Returns a JSON string containing a `CompileResult`:
/// ```json
/// {
///   "success": true,
///   "python": "print(1)",
///   "source_hash": "…",
///   "source_map": { "entries": [{ "host_line": 1, "ata_line": 1 }] },
///   "error": null
/// }
/// ```
///
/// On failure, `success` is `false`, `python` is `null`, and `error` holds
/// the structured compile error.
#[wasm_bindgen]
pub fn compile(source: &str, filename: &str) -> String {
    let result = ata_compiler::compile_to_result(source, filename);
    serde_json::to_string(&result).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"python":null,"source_hash":"","error":{{"message":"Serialization error: {}"}}}}"#,
            e
        )
    })
}

/// Same as [`compile`], returned as a JS object instead of a JSON string.
#[wasm_bindgen(js_name = compileToObject)]
pub fn compile_to_object(source: &str, filename: &str) -> Result<JsValue, JsValue> {
    let result = ata_compiler::compile_to_result(source, filename);
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check ATA source without returning the Python.
///
/// Returns `null` when the source compiles, otherwise the error as JSON.
/// Cheaper to ship across the boundary on every keystroke.
#[wasm_bindgen]
pub fn check(source: &str, filename: &str) -> String {
    match ata_compiler::check(source, filename) {
        None => "null".to_string(),
        Some(error) => serde_json::to_string(&error).unwrap_or_else(|e| {
            format!(r#"{{"message":"Serialization error: {}"}}"#, e)
        }),
    }
}

/// Line numbers for the editor gutter, one per line of `source`.
#[wasm_bindgen]
pub fn gutter(source: &str) -> String {
    SourceFile::new("", source).gutter()
}

/// The buffer with blank lines, comments and surrounding whitespace removed.
#[wasm_bindgen]
pub fn normalize(source: &str) -> String {
    ata_classifier::normalize_source(source)
}

/// Return the compiler version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Return the ATA language reference.
#[wasm_bindgen]
pub fn get_reference() -> String {
    ata_compiler::reference::generate_reference()
}

/// Return the keyword table as JSON.
#[wasm_bindgen]
pub fn get_keyword_table() -> String {
    ata_compiler::reference::generate_keyword_table()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_returns_json_result() {
        let parsed: serde_json::Value =
            serde_json::from_str(&compile("tekrar 2\nyaz 1\nbitti", "t.ata")).unwrap();
        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["python"], "for _ in range(2):\n    print(1)\n# bitti");
    }

    #[test]
    fn compile_failure_is_structured() {
        let parsed: serde_json::Value = serde_json::from_str(&compile("bitti", "t.ata")).unwrap();
        assert_eq!(parsed["success"], false);
        assert!(parsed["python"].is_null());
        assert_eq!(parsed["error"]["code"], 100);
    }

    #[test]
    fn check_is_null_when_clean() {
        assert_eq!(check("yaz 1", "t.ata"), "null");
        let parsed: serde_json::Value = serde_json::from_str(&check("değilse", "t.ata")).unwrap();
        assert_eq!(parsed["line"], 1);
    }

    #[test]
    fn gutter_counts_lines() {
        assert_eq!(gutter("yaz 1\nyaz 2\n"), "1\n2");
    }

    #[test]
    fn normalize_trims() {
        assert_eq!(normalize("  yaz 1\n# yorum\n"), "yaz 1");
    }
}
