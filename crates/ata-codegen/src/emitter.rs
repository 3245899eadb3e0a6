//! Statement emission.
//!
//! Maps each [`Statement`] to one line of Python. Rendering never embeds
//! indentation; [`EmittedLine::to_host_line`] applies [`INDENT_UNIT`] per
//! depth level when the program is assembled.

use ata_types::Statement;

use crate::program::EmittedLine;

/// One level of host-language indentation.
pub const INDENT_UNIT: &str = "    ";

/// Host comment left where a `bitti` closed a block.
pub const BLOCK_END_MARKER: &str = "# bitti";

/// Emit one statement at `depth`.
pub fn emit(statement: &Statement, depth: usize, source_line: u32) -> EmittedLine {
    EmittedLine {
        depth,
        rendered: render(statement),
        source_line,
    }
}

/// Render a statement as Python, without indentation.
pub fn render(statement: &Statement) -> String {
    match statement {
        Statement::Print(expr) => format!("print({expr})"),
        Statement::FuncDef(header) => render_def(header),
        Statement::Return(expr) => format!("return {expr}"),
        Statement::If(cond) => format!("if {cond}:"),
        Statement::Else => "else:".to_string(),
        Statement::While(cond) => format!("while {cond}:"),
        Statement::Repeat(count) => format!("for _ in range({count}):"),
        Statement::BlockEnd => BLOCK_END_MARKER.to_string(),
        Statement::Raw(text) => text.clone(),
    }
}

/// `fonksiyon kare(x):` already carries its colon; don't double it.
fn render_def(header: &str) -> String {
    if header.trim_end().ends_with(':') {
        format!("def {header}")
    } else {
        format!("def {header}:")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_kind() {
        let cases = [
            (Statement::Print("x".into()), "print(x)"),
            (Statement::FuncDef("kare(x):".into()), "def kare(x):"),
            (Statement::FuncDef("selam()".into()), "def selam():"),
            (Statement::Return("x * x".into()), "return x * x"),
            (Statement::If("x > 0".into()), "if x > 0:"),
            (Statement::Else, "else:"),
            (Statement::While("i < 3".into()), "while i < 3:"),
            (Statement::Repeat("3".into()), "for _ in range(3):"),
            (Statement::BlockEnd, "# bitti"),
            (Statement::Raw("x = 1".into()), "x = 1"),
        ];
        for (stmt, expected) in cases {
            assert_eq!(render(&stmt), expected, "statement {stmt:?}");
        }
    }

    #[test]
    fn emit_keeps_depth_out_of_rendered_text() {
        let line = emit(&Statement::Print("1".into()), 2, 5);
        assert_eq!(line.depth, 2);
        assert_eq!(line.rendered, "print(1)");
        assert_eq!(line.source_line, 5);
        assert_eq!(line.to_host_line(), "        print(1)");
    }
}
