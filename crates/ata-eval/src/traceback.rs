//! Reading Python tracebacks.
//!
//! The program is fed to the interpreter on stdin, so every frame that
//! belongs to it is reported as `File "<stdin>", line N`.

const STDIN_FRAME: &str = "File \"<stdin>\", line ";

/// What a traceback says about the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traceback {
    /// The innermost `<stdin>` line, if the traceback has one.
    pub host_line: Option<u32>,
    /// The exception line, e.g. `ZeroDivisionError: division by zero`.
    pub message: String,
}

/// Extract the failing host line and exception message from stderr.
pub fn parse(stderr: &str) -> Traceback {
    let host_line = stderr
        .lines()
        .filter_map(|l| l.trim_start().strip_prefix(STDIN_FRAME))
        .filter_map(|rest| {
            let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().ok()
        })
        .last();

    let message = stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("program exited with an error")
        .to_string();

    Traceback { host_line, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn innermost_frame_wins() {
        let stderr = "\
Traceback (most recent call last):
  File \"<stdin>\", line 4, in <module>
  File \"<stdin>\", line 2, in kare
NameError: name 'y' is not defined
";
        assert_eq!(
            parse(stderr),
            Traceback {
                host_line: Some(2),
                message: "NameError: name 'y' is not defined".into()
            }
        );
    }

    #[test]
    fn syntax_error_has_frame_without_function() {
        let stderr = "\
  File \"<stdin>\", line 3
    print(
         ^
SyntaxError: '(' was never closed
";
        let tb = parse(stderr);
        assert_eq!(tb.host_line, Some(3));
        assert_eq!(tb.message, "SyntaxError: '(' was never closed");
    }

    #[test]
    fn no_frame() {
        let tb = parse("Killed\n\n");
        assert_eq!(tb.host_line, None);
        assert_eq!(tb.message, "Killed");
    }

    #[test]
    fn empty_stderr() {
        assert_eq!(parse("").message, "program exited with an error");
    }
}
