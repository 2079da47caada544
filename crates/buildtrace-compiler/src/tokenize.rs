//! Command-line splitting, reproducing each compiler's own convention.
//!
//! The C# and Visual Basic compilers log a single-line command string and
//! split it with the MSVCRT rule, where a run of backslashes before a double
//! quote escapes: 2n backslashes + quote produce n backslashes and toggle
//! quoted mode; 2n+1 backslashes + quote produce n backslashes and a literal
//! quote. The F# compiler logs its invocation as a message with one argument
//! per line, preceded by the path of the fsc executable, and applies no
//! backslash handling at all. Reproducing each rule exactly matters:
//! misclassifying a flag argument as a file is silently wrong output.

/// Split a single-line command string the way csc/vbc would.
///
/// Quotes are stripped from the produced tokens. An unterminated quote runs
/// to the end of the line.
pub fn split_command_line(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let mut count = 1;
                while chars.peek() == Some(&'\\') {
                    chars.next();
                    count += 1;
                }
                if chars.peek() == Some(&'"') {
                    current.push_str(&"\\".repeat(count / 2));
                    if count % 2 == 1 {
                        chars.next();
                        current.push('"');
                    }
                    // Even run: the quote is a delimiter, handled next turn.
                } else {
                    current.push_str(&"\\".repeat(count));
                }
                in_token = true;
            }
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(current);
    }
    tokens
}

/// Split an F# compiler message into its argument lines.
///
/// Returns the arguments only; lines up to and including the fsc executable
/// are dropped. A message without an executable line (a version banner, for
/// example) yields nothing, which is what filters those messages out of the
/// invocation-handling path.
pub fn split_compiler_message(text: &str) -> Vec<String> {
    fsc_invocation(text).1
}

/// The executable line and argument lines of an F# compiler message.
pub(crate) fn fsc_invocation(text: &str) -> (Option<String>, Vec<String>) {
    let mut lines = text.lines().map(str::trim);

    let mut executable = None;
    for line in lines.by_ref() {
        if is_fsc_executable(line) {
            executable = Some(line.trim_matches('"').to_string());
            break;
        }
    }
    if executable.is_none() {
        return (None, Vec::new());
    }

    let arguments = lines
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    (executable, arguments)
}

fn is_fsc_executable(line: &str) -> bool {
    let lower = line.trim_matches('"').to_ascii_lowercase();
    lower.ends_with("fsc.exe") || lower.ends_with("fsc.dll")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_split_with_quoted_runs() {
        let tokens = split_command_line(r#"/target:exe "My File.cs" Other.cs"#);
        assert_eq!(tokens, vec!["/target:exe", "My File.cs", "Other.cs"]);
    }

    #[test]
    fn test_backslash_before_quote_escapes() {
        // 2n+1 backslashes + quote: n backslashes and a literal quote.
        let tokens = split_command_line(r#"a\"b c"#);
        assert_eq!(tokens, vec![r#"a"b"#, "c"]);

        // 2n backslashes + quote: n backslashes, quote toggles.
        let tokens = split_command_line(r#""C:\dir\\" next"#);
        assert_eq!(tokens, vec![r"C:\dir\", "next"]);
    }

    #[test]
    fn test_backslashes_without_quote_are_literal() {
        let tokens = split_command_line(r"C:\obj\Debug\App.dll");
        assert_eq!(tokens, vec![r"C:\obj\Debug\App.dll"]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end_of_line() {
        let tokens = split_command_line(r#"one "two three"#);
        assert_eq!(tokens, vec!["one", "two three"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_command_line("").is_empty());
        assert!(split_command_line("   \t ").is_empty());
    }

    #[test]
    fn test_fsc_message_splits_per_line() {
        let message = "\t/usr/share/dotnet/fsc.exe\n-o:obj/App.dll\n--target:exe\nProgram.fs\n";
        let (executable, arguments) = fsc_invocation(message);
        assert_eq!(executable.as_deref(), Some("/usr/share/dotnet/fsc.exe"));
        assert_eq!(arguments, vec!["-o:obj/App.dll", "--target:exe", "Program.fs"]);
    }

    #[test]
    fn test_fsc_banner_yields_nothing() {
        let banner = "Microsoft (R) F# Compiler version 13.9.300.0 for F# 9.0";
        assert!(split_compiler_message(banner).is_empty());
    }

    #[test]
    fn test_fsc_dll_via_dotnet_is_recognized() {
        let message = "\"C:\\Program Files\\dotnet\\sdk\\9.0.100\\FSharp\\fsc.dll\"\nLibrary.fs";
        let (executable, arguments) = fsc_invocation(message);
        assert!(executable.is_some());
        assert_eq!(arguments, vec!["Library.fs"]);
    }
}
