// Compiler command decoder - turns the raw command-line text a compiler
// logged into a structured description of its inputs.
//
// Decoding is total: banner text, restore-phase noise, and malformed input
// all yield an invocation with empty file lists instead of an error. The
// event stream contains plenty of text that superficially resembles a
// command line; misparsing it must never abort aggregation.

mod args;
mod csharp;
mod fsharp;
mod invocation;
mod tokenize;
mod visual_basic;

pub use invocation::CompilerInvocation;
pub use tokenize::{split_command_line, split_compiler_message};

use std::path::Path;

use buildtrace_types::CompilerDialect;

/// Decode a raw compiler command line into a structured invocation.
///
/// `base_dir` anchors relative file paths, typically the directory of the
/// project file being compiled. Equal inputs decode to equal values.
pub fn parse(dialect: CompilerDialect, base_dir: Option<&Path>, text: &str) -> CompilerInvocation {
    match dialect {
        CompilerDialect::CSharp => csharp::parse(base_dir, text),
        CompilerDialect::FSharp => fsharp::parse(base_dir, text),
        CompilerDialect::VisualBasic => visual_basic::parse(base_dir, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_empty_text_decodes_to_empty_invocation() {
        for dialect in [
            CompilerDialect::CSharp,
            CompilerDialect::FSharp,
            CompilerDialect::VisualBasic,
        ] {
            let invocation = parse(dialect, None, "");
            assert!(invocation.source_files.is_empty(), "{dialect}");
            assert!(invocation.additional_files.is_empty(), "{dialect}");

            let invocation = parse(dialect, None, "   \t  ");
            assert!(invocation.source_files.is_empty(), "{dialect}");
        }
    }

    #[test]
    fn test_decoding_is_deterministic() {
        let text = r#"csc.exe /target:exe "Program.cs" Util.cs Util.cs"#;
        let base = Path::new("/work/App");

        let first = parse(CompilerDialect::CSharp, Some(base), text);
        let second = parse(CompilerDialect::CSharp, Some(base), text);

        assert_eq!(first, second);
        // Duplicates are preserved: report what the compiler actually received.
        assert_eq!(
            first.source_files,
            vec![
                PathBuf::from("/work/App/Program.cs"),
                PathBuf::from("/work/App/Util.cs"),
                PathBuf::from("/work/App/Util.cs"),
            ]
        );
    }
}
