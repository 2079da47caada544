use std::path::{Path, PathBuf};

use buildtrace_types::CompilerDialect;

use crate::args::{classify, resolve_all, strip_executable};
use crate::invocation::CompilerInvocation;
use crate::tokenize::split_command_line;

const EXECUTABLES: &[&str] = &["vbc.exe", "vbc.dll"];

/// Vbc logs a single-line command and splits it the same way csc does.
pub(crate) fn parse(base_dir: Option<&Path>, text: &str) -> CompilerInvocation {
    let tokens = split_command_line(text);
    let (compiler, arguments) = strip_executable(&tokens, EXECUTABLES);

    let classified = classify(arguments);
    CompilerInvocation {
        dialect: CompilerDialect::VisualBasic,
        base_dir: base_dir.map(PathBuf::from),
        compiler_path: compiler.map(|c| PathBuf::from(c.replace('\\', "/"))),
        arguments: arguments.to_vec(),
        source_files: resolve_all(base_dir, &classified.sources),
        additional_files: resolve_all(base_dir, &classified.additional),
        embedded_files: resolve_all(base_dir, &classified.embedded),
        text: text.to_string(),
    }
}
