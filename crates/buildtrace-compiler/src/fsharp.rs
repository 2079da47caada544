use std::path::{Path, PathBuf};

use buildtrace_types::CompilerDialect;

use crate::args::{classify, resolve_all};
use crate::invocation::CompilerInvocation;
use crate::tokenize::fsc_invocation;

/// Fsc reports through the message channel, one argument per line behind
/// the executable path, with no backslash escape handling.
pub(crate) fn parse(base_dir: Option<&Path>, text: &str) -> CompilerInvocation {
    let (executable, arguments) = fsc_invocation(text);
    let Some(compiler) = executable else {
        return CompilerInvocation::empty(CompilerDialect::FSharp, base_dir, text);
    };

    let classified = classify(&arguments);
    CompilerInvocation {
        dialect: CompilerDialect::FSharp,
        base_dir: base_dir.map(PathBuf::from),
        compiler_path: Some(PathBuf::from(compiler.replace('\\', "/"))),
        arguments,
        source_files: resolve_all(base_dir, &classified.sources),
        additional_files: resolve_all(base_dir, &classified.additional),
        embedded_files: resolve_all(base_dir, &classified.embedded),
        text: text.to_string(),
    }
}
