use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use buildtrace_types::CompilerDialect;

/// The decoded file inputs of one compiler invocation.
///
/// Pure data with value semantics; no identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerInvocation {
    pub dialect: CompilerDialect,

    /// Directory relative file paths were resolved against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,

    /// The compiler executable token, when one was recognized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler_path: Option<PathBuf>,

    /// Arguments following the executable, verbatim
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<String>,

    /// Compiled source files, in input order, duplicates preserved
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_files: Vec<PathBuf>,

    /// Non-compiled files passed for analysis
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_files: Vec<PathBuf>,

    /// Files embedded into the output (e.g. for source link)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embedded_files: Vec<PathBuf>,

    /// The raw command-line text, retained for audit
    pub text: String,
}

impl CompilerInvocation {
    /// An invocation with no recognized inputs. Used for text that turned
    /// out not to be a compiler command line.
    pub(crate) fn empty(
        dialect: CompilerDialect,
        base_dir: Option<&std::path::Path>,
        text: &str,
    ) -> Self {
        Self {
            dialect,
            base_dir: base_dir.map(PathBuf::from),
            compiler_path: None,
            arguments: Vec::new(),
            source_files: Vec::new(),
            additional_files: Vec::new(),
            embedded_files: Vec::new(),
            text: text.to_string(),
        }
    }
}
