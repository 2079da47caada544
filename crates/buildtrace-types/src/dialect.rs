use std::fmt;

use serde::{Deserialize, Serialize};

/// The compiler dialects whose invocations the decoder understands.
///
/// Closed enum: an unsupported dialect is unrepresentable, so the decoder
/// can stay total without a runtime guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompilerDialect {
    CSharp,
    FSharp,
    VisualBasic,
}

impl CompilerDialect {
    /// The MSBuild task name (C#, VB) or message sender (F#) that announces
    /// this dialect's compiler invocation.
    pub fn task_name(self) -> &'static str {
        match self {
            CompilerDialect::CSharp => "Csc",
            CompilerDialect::FSharp => "Fsc",
            CompilerDialect::VisualBasic => "Vbc",
        }
    }
}

impl fmt::Display for CompilerDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompilerDialect::CSharp => "C#",
            CompilerDialect::FSharp => "F#",
            CompilerDialect::VisualBasic => "Visual Basic",
        };
        write!(f, "{name}")
    }
}

/// Well-known MSBuild property names.
pub mod project_file_names {
    /// Probed first when deriving the target framework moniker.
    pub const TARGET_FRAMEWORK: &str = "TargetFramework";
    pub const TARGET_FRAMEWORK_IDENTIFIER: &str = "TargetFrameworkIdentifier";
    pub const TARGET_FRAMEWORK_VERSION: &str = "TargetFrameworkVersion";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CompilerDialect::CSharp.to_string(), "C#");
        assert_eq!(CompilerDialect::FSharp.to_string(), "F#");
        assert_eq!(CompilerDialect::VisualBasic.to_string(), "Visual Basic");
    }
}
