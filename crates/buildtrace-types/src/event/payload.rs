use serde::{Deserialize, Serialize};

use crate::bags::{ItemBag, PropertyBag};

/// Event payload variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
#[serde(rename_all = "snake_case")]
pub enum EventPayload {
    /// 1. A project build instance began.
    ///
    /// Note: under newer log protocol versions the property/item bags here
    /// are a compatibility placeholder; ProjectEvaluationFinished carries
    /// the authoritative bags.
    ProjectStarted(ProjectStartedPayload),

    /// 2. Project evaluation completed (authoritative property/item bags).
    ProjectEvaluationFinished(ProjectEvaluationFinishedPayload),

    /// 3. A named target began executing.
    TargetStarted(TargetStartedPayload),

    /// 4. A task logged the exact command line it invoked.
    ///
    /// The C# and Visual Basic compilers announce their invocation this way.
    TaskCommandLine(TaskCommandLinePayload),

    /// 5. A free-form message from a build component.
    ///
    /// The F# compiler reports its invocation on this channel instead of
    /// a task command line.
    CompilerMessage(CompilerMessagePayload),

    /// 6. A build error was raised.
    BuildError(BuildErrorPayload),

    /// 7. The project build instance finished.
    ProjectFinished(ProjectFinishedPayload),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStartedPayload {
    /// Project file path; may be partially resolved or absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_file: Option<String>,

    /// Property bag; placeholder under newer log protocol versions
    #[serde(default, skip_serializing_if = "PropertyBag::is_empty")]
    pub properties: PropertyBag,

    /// Item bag; placeholder under newer log protocol versions
    #[serde(default, skip_serializing_if = "ItemBag::is_empty")]
    pub items: ItemBag,

    /// The requested target names (e.g. ["Restore"], ["Clean", "Build"])
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEvaluationFinishedPayload {
    #[serde(default, skip_serializing_if = "PropertyBag::is_empty")]
    pub properties: PropertyBag,

    #[serde(default, skip_serializing_if = "ItemBag::is_empty")]
    pub items: ItemBag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetStartedPayload {
    pub target_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskCommandLinePayload {
    /// Name of the task that ran the command (e.g. "Csc", "Vbc")
    pub task_name: String,

    /// The raw command line, exactly as the task logged it
    pub command_line: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilerMessagePayload {
    /// Component that sent the message (e.g. "Fsc")
    pub sender: String,

    /// Message text
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildErrorPayload {
    /// Error message text
    pub message: String,

    /// Diagnostic code (e.g. "CS0103"), when the tool supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Source file the error points at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFinishedPayload {
    /// Success as reported by the build tool for this project instance
    pub succeeded: bool,
}
