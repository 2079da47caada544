use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use buildtrace_compiler::CompilerInvocation;
use buildtrace_types::{BuildErrorPayload, BuildEvent, ItemBag, ProjectId, PropertyBag};

/// The evolving per-project snapshot folded from the event stream.
///
/// Records are immutable values: every handler consumes the current snapshot
/// and returns a replacement via a struct-update expression. Fields noted as
/// set-once are never downgraded back to empty/unknown; updates are
/// monotonic merges, which keeps any prefix of the stream a valid result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectAnalysis {
    /// Stable key for the record's lifetime
    pub project_id: ProjectId,

    /// Project file location; first non-empty wins
    pub project_file: Option<PathBuf>,

    /// The decoded compiler invocation; first one wins, recompiles within
    /// the same instance do not clobber it
    pub command: Option<CompilerInvocation>,

    /// First non-empty bag wins, except that evaluation data always
    /// supersedes a placeholder from project start
    pub properties: PropertyBag,
    pub items: ItemBag,

    /// Derived once from the well-known framework property keys
    pub target_framework: Option<String>,

    /// Latest started target; "Restore" may be inferred at project start
    pub target_name: Option<String>,

    /// Unknown until the finished event; false is permanent
    pub succeeded: Option<bool>,

    pub started: Option<DateTime<Utc>>,
    pub finished: Option<DateTime<Utc>>,

    /// File lists derived from the compiler invocation, fixed once set
    pub source_files: Vec<PathBuf>,
    pub additional_files: Vec<PathBuf>,
    pub embedded_files: Vec<PathBuf>,

    /// Append-only
    pub errors: Vec<BuildErrorPayload>,

    /// Raw events that contributed to this record, retained for audit
    pub events: Vec<BuildEvent>,
}

impl ProjectAnalysis {
    pub fn new(project_id: ProjectId) -> Self {
        Self {
            project_id,
            project_file: None,
            command: None,
            properties: PropertyBag::new(),
            items: ItemBag::new(),
            target_framework: None,
            target_name: None,
            succeeded: None,
            started: None,
            finished: None,
            source_files: Vec::new(),
            additional_files: Vec::new(),
            embedded_files: Vec::new(),
            errors: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Wall-clock duration of the build instance. Only meaningful once both
    /// timestamps are set; zero otherwise, callers detect the difference
    /// via the timestamps themselves.
    pub fn duration(&self) -> Duration {
        match (self.started, self.finished) {
            (Some(started), Some(finished)) => finished - started,
            _ => Duration::zero(),
        }
    }

    /// Overall success: the build reported success AND no error was
    /// recorded. The two signals are tracked independently; this is the
    /// only correct way to combine them.
    pub fn overall_success(&self) -> bool {
        self.succeeded == Some(true) && self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_duration_is_zero_until_both_timestamps_set() {
        let mut analysis = ProjectAnalysis::new(ProjectId(1));
        assert_eq!(analysis.duration(), Duration::zero());

        analysis.started = Some(Utc.with_ymd_and_hms(2025, 11, 2, 9, 0, 0).unwrap());
        assert_eq!(analysis.duration(), Duration::zero());

        analysis.finished = Some(Utc.with_ymd_and_hms(2025, 11, 2, 9, 0, 42).unwrap());
        assert_eq!(analysis.duration(), Duration::seconds(42));
    }

    #[test]
    fn test_overall_success_requires_both_signals() {
        let mut analysis = ProjectAnalysis::new(ProjectId(1));
        assert!(!analysis.overall_success());

        analysis.succeeded = Some(true);
        assert!(analysis.overall_success());

        analysis.errors.push(BuildErrorPayload {
            message: "boom".to_string(),
            code: None,
            file: None,
            line: None,
            column: None,
        });
        assert!(!analysis.overall_success());
    }
}
