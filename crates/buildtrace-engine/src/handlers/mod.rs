//! The ordered event handler chain.
//!
//! Each handler claims exactly one event shape (a payload variant, possibly
//! narrowed by a content predicate) and folds it into the record for the
//! event's project instance. The chain is scanned front to back; the first
//! handler to claim an event wins and later handlers are never consulted
//! for it.

mod build_error;
mod csharp_command;
mod fsharp_command;
mod project_evaluation_finished;
mod project_finished;
mod project_started;
mod target_started;
mod visual_basic_command;

use once_cell::sync::Lazy;

use buildtrace_compiler::CompilerInvocation;
use buildtrace_types::BuildEvent;

use crate::context::AggregationContext;
use crate::model::ProjectAnalysis;

pub(crate) trait BuildEventHandler: Send + Sync {
    /// Claim and apply the event. Returns whether the event was claimed.
    fn handle(&self, event: &BuildEvent, context: &mut AggregationContext) -> bool;
}

/// Canonical handler set. Precedence is list order; earlier wins ties.
static DEFAULT_CHAIN: Lazy<Vec<Box<dyn BuildEventHandler>>> = Lazy::new(|| {
    vec![
        Box::new(build_error::BuildErrorHandler),
        Box::new(csharp_command::CSharpCommandHandler),
        Box::new(fsharp_command::FSharpCommandHandler),
        Box::new(visual_basic_command::VisualBasicCommandHandler),
        Box::new(project_started::ProjectStartedHandler),
        Box::new(project_evaluation_finished::ProjectEvaluationFinishedHandler),
        Box::new(target_started::TargetStartedHandler),
        Box::new(project_finished::ProjectFinishedHandler),
    ]
});

pub(crate) fn default_chain() -> &'static [Box<dyn BuildEventHandler>] {
    &DEFAULT_CHAIN
}

/// Append a contributing raw event to the record's audit trail.
pub(crate) fn push_event(mut events: Vec<BuildEvent>, event: &BuildEvent) -> Vec<BuildEvent> {
    events.push(event.clone());
    events
}

/// Store a decoded compiler invocation on the record.
///
/// The first invocation per record wins; a later compiler event for the
/// same instance only contributes to the audit trail. Recompiles within one
/// instance are not expected and must not clobber the decoded file lists.
pub(crate) fn store_invocation(
    analysis: ProjectAnalysis,
    event: &BuildEvent,
    decode: impl FnOnce(&ProjectAnalysis) -> CompilerInvocation,
) -> ProjectAnalysis {
    if analysis.command.is_some() {
        return ProjectAnalysis {
            events: push_event(analysis.events.clone(), event),
            ..analysis
        };
    }

    let command = decode(&analysis);
    ProjectAnalysis {
        source_files: command.source_files.clone(),
        additional_files: command.additional_files.clone(),
        embedded_files: command.embedded_files.clone(),
        command: Some(command),
        events: push_event(analysis.events.clone(), event),
        ..analysis
    }
}

/// Base directory for resolving relative paths in a compiler command: the
/// directory of the project file, when known.
pub(crate) fn command_base_dir(analysis: &ProjectAnalysis) -> Option<std::path::PathBuf> {
    analysis
        .project_file
        .as_ref()
        .and_then(|file| file.parent())
        .map(std::path::Path::to_path_buf)
}
