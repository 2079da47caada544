use std::collections::BTreeMap;

use buildtrace_types::{BuildEvent, ProjectId};

use crate::analysis::BuildAnalysis;
use crate::handlers;
use crate::model::ProjectAnalysis;

/// Mutable store driving one pipeline run: the current snapshot per project
/// instance, plus the events no handler claimed.
///
/// One driver owns one context for the lifetime of one run; no locking is
/// needed. Cancelling a run is simply dropping the context - any prefix of
/// the stream leaves every record in a valid state.
#[derive(Debug, Default)]
pub struct AggregationContext {
    projects: BTreeMap<ProjectId, ProjectAnalysis>,
    skipped: Vec<BuildEvent>,
}

impl AggregationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one event through the handler chain. The first handler that
    /// claims it wins; an unclaimed event lands in the skipped list, which
    /// is diagnostics, not an error.
    pub fn dispatch(&mut self, event: BuildEvent) {
        let claimed = handlers::default_chain()
            .iter()
            .any(|handler| handler.handle(&event, self));
        if !claimed {
            self.skipped.push(event);
        }
    }

    /// Look up or lazily create the record for the event's project instance
    /// and replace it with the transformed snapshot. Lazy creation means
    /// any event kind may be the first one observed for an id.
    pub(crate) fn update(
        &mut self,
        event: &BuildEvent,
        transform: impl FnOnce(ProjectAnalysis) -> ProjectAnalysis,
    ) {
        let project_id = event.project_id;
        let analysis = self
            .projects
            .remove(&project_id)
            .unwrap_or_else(|| ProjectAnalysis::new(project_id));
        self.projects.insert(project_id, transform(analysis));
    }

    /// Current snapshot for a project instance, when one exists.
    pub fn get(&self, project_id: ProjectId) -> Option<&ProjectAnalysis> {
        self.projects.get(&project_id)
    }

    pub fn skipped(&self) -> &[BuildEvent] {
        &self.skipped
    }

    /// Finalize the run into an immutable result collection.
    pub fn into_analysis(self) -> BuildAnalysis {
        BuildAnalysis::new(self.projects.into_values().collect(), self.skipped)
    }
}
