use buildtrace_types::{BuildEvent, EventPayload};

use super::BuildEventHandler;
use crate::context::AggregationContext;
use crate::model::ProjectAnalysis;

/// Handles the project-finished event.
///
/// The reported success flag is combined with the errors recorded so far;
/// one recorded error makes the instance failed whatever the tool reported.
pub(crate) struct ProjectFinishedHandler;

impl BuildEventHandler for ProjectFinishedHandler {
    fn handle(&self, event: &BuildEvent, context: &mut AggregationContext) -> bool {
        let EventPayload::ProjectFinished(payload) = &event.payload else {
            return false;
        };

        context.update(event, |analysis| ProjectAnalysis {
            succeeded: Some(payload.succeeded && analysis.errors.is_empty()),
            finished: analysis.finished.or(Some(event.timestamp)),
            ..analysis
        });
        true
    }
}
