use buildtrace_types::{BuildEvent, EventPayload};

use super::{BuildEventHandler, push_event};
use crate::context::AggregationContext;
use crate::model::ProjectAnalysis;

/// Handles the project-evaluation-finished event.
///
/// Newer log protocol versions carry properties and items on evaluation
/// and glue them to the project events, while the started event still
/// logs them when legacy loggers are attached. Evaluation data is the
/// authoritative source, so it replaces whatever the started event put on
/// the record, in either arrival order.
pub(crate) struct ProjectEvaluationFinishedHandler;

impl BuildEventHandler for ProjectEvaluationFinishedHandler {
    fn handle(&self, event: &BuildEvent, context: &mut AggregationContext) -> bool {
        let EventPayload::ProjectEvaluationFinished(payload) = &event.payload else {
            return false;
        };

        context.update(event, |analysis| ProjectAnalysis {
            properties: payload.properties.clone(),
            items: payload.items.clone(),
            events: push_event(analysis.events.clone(), event),
            ..analysis
        });
        true
    }
}
