use buildtrace_types::{BuildEvent, EventPayload};

use super::BuildEventHandler;
use crate::context::AggregationContext;
use crate::model::ProjectAnalysis;

/// Handles the target-started event. The latest target always wins.
pub(crate) struct TargetStartedHandler;

impl BuildEventHandler for TargetStartedHandler {
    fn handle(&self, event: &BuildEvent, context: &mut AggregationContext) -> bool {
        let EventPayload::TargetStarted(payload) = &event.payload else {
            return false;
        };

        context.update(event, |analysis| ProjectAnalysis {
            target_name: Some(payload.target_name.clone()),
            ..analysis
        });
        true
    }
}
