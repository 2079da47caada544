use buildtrace_types::{BuildEvent, EventPayload};

use super::{BuildEventHandler, push_event};
use crate::context::AggregationContext;
use crate::model::ProjectAnalysis;

/// Handles build error events.
///
/// Errors are domain data, not failures: they accumulate on the record and
/// weigh into overall success when it is read, never by flipping a flag
/// here.
pub(crate) struct BuildErrorHandler;

impl BuildEventHandler for BuildErrorHandler {
    fn handle(&self, event: &BuildEvent, context: &mut AggregationContext) -> bool {
        let EventPayload::BuildError(payload) = &event.payload else {
            return false;
        };

        context.update(event, |analysis| {
            let mut errors = analysis.errors.clone();
            errors.push(payload.clone());
            ProjectAnalysis {
                errors,
                events: push_event(analysis.events.clone(), event),
                ..analysis
            }
        });
        true
    }
}
