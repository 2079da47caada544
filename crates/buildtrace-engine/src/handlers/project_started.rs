use buildtrace_types::{BuildEvent, EventPayload, normalize_path, project_file_names};

use super::{BuildEventHandler, push_event};
use crate::context::AggregationContext;
use crate::model::ProjectAnalysis;

/// Handles the project-started event.
pub(crate) struct ProjectStartedHandler;

impl BuildEventHandler for ProjectStartedHandler {
    fn handle(&self, event: &BuildEvent, context: &mut AggregationContext) -> bool {
        let EventPayload::ProjectStarted(payload) = &event.payload else {
            return false;
        };

        context.update(event, |analysis| {
            let project_file = analysis.project_file.clone().or_else(|| {
                payload
                    .project_file
                    .as_deref()
                    .filter(|path| !path.is_empty())
                    .map(|path| normalize_path(None, path))
            });

            // The started event's bags are a placeholder: kept only while
            // nothing better is known. Evaluation data supersedes them.
            let properties = if analysis.properties.is_empty() {
                payload.properties.clone()
            } else {
                analysis.properties.clone()
            };
            let items = if analysis.items.is_empty() {
                payload.items.clone()
            } else {
                analysis.items.clone()
            };

            let target_framework = analysis.target_framework.clone().or_else(|| {
                [
                    project_file_names::TARGET_FRAMEWORK,
                    project_file_names::TARGET_FRAMEWORK_IDENTIFIER,
                    project_file_names::TARGET_FRAMEWORK_VERSION,
                ]
                .iter()
                .find_map(|key| properties.get(key))
                .map(String::from)
            });

            // Restore is not communicated via TargetStarted, but is
            // important to know.
            let target_name = if analysis.target_name.is_none()
                && payload.target_names == ["Restore"]
            {
                Some("Restore".to_string())
            } else {
                analysis.target_name.clone()
            };

            ProjectAnalysis {
                project_file,
                properties,
                items,
                target_framework,
                target_name,
                started: analysis.started.or(Some(event.timestamp)),
                events: push_event(analysis.events.clone(), event),
                ..analysis
            }
        });
        true
    }
}
