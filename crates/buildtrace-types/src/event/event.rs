use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::payload::EventPayload;

// NOTE: Schema Design Goals
//
// 1. Normalization: one tagged shape for every fact a build tool emits,
//    whatever wire or file format carried it. The transport decodes into
//    this shape before the aggregation engine ever sees an event.
//
// 2. Correlation: project_id groups all events belonging to one build of
//    one project within a run. It is NOT unique across separate runs.
//
// 3. Replayability: a recorded log is simply these events serialized one
//    per line, in non-decreasing timestamp order.

/// A discrete, timestamped fact emitted by the build tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildEvent {
    /// Event timestamp (UTC)
    pub timestamp: DateTime<Utc>,

    /// Project instance this event belongs to
    pub project_id: ProjectId,

    /// Event type and content (flattened enum)
    #[serde(flatten)]
    pub payload: EventPayload,
}

impl BuildEvent {
    pub fn new(timestamp: DateTime<Utc>, project_id: ProjectId, payload: EventPayload) -> Self {
        Self {
            timestamp,
            project_id,
            payload,
        }
    }
}

/// Identifier correlating all events of one project build instance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ProjectId(pub i32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ProjectId {
    fn from(id: i32) -> Self {
        ProjectId(id)
    }
}
