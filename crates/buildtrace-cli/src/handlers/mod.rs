pub(crate) mod analyze;
pub(crate) mod errors;
pub(crate) mod files;

use std::path::Path;

use anyhow::{Context, Result};

use buildtrace_engine::{BuildAnalysis, analyze_events};

/// Read a recorded log and fold it into the analysis collection.
pub(crate) fn load_analysis(log: &Path) -> Result<BuildAnalysis> {
    let events = buildtrace_replay::read_events(log)
        .with_context(|| format!("failed to read build log {}", log.display()))?;
    Ok(analyze_events(events))
}
