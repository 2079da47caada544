use std::fmt::Write as _;
use std::path::Path;

use buildtrace_types::BuildEvent;

use crate::error::{Error, Result};

/// Read a recorded build log into an event sequence.
///
/// Blank lines are skipped; an unparseable line is an error - a recorded
/// log is a contract, unlike a live tail. The returned events are stably
/// sorted by timestamp: the engine requires non-decreasing order, and the
/// recorder's bag does not guarantee it, while ties keep arrival order.
pub fn read_events(path: &Path) -> Result<Vec<BuildEvent>> {
    let text = std::fs::read_to_string(path)?;

    let mut events: Vec<BuildEvent> = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|source| Error::Json {
            line: index + 1,
            source,
        })?;
        events.push(event);
    }

    events.sort_by_key(|event| event.timestamp);
    Ok(events)
}

/// Parse a single log line for streaming consumption (e.g. a live tail).
/// Returns None for malformed or incomplete lines (non-fatal).
pub fn parse_record(line: &str) -> Option<BuildEvent> {
    serde_json::from_str(line.trim()).ok()
}

/// Write an event sequence as a recorded log, one event per line.
pub fn write_events(path: &Path, events: &[BuildEvent]) -> Result<()> {
    let mut out = String::new();
    for (index, event) in events.iter().enumerate() {
        let line = serde_json::to_string(event).map_err(|source| Error::Json {
            line: index + 1,
            source,
        })?;
        let _ = writeln!(out, "{line}");
    }
    std::fs::write(path, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildtrace_types::{EventPayload, ProjectId, TargetStartedPayload};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn ts(seconds: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 2, 9, 0, 0).unwrap() + Duration::seconds(seconds)
    }

    fn target_started(seconds: i64, name: &str) -> BuildEvent {
        BuildEvent::new(
            ts(seconds),
            ProjectId(1),
            EventPayload::TargetStarted(TargetStartedPayload {
                target_name: name.to_string(),
            }),
        )
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.jsonl");

        let events = vec![target_started(0, "Restore"), target_started(1, "Build")];
        write_events(&path, &events).unwrap();

        let read = read_events(&path).unwrap();
        assert_eq!(read, events);
    }

    #[test]
    fn test_read_restores_chronological_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.jsonl");

        write_events(&path, &[target_started(5, "Build"), target_started(0, "Restore")]).unwrap();

        let read = read_events(&path).unwrap();
        let names: Vec<_> = read
            .iter()
            .map(|e| match &e.payload {
                EventPayload::TargetStarted(p) => p.target_name.clone(),
                _ => panic!("Wrong payload type"),
            })
            .collect();
        assert_eq!(names, vec!["Restore", "Build"]);
    }

    #[test]
    fn test_malformed_line_is_an_error_with_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.jsonl");
        std::fs::write(&path, "not json\n").unwrap();

        match read_events(&path) {
            Err(Error::Json { line, .. }) => assert_eq!(line, 1),
            other => panic!("Expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_record_tolerates_malformed_lines() {
        assert!(parse_record("{ truncated").is_none());
        assert!(parse_record("").is_none());

        let line = serde_json::to_string(&target_started(0, "Build")).unwrap();
        assert!(parse_record(&line).is_some());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.jsonl");

        let line = serde_json::to_string(&target_started(0, "Build")).unwrap();
        std::fs::write(&path, format!("\n{line}\n\n")).unwrap();

        assert_eq!(read_events(&path).unwrap().len(), 1);
    }
}
