use std::path::{Path, PathBuf};

use assert_cmd::Command;
use chrono::{DateTime, Duration, TimeZone, Utc};
use predicates::prelude::*;

use buildtrace_types::{
    BuildErrorPayload, BuildEvent, EventPayload, ItemBag, ProjectFinishedPayload, ProjectId,
    ProjectStartedPayload, PropertyBag, TaskCommandLinePayload,
};

fn ts(seconds: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 2, 9, 0, 0).unwrap() + Duration::seconds(seconds)
}

fn fixture_log(dir: &Path) -> PathBuf {
    let events = vec![
        BuildEvent::new(
            ts(0),
            ProjectId(1),
            EventPayload::ProjectStarted(ProjectStartedPayload {
                project_file: Some("/work/App/app.csproj".to_string()),
                properties: [("TargetFramework", "net8.0")].into_iter().collect::<PropertyBag>(),
                items: ItemBag::new(),
                target_names: vec!["Build".to_string()],
            }),
        ),
        BuildEvent::new(
            ts(1),
            ProjectId(1),
            EventPayload::TaskCommandLine(TaskCommandLinePayload {
                task_name: "Csc".to_string(),
                command_line: "csc.exe /target:exe Program.cs Util.cs".to_string(),
            }),
        ),
        BuildEvent::new(
            ts(2),
            ProjectId(1),
            EventPayload::ProjectFinished(ProjectFinishedPayload { succeeded: true }),
        ),
        BuildEvent::new(
            ts(0),
            ProjectId(2),
            EventPayload::ProjectStarted(ProjectStartedPayload {
                project_file: Some("/work/Lib/lib.csproj".to_string()),
                properties: PropertyBag::new(),
                items: ItemBag::new(),
                target_names: vec!["Build".to_string()],
            }),
        ),
        BuildEvent::new(
            ts(1),
            ProjectId(2),
            EventPayload::BuildError(BuildErrorPayload {
                message: "The name 'x' does not exist in the current context".to_string(),
                code: Some("CS0103".to_string()),
                file: Some("Class1.cs".to_string()),
                line: Some(12),
                column: Some(9),
            }),
        ),
        BuildEvent::new(
            ts(2),
            ProjectId(2),
            EventPayload::ProjectFinished(ProjectFinishedPayload { succeeded: false }),
        ),
    ];

    let path = dir.join("build.jsonl");
    buildtrace_replay::write_events(&path, &events).unwrap();
    path
}

#[test]
fn test_analyze_summarizes_each_project() {
    let dir = tempfile::tempdir().unwrap();
    let log = fixture_log(dir.path());

    Command::cargo_bin("buildtrace")
        .unwrap()
        .arg("analyze")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("/work/App/app.csproj"))
        .stdout(predicate::str::contains("SUCCESS"))
        .stdout(predicate::str::contains("FAILED"))
        .stdout(predicate::str::contains("tfm=net8.0"))
        .stdout(predicate::str::contains("2 project(s)"));
}

#[test]
fn test_analyze_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let log = fixture_log(dir.path());

    Command::cargo_bin("buildtrace")
        .unwrap()
        .args(["analyze", "--json"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""project_id": 1"#));
}

#[test]
fn test_files_lists_decoded_sources() {
    let dir = tempfile::tempdir().unwrap();
    let log = fixture_log(dir.path());

    Command::cargo_bin("buildtrace")
        .unwrap()
        .args(["files", "--project", "1"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("/work/App/Program.cs"))
        .stdout(predicate::str::contains("/work/App/Util.cs"))
        .stdout(predicate::str::contains("lib.csproj").not());
}

#[test]
fn test_errors_lists_recorded_errors() {
    let dir = tempfile::tempdir().unwrap();
    let log = fixture_log(dir.path());

    Command::cargo_bin("buildtrace")
        .unwrap()
        .arg("errors")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("[CS0103]"))
        .stdout(predicate::str::contains("Class1.cs:12"));
}

#[test]
fn test_missing_log_fails_with_context() {
    Command::cargo_bin("buildtrace")
        .unwrap()
        .args(["analyze", "/no/such/build.jsonl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read build log"));
}

#[test]
fn test_build_failure_is_data_not_exit_code() {
    // A failed build still analyzes cleanly; only I/O or malformed logs
    // make the tool itself fail.
    let dir = tempfile::tempdir().unwrap();
    let log = fixture_log(dir.path());

    Command::cargo_bin("buildtrace")
        .unwrap()
        .arg("analyze")
        .arg(&log)
        .assert()
        .success();
}
