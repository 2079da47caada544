use std::path::Path;

use anyhow::Result;

use crate::output;

pub(crate) fn run(log: &Path, json: bool, color: bool) -> Result<()> {
    let analysis = super::load_analysis(log)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    for project in &analysis {
        let project_file = project
            .project_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| format!("<project {}>", project.project_id));

        println!(
            "{}  [{}]  target={}  tfm={}  duration={}  sources={}  errors={}  {}",
            output::heading(&project_file, color),
            project.project_id,
            project.target_name.as_deref().unwrap_or("-"),
            project.target_framework.as_deref().unwrap_or("-"),
            output::format_duration(project.duration()),
            project.source_files.len(),
            project.errors.len(),
            output::status(project, color),
        );
    }

    println!(
        "\n{} project(s), {} skipped event(s)",
        analysis.len(),
        analysis.skipped().len()
    );
    Ok(())
}
