use std::path::Path;

use anyhow::Result;

use crate::output;

pub(crate) fn run(log: &Path, color: bool) -> Result<()> {
    let analysis = super::load_analysis(log)?;

    let mut total = 0usize;
    for project in &analysis {
        for error in &project.errors {
            total += 1;
            let location = match (&error.file, error.line) {
                (Some(file), Some(line)) => format!("{file}:{line}: "),
                (Some(file), None) => format!("{file}: "),
                _ => String::new(),
            };
            let code = error
                .code
                .as_deref()
                .map(|code| format!("[{code}] "))
                .unwrap_or_default();
            println!(
                "{} {}{}{}",
                output::heading(&format!("project {}:", project.project_id), color),
                location,
                code,
                error.message
            );
        }
    }

    if total == 0 {
        println!("no errors recorded");
    }
    Ok(())
}
