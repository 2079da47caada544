use std::path::Path;

use anyhow::Result;

use buildtrace_types::ProjectId;

use crate::args::FileKind;

pub(crate) fn run(log: &Path, project: Option<i32>, kind: FileKind) -> Result<()> {
    let analysis = super::load_analysis(log)?;

    for record in &analysis {
        if let Some(id) = project
            && record.project_id != ProjectId(id)
        {
            continue;
        }

        let files = match kind {
            FileKind::Source => &record.source_files,
            FileKind::Additional => &record.additional_files,
            FileKind::Embedded => &record.embedded_files,
        };
        for file in files {
            println!("{}", file.display());
        }
    }
    Ok(())
}
