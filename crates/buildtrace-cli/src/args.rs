use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "buildtrace",
    version,
    about = "Analyze recorded MSBuild event logs into per-project compiler facts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize each project build instance in a recorded log
    Analyze {
        /// Recorded build log (JSONL of build events)
        log: PathBuf,

        /// Emit the full analysis as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// List the files that participated in compilation
    Files {
        /// Recorded build log (JSONL of build events)
        log: PathBuf,

        /// Restrict to one project instance id
        #[arg(long)]
        project: Option<i32>,

        /// Which decoded file list to print
        #[arg(long, value_enum, default_value = "source")]
        kind: FileKind,
    },

    /// List recorded build errors
    Errors {
        /// Recorded build log (JSONL of build events)
        log: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FileKind {
    Source,
    Additional,
    Embedded,
}
