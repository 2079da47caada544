mod args;
mod handlers;
mod output;

pub use args::{Cli, Commands, FileKind};

use anyhow::Result;
use is_terminal::IsTerminal;

pub fn run(cli: Cli) -> Result<()> {
    let color = !cli.no_color && std::io::stdout().is_terminal();

    match cli.command {
        Commands::Analyze { log, json } => handlers::analyze::run(&log, json, color),
        Commands::Files { log, project, kind } => handlers::files::run(&log, project, kind),
        Commands::Errors { log } => handlers::errors::run(&log, color),
    }
}
