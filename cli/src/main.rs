mod args;
mod commands;

use args::{Cli, Command, JsonLdKind};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Search(args) => commands::search(args),
        Command::JsonLd { kind } => match kind {
            JsonLdKind::Website { config } => commands::json_ld_website(config.as_deref()),
            JsonLdKind::Post { pathname, meta } => commands::json_ld_post(&pathname, &meta),
        },
    }
}
