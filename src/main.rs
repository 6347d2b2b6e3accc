#![deny(future_incompatible)]
#![deny(nonstandard_style)]
#![deny(clippy::pedantic)]

use std::path::PathBuf;

use anyhow::Result;
use barycentric::{cfg, editor};

#[macro_use]
extern crate log;

#[derive(clap::Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Interactive session reading commands from stdin.
    Editor(editor::Args),
    /// Write the default startup scene.
    Settings(SettingsArgs),
}

#[derive(clap::Args)]
struct SettingsArgs {
    #[arg(long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Init logging.
    env_logger::init();

    let args = <Args as clap::Parser>::parse();
    match args.command {
        Commands::Editor(args) => editor::run(args),
        Commands::Settings(args) => {
            cfg::Settings::default().save(&args.output)?;
            info!("Wrote default settings to {}", args.output.display());
            Ok(())
        }
    }
}
