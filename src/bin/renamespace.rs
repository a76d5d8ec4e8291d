//! CLI for the renamespace tool.

use anyhow::Result;
use clap::Parser;
use renamespace::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "renamespace")]
#[command(author, version, about = "Set the application namespace of a scaffolded project", long_about = None)]
struct Cli {
    /// The desired root namespace
    name: String,

    /// Path to the project root
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Skip the autoload rebuild and cache clear after renaming
    #[arg(long)]
    no_scripts: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let layout = DiskLayout::new(&cli.path);
    let outcome = if cli.no_scripts {
        RenameWorkflow::new(&layout, &NoopHooks, &NoopHooks).run(&cli.name)?
    } else {
        let autoload = ComposerDumpAutoload::new(&cli.path);
        let cache = ArtisanOptimizeClear::new(&cli.path);
        RenameWorkflow::new(&layout, &autoload, &cache).run(&cli.name)?
    };

    println!(
        "Application namespace set: {} -> {} ({} file{} changed)",
        outcome.from,
        outcome.to,
        outcome.files_changed,
        if outcome.files_changed == 1 { "" } else { "s" }
    );

    Ok(())
}
