mod cli;
mod menu;

use anyhow::Result;
use clap::Parser;

use cli::commands::run_cli;
use cli::opts::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Cli::parse();
    run_cli(args)
}
