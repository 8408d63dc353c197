use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "savewarden", version, about = "Backup manager for the game's save folder")]
pub struct Cli {
    /// Save root directory (defaults to the platform save location)
    #[arg(long)]
    pub save_root: Option<PathBuf>,

    /// With no subcommand the interactive menu starts
    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Create a backup of the active save
    Backup(BackupArgs),
    /// List all backups, newest first
    List,
    /// Restore a backup over the active save
    Restore { name: String },
    /// Delete a backup and its record
    Delete { name: String },
}

#[derive(Debug, Args, Clone)]
pub struct BackupArgs {
    /// Backup name; generated from the clock when omitted
    pub name: Option<String>,
    #[arg(long, default_value = "")]
    pub description: String,
}
