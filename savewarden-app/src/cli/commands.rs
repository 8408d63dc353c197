use crate::cli::opts::{BackupArgs, Cli, Command};
use crate::menu;

use anyhow::Result;
use chrono::Local;
use savewarden_core::BackupEngine;
use savewarden_json::{paths, JsonNotesStore, JsonSettingsStore};

pub fn run_cli(args: Cli) -> Result<()> {
    let save_root = args.save_root.unwrap_or_else(paths::default_save_root);
    tracing::debug!(save_root = %save_root.display(), "using save root");
    let settings = JsonSettingsStore::open(save_root.clone());
    let notes = JsonNotesStore::open(&save_root);
    let engine = BackupEngine::new(save_root, &settings, &notes);

    match args.cmd {
        None => menu::run(&engine),
        Some(Command::Backup(a)) => backup_cmd(&engine, a),
        Some(Command::List) => list_cmd(&engine),
        Some(Command::Restore { name }) => {
            engine.restore(&name)?;
            println!("restored {name}");
            Ok(())
        }
        Some(Command::Delete { name }) => {
            engine.delete(&name)?;
            println!("deleted {name}");
            Ok(())
        }
    }
}

fn backup_cmd(engine: &BackupEngine, a: BackupArgs) -> Result<()> {
    let name = a.name.unwrap_or_else(generated_name);
    let rec = engine.create(&name, &a.description)?;
    println!("{}\t{}", rec.name, rec.backupdate);
    Ok(())
}

pub fn list_cmd(engine: &BackupEngine) -> Result<()> {
    let records = engine.list()?;
    if records.is_empty() {
        println!("no backups");
        return Ok(());
    }
    for r in records {
        println!("{}\t{}\t{}", r.name, r.backupdate, r.description);
    }
    Ok(())
}

fn generated_name() -> String {
    format!("backup-{}", Local::now().format("%Y%m%d-%H%M%S"))
}
