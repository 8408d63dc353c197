use crate::cli::commands::list_cmd;

use anyhow::Result;
use savewarden_core::{BackupEngine, WardenError};
use std::io::{stdin, stdout, Write};

/// Interactive loop. Operation failures are reported and the loop continues;
/// only `quit` ends the process.
pub fn run(engine: &BackupEngine) -> Result<()> {
    println!("savewarden — backups for your save folder");
    loop {
        println!("\n[1=create, 2=restore, 3=delete, 4=list, h=help, q=quit]");
        let choice = read_line("> ")?;
        let outcome = match choice.trim().to_lowercase().as_str() {
            "1" | "c" | "create" => create(engine),
            "2" | "r" | "restore" => restore(engine),
            "3" | "d" | "delete" => delete(engine),
            "4" | "l" | "list" => list_cmd(engine),
            "h" | "help" => {
                print_help();
                Ok(())
            }
            "q" | "quit" | "exit" => return Ok(()),
            "" => continue,
            _ => {
                println!("enter 1-4, h, or q");
                continue;
            }
        };
        if let Err(err) = outcome {
            match err.downcast_ref::<WardenError>() {
                Some(WardenError::Cancelled) => println!("cancelled"),
                _ => println!("error: {err}"),
            }
        }
    }
}

fn create(engine: &BackupEngine) -> Result<()> {
    let name = prompt_required("backup name> ")?;
    let description = read_line("description (optional)> ")?;
    let rec = engine.create(name.trim(), description.trim())?;
    println!("created {} at {}", rec.name, rec.backupdate);
    Ok(())
}

fn restore(engine: &BackupEngine) -> Result<()> {
    list_cmd(engine)?;
    let name = prompt_required("restore which backup?> ")?;
    let name = name.trim();
    if !confirm(&format!("overwrite the active save with '{name}'?"))? {
        return Err(WardenError::Cancelled.into());
    }
    engine.restore(name)?;
    println!("restored {name}");
    Ok(())
}

fn delete(engine: &BackupEngine) -> Result<()> {
    list_cmd(engine)?;
    let name = prompt_required("delete which backup?> ")?;
    let name = name.trim();
    if !confirm(&format!("delete '{name}' and its record?"))? {
        return Err(WardenError::Cancelled.into());
    }
    engine.delete(name)?;
    println!("deleted {name}");
    Ok(())
}

fn print_help() {
    println!("create  copy the active save into the backup store under a name");
    println!("restore overwrite the active save with a backup (a safety copy");
    println!("        of the current save is taken first)");
    println!("delete  remove a backup directory and its record");
    println!("list    show all backups, newest first");
}

/// Empty input cancels the operation.
fn prompt_required(prompt: &str) -> Result<String> {
    let line = read_line(prompt)?;
    if line.trim().is_empty() {
        return Err(WardenError::Cancelled.into());
    }
    Ok(line)
}

fn confirm(question: &str) -> Result<bool> {
    let line = read_line(&format!("{question} [y/N] "))?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    stdout().flush().ok();
    let mut s = String::new();
    stdin().read_line(&mut s)?;
    Ok(s)
}
