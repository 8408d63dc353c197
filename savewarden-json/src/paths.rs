use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Settings file name, kept compatible with metadata written by earlier
/// versions of the tool.
pub const SETTINGS_FILE: &str = "ASM-ERSM.json";
pub const NOTES_FILE: &str = "backupnotes.json";
pub const DEFAULT_BACKUP_DIR: &str = "Backup";

/// Platform save root: the game keeps its saves under the user's roaming
/// data directory (e.g. `%APPDATA%\EldenRing` on Windows).
pub fn default_save_root() -> PathBuf {
    if let Some(bd) = BaseDirs::new() {
        bd.data_dir().join("EldenRing")
    } else {
        // Fallback: current dir
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

pub fn settings_file(save_root: &Path) -> PathBuf {
    save_root.join(SETTINGS_FILE)
}

pub fn notes_file(save_root: &Path) -> PathBuf {
    save_root.join(NOTES_FILE)
}
