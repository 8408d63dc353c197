use savewarden_core::resolver::find_active_save;
use savewarden_core::{Notes, NotesStore, Settings, SettingsStore, WardenError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

pub mod paths;

/// Settings document at `SaveRoot/ASM-ERSM.json`. The default document is
/// materialized on first load, which requires an active save folder to exist.
pub struct JsonSettingsStore {
    path: PathBuf,
    save_root: PathBuf,
}

impl JsonSettingsStore {
    pub fn open(save_root: impl Into<PathBuf>) -> Self {
        let save_root = save_root.into();
        Self {
            path: paths::settings_file(&save_root),
            save_root,
        }
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<Settings, WardenError> {
        if !self.path.exists() {
            let active = find_active_save(&self.save_root)?;
            let defaults = Settings::new(
                self.save_root.join(paths::DEFAULT_BACKUP_DIR),
                active.id,
            );
            write_json(&self.path, &defaults)?;
            debug!(path = %self.path.display(), "initialized settings file");
        }
        read_json(&self.path)
    }

    fn save(&self, settings: &Settings) -> Result<(), WardenError> {
        write_json(&self.path, settings)
    }
}

/// Notes document at `SaveRoot/backupnotes.json`; starts out as an empty
/// record list.
pub struct JsonNotesStore {
    path: PathBuf,
}

impl JsonNotesStore {
    pub fn open(save_root: &Path) -> Self {
        Self {
            path: paths::notes_file(save_root),
        }
    }
}

impl NotesStore for JsonNotesStore {
    fn load(&self) -> Result<Notes, WardenError> {
        if !self.path.exists() {
            write_json(&self.path, &Notes::default())?;
            debug!(path = %self.path.display(), "initialized notes file");
        }
        read_json(&self.path)
    }

    fn save(&self, notes: &Notes) -> Result<(), WardenError> {
        write_json(&self.path, notes)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, WardenError> {
    let buf = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&buf)?)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), WardenError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_vec_pretty(value)?;
    let mut tmp = NamedTempFile::new_in(path.parent().unwrap_or_else(|| Path::new(".")))?;
    tmp.write_all(&json)?;
    tmp.flush()?;
    let _ = fs::remove_file(path);
    tmp.persist(path).map_err(|e| WardenError::Io(e.error))?;
    Ok(())
}
