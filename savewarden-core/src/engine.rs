use crate::errors::WardenError;
use crate::fsops::copy_dir_all;
use crate::models::{BackupRecord, Settings};
use crate::resolver::{find_active_save, ActiveSave};
use crate::store::{NotesStore, SettingsStore};
use chrono::Local;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Reserved name prefix for the safety copy taken before a restore. User
/// backups may not start with it.
pub const GUARD_PREFIX: &str = "pre-restore-";

const GUARD_DESCRIPTION: &str = "Safety copy taken automatically before a restore";
const STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

pub fn validate_backup_name(name: &str) -> Result<(), WardenError> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.starts_with(GUARD_PREFIX);
    if bad {
        return Err(WardenError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Performs backup create/restore/delete/list against the filesystem and
/// keeps the notes document consistent with what's on disk.
///
/// Stateless between calls: every operation re-loads the documents it needs
/// and re-resolves the active save folder, so an id change on disk (e.g.
/// after a game update) is picked up rather than trusted from the cache.
pub struct BackupEngine<'a> {
    save_root: PathBuf,
    settings: &'a dyn SettingsStore,
    notes: &'a dyn NotesStore,
}

impl<'a> BackupEngine<'a> {
    pub fn new(
        save_root: impl Into<PathBuf>,
        settings: &'a dyn SettingsStore,
        notes: &'a dyn NotesStore,
    ) -> Self {
        Self {
            save_root: save_root.into(),
            settings,
            notes,
        }
    }

    pub fn create(&self, name: &str, description: &str) -> Result<BackupRecord, WardenError> {
        validate_backup_name(name)?;
        self.create_unchecked(name, description)
    }

    pub fn restore(&self, name: &str) -> Result<(), WardenError> {
        let (settings, active) = self.context()?;
        let source = settings.backup_location.join(name);
        if !source.is_dir() {
            return Err(WardenError::BackupNotFound(name.to_string()));
        }

        // Safety copy of the live save, kept until the restore has landed.
        let stamp = Local::now().format(STAMP_FORMAT).to_string();
        let guard_name = format!("{GUARD_PREFIX}{stamp}");
        self.create_unchecked(&guard_name, GUARD_DESCRIPTION)?;

        // Copy in under a staging name, drop the live save, rename into
        // place. The staging name keeps a backup named like the numeric id
        // from colliding with the live directory.
        let staging = self.save_root.join(format!(".incoming-{stamp}"));
        copy_dir_all(&source, &staging)?;
        fs::remove_dir_all(&active.path)?;
        fs::rename(&staging, &active.path)?;
        debug!(backup = name, save = %active.id, "restore sequence complete");

        fs::remove_dir_all(settings.backup_location.join(&guard_name))?;
        let mut notes = self.notes.load()?;
        notes.remove(&guard_name);
        self.notes.save(&notes)?;
        info!(backup = name, "restored backup over save {}", active.id);
        Ok(())
    }

    pub fn delete(&self, name: &str) -> Result<(), WardenError> {
        let settings = self.settings.load()?;
        let dir = settings.backup_location.join(name);
        if !dir.is_dir() {
            return Err(WardenError::BackupNotFound(name.to_string()));
        }
        fs::remove_dir_all(&dir)?;
        let mut notes = self.notes.load()?;
        notes.remove(name);
        self.notes.save(&notes)?;
        info!(backup = name, "deleted backup");
        Ok(())
    }

    pub fn list(&self) -> Result<Vec<BackupRecord>, WardenError> {
        Ok(self.notes.load()?.notes)
    }

    /// Copies the active save into the backup store and records it. Skips
    /// name validation so the restore guard can use its reserved prefix.
    fn create_unchecked(&self, name: &str, description: &str) -> Result<BackupRecord, WardenError> {
        let (settings, active) = self.context()?;
        fs::create_dir_all(&settings.backup_location)?;
        let dest = settings.backup_location.join(name);
        if dest.exists() {
            return Err(WardenError::BackupExists(name.to_string()));
        }
        copy_dir_all(&active.path, &dest)?;

        let record = BackupRecord::new(name, description, Local::now());
        let mut notes = self.notes.load()?;
        notes.push_sorted(record.clone());
        self.notes.save(&notes)?;
        info!(backup = name, "created backup of save {}", active.id);
        Ok(record)
    }

    /// Loads settings and re-resolves the active save, refreshing the cached
    /// id when the folder on disk has changed.
    fn context(&self) -> Result<(Settings, ActiveSave), WardenError> {
        let mut settings = self.settings.load()?;
        let active = find_active_save(&self.save_root)?;
        if settings.numbers != active.id {
            debug!(old = %settings.numbers, new = %active.id, "active save id changed, refreshing settings");
            settings.numbers = active.id.clone();
            self.settings.save(&settings)?;
        }
        Ok((settings, active))
    }
}
