use crate::errors::WardenError;
use crate::models::{Notes, Settings};

pub mod memory;

/// Persistence seam for the settings document. `load` materializes defaults
/// when no document exists yet; `save` fully overwrites.
pub trait SettingsStore {
    fn load(&self) -> Result<Settings, WardenError>;
    fn save(&self, settings: &Settings) -> Result<(), WardenError>;
}

/// Persistence seam for the backup-record list.
pub trait NotesStore {
    fn load(&self) -> Result<Notes, WardenError>;
    fn save(&self, notes: &Notes) -> Result<(), WardenError>;
}
