use crate::errors::WardenError;
use crate::models::{Notes, Settings};
use crate::store::{NotesStore, SettingsStore};
use parking_lot::RwLock;

pub struct MemorySettings {
    inner: RwLock<Settings>,
}

impl MemorySettings {
    pub fn new(settings: Settings) -> Self {
        Self {
            inner: RwLock::new(settings),
        }
    }
}

impl SettingsStore for MemorySettings {
    fn load(&self) -> Result<Settings, WardenError> {
        Ok(self.inner.read().clone())
    }

    fn save(&self, settings: &Settings) -> Result<(), WardenError> {
        *self.inner.write() = settings.clone();
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryNotes {
    inner: RwLock<Notes>,
}

impl MemoryNotes {
    pub fn new(notes: Notes) -> Self {
        Self {
            inner: RwLock::new(notes),
        }
    }
}

impl NotesStore for MemoryNotes {
    fn load(&self) -> Result<Notes, WardenError> {
        Ok(self.inner.read().clone())
    }

    fn save(&self, notes: &Notes) -> Result<(), WardenError> {
        *self.inner.write() = notes.clone();
        Ok(())
    }
}
