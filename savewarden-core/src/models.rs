use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::path::PathBuf;

/// Timestamp format used for `backupdate`, chosen to match the on-disk
/// metadata produced by earlier versions of the tool.
pub const BACKUP_DATE_FORMAT: &str = "%m/%d/%Y, %H:%M";

pub const DEFAULT_DESCRIPTION: &str = "No description provided";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub backup_location: PathBuf,
    /// Last-known id of the active save folder (all digits).
    pub numbers: String,
}

impl Settings {
    pub fn new(backup_location: impl Into<PathBuf>, numbers: impl Into<String>) -> Self {
        Self {
            backup_location: backup_location.into(),
            numbers: numbers.into(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackupRecord {
    /// Unique key; also the backup's directory name under the backup store.
    pub name: String,
    pub description: String,
    pub backupdate: String,
}

impl BackupRecord {
    pub fn new(name: impl Into<String>, description: &str, taken_at: DateTime<Local>) -> Self {
        let description = if description.trim().is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            description.trim().to_string()
        };
        Self {
            name: name.into(),
            description,
            backupdate: taken_at.format(BACKUP_DATE_FORMAT).to_string(),
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.backupdate, BACKUP_DATE_FORMAT).ok()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notes {
    pub notes: Vec<BackupRecord>,
}

impl Notes {
    pub fn find(&self, name: &str) -> Option<&BackupRecord> {
        self.notes.iter().find(|r| r.name == name)
    }

    pub fn push_sorted(&mut self, record: BackupRecord) {
        self.notes.push(record);
        self.sort();
    }

    pub fn remove(&mut self, name: &str) -> Option<BackupRecord> {
        let idx = self.notes.iter().position(|r| r.name == name)?;
        Some(self.notes.remove(idx))
    }

    /// Newest first; records with an unparseable timestamp sort last.
    pub fn sort(&mut self) {
        self.notes
            .sort_by_key(|r| Reverse(r.parsed_date().unwrap_or(NaiveDateTime::MIN)));
    }
}
