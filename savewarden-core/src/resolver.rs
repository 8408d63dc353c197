use crate::errors::WardenError;
use std::fs;
use std::path::{Path, PathBuf};

/// The save folder the game is currently writing to, identified by its
/// all-digit directory name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSave {
    pub id: String,
    pub path: PathBuf,
}

/// Scans the save root's immediate children for the single directory whose
/// full name is all ASCII digits. Zero or multiple candidates are errors.
pub fn find_active_save(save_root: &Path) -> Result<ActiveSave, WardenError> {
    let mut found: Vec<ActiveSave> = Vec::new();
    for entry in fs::read_dir(save_root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
            found.push(ActiveSave {
                id: name.to_string(),
                path: entry.path(),
            });
        }
    }
    match found.len() {
        0 => Err(WardenError::SaveNotFound(save_root.to_path_buf())),
        1 => Ok(found.remove(0)),
        _ => Err(WardenError::SaveAmbiguous(save_root.to_path_buf())),
    }
}
