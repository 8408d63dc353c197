use savewarden_core::{
    BackupEngine, BackupRecord, Notes, NotesStore, Settings, SettingsStore, WardenError,
};
use savewarden_json::{paths, JsonNotesStore, JsonSettingsStore};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SAVE_ID: &str = "3344556677";

fn seed_save(root: &Path) {
    let save = root.join(SAVE_ID);
    fs::create_dir_all(&save).unwrap();
    fs::write(save.join("ER0000.sl2"), b"savegame-v1").unwrap();
}

#[test]
fn first_settings_load_materializes_defaults() {
    let dir = TempDir::new().unwrap();
    seed_save(dir.path());

    let store = JsonSettingsStore::open(dir.path());
    let settings = store.load().unwrap();
    assert_eq!(settings.backup_location, dir.path().join("Backup"));
    assert_eq!(settings.numbers, SAVE_ID);

    let raw = fs::read_to_string(dir.path().join(paths::SETTINGS_FILE)).unwrap();
    assert!(raw.contains("backupLocation"));
    assert!(raw.contains(SAVE_ID));

    // Second load reads the same document back.
    assert_eq!(store.load().unwrap(), settings);
}

#[test]
fn settings_load_fails_loudly_without_a_save_folder() {
    let dir = TempDir::new().unwrap();
    let store = JsonSettingsStore::open(dir.path());
    let err = store.load().unwrap_err();
    assert!(matches!(err, WardenError::SaveNotFound(_)));
    assert!(!dir.path().join(paths::SETTINGS_FILE).exists());
}

#[test]
fn settings_save_overwrites_document() {
    let dir = TempDir::new().unwrap();
    seed_save(dir.path());
    let store = JsonSettingsStore::open(dir.path());
    store.load().unwrap();

    let replacement = Settings::new(dir.path().join("elsewhere"), SAVE_ID);
    store.save(&replacement).unwrap();
    assert_eq!(store.load().unwrap(), replacement);
}

#[test]
fn first_notes_load_materializes_empty_list() {
    let dir = TempDir::new().unwrap();
    let store = JsonNotesStore::open(dir.path());
    assert!(store.load().unwrap().notes.is_empty());
    assert!(dir.path().join(paths::NOTES_FILE).exists());
}

#[test]
fn notes_save_fully_overwrites() {
    let dir = TempDir::new().unwrap();
    let store = JsonNotesStore::open(dir.path());

    let mut notes = Notes::default();
    notes.push_sorted(BackupRecord {
        name: "one".to_string(),
        description: "d1".to_string(),
        backupdate: "01/01/2026, 10:00".to_string(),
    });
    notes.push_sorted(BackupRecord {
        name: "two".to_string(),
        description: "d2".to_string(),
        backupdate: "01/02/2026, 10:00".to_string(),
    });
    store.save(&notes).unwrap();
    assert_eq!(store.load().unwrap().notes.len(), 2);

    notes.remove("one");
    store.save(&notes).unwrap();
    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.notes.len(), 1);
    assert_eq!(reloaded.notes[0].name, "two");
}

#[test]
fn engine_works_end_to_end_on_json_stores() {
    let dir = TempDir::new().unwrap();
    seed_save(dir.path());

    let settings = JsonSettingsStore::open(dir.path());
    let notes = JsonNotesStore::open(dir.path());
    let engine = BackupEngine::new(dir.path(), &settings, &notes);

    engine.create("milestone", "pre-boss").unwrap();
    let raw = fs::read_to_string(dir.path().join(paths::NOTES_FILE)).unwrap();
    assert!(raw.contains("milestone"));
    assert!(raw.contains("pre-boss"));

    let live = dir.path().join(SAVE_ID).join("ER0000.sl2");
    fs::write(&live, b"savegame-v2").unwrap();
    engine.restore("milestone").unwrap();
    assert_eq!(fs::read(&live).unwrap(), b"savegame-v1");

    engine.delete("milestone").unwrap();
    assert!(engine.list().unwrap().is_empty());
    assert!(!dir.path().join("Backup").join("milestone").exists());
}
