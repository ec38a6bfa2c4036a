//! Reading and writing layout files on disk.

use super::{StorageError, StorageResult};
use crate::editor::Editor;
use std::fs;
use std::path::Path;

/// Default file name for saved layouts.
pub const DEFAULT_FILE_NAME: &str = "canvas_state.json";

/// Write the editor's layout to `path` as pretty JSON.
///
/// The save notice is queued only once the write has finished.
pub fn save_to_path(editor: &mut Editor, path: &Path) -> StorageResult<()> {
    let result = editor.to_json().and_then(|json| {
        fs::write(path, json)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
    });
    editor.report_save(&result);
    if result.is_ok() {
        log::info!("Saved layout to {}", path.display());
    }
    result
}

/// Load a layout from `path` into the editor.
pub fn load_from_path(editor: &mut Editor, path: &Path) -> StorageResult<()> {
    if !path.exists() {
        return Err(StorageError::NotFound(path.display().to_string()));
    }
    let json = fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    editor.load(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::NoticeLevel;
    use crate::shapes::ItemSpec;
    use tempfile::tempdir;

    #[test]
    fn test_save_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        let mut editor = Editor::default();
        let id = editor.add_item(ItemSpec::new("Desk", 5.0, 5.0)).unwrap();
        save_to_path(&mut editor, &path).unwrap();

        let mut loaded = Editor::default();
        load_from_path(&mut loaded, &path).unwrap();
        assert_eq!(loaded.scene().item(&id).unwrap().name, "Desk");
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("layout.json");

        let mut editor = Editor::default();
        editor.add_item(ItemSpec::new("Desk", 5.0, 5.0));
        let result = save_to_path(&mut editor, &path);
        assert!(matches!(result, Err(StorageError::Io(_))));

        let notices = editor.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, "Failed to save canvas");
    }

    #[test]
    fn test_save_notice_after_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        let mut editor = Editor::default();
        save_to_path(&mut editor, &path).unwrap();
        assert!(path.exists());

        let notices = editor.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Info);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let mut editor = Editor::default();
        let result = load_from_path(&mut editor, &dir.path().join("nope.json"));
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"layout\": ").unwrap();

        let mut editor = Editor::default();
        editor.add_item(ItemSpec::new("Desk", 5.0, 5.0));
        assert!(load_from_path(&mut editor, &path).is_err());
        assert_eq!(editor.scene().items().len(), 1);
    }
}
