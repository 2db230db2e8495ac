use std::path::Path;

use crate::domain::{AppError, MarkerFile};

/// Port for reading and writing the project tree.
///
/// All paths are relative to the project root.
pub trait ProjectStore {
    /// Read every `src/*/collection.json` marker in scan order, skipping
    /// hidden directories.
    fn collection_markers(&self) -> Result<Vec<MarkerFile>, AppError>;

    fn file_exists(&self, path: &Path) -> bool;

    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Write `content`, creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
