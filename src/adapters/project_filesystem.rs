use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::collection::COLLECTION_MARKER_FILE;
use crate::domain::fragment::SOURCE_DIR;
use crate::domain::{AppError, MarkerFile};
use crate::ports::ProjectStore;

/// Filesystem-based project store implementation.
#[derive(Debug, Clone)]
pub struct ProjectFilesystem {
    root: PathBuf,
}

impl ProjectFilesystem {
    /// Create a project store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn marker_pattern(&self) -> Result<String, AppError> {
        let root = self.root.to_str().ok_or_else(|| {
            AppError::config_error(format!(
                "Project path contains invalid unicode: {}",
                self.root.display()
            ))
        })?;
        Ok(format!(
            "{}/{}/*/{}",
            glob::Pattern::escape(root),
            SOURCE_DIR,
            COLLECTION_MARKER_FILE
        ))
    }
}

impl ProjectStore for ProjectFilesystem {
    fn collection_markers(&self) -> Result<Vec<MarkerFile>, AppError> {
        let pattern = self.marker_pattern()?;
        let options = glob::MatchOptions { require_literal_leading_dot: true, ..Default::default() };
        let paths = glob::glob_with(&pattern, options)
            .map_err(|e| AppError::config_error(format!("Invalid glob '{}': {}", pattern, e)))?;

        let mut markers = Vec::new();
        for entry in paths {
            let path = entry.map_err(|e| AppError::Io(e.into_error()))?;
            let dir_name = path
                .parent()
                .and_then(Path::file_name)
                .map(|name| name.to_string_lossy().to_string())
                .ok_or_else(|| {
                    AppError::config_error(format!(
                        "Marker without parent directory: {}",
                        path.display()
                    ))
                })?;
            let content = fs::read_to_string(&path)?;
            markers.push(MarkerFile { dir_name, content });
        }

        Ok(markers)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.root.join(path).exists()
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.root.join(path))?)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full = self.root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full, content)?;
        Ok(())
    }
}
