//! In-memory `ProjectStore` for unit tests.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

use crate::domain::collection::COLLECTION_MARKER_FILE;
use crate::domain::fragment::SOURCE_DIR;
use crate::domain::{AppError, MarkerFile};
use crate::ports::ProjectStore;

#[derive(Debug)]
pub struct MemoryProjectStore {
    files: Mutex<BTreeMap<PathBuf, String>>,
    writes: Mutex<Vec<PathBuf>>,
    fail_scan: bool,
    fail_write_on: Option<PathBuf>,
}

impl Default for MemoryProjectStore {
    fn default() -> Self {
        Self {
            files: Mutex::new(BTreeMap::new()),
            writes: Mutex::new(Vec::new()),
            fail_scan: false,
            fail_write_on: None,
        }
    }
}

#[allow(dead_code)]
impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.lock().unwrap().insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_collection(self, slug: &str, name: &str) -> Self {
        let path = format!("{}/{}/{}", SOURCE_DIR, slug, COLLECTION_MARKER_FILE);
        self.with_file(&path, &format!("{{\"name\":\"{}\"}}", name))
    }

    /// Make every marker scan fail.
    pub fn failing_scan(mut self) -> Self {
        self.fail_scan = true;
        self
    }

    /// Make writing `path` fail with a permission error.
    pub fn failing_write_on(mut self, path: &str) -> Self {
        self.fail_write_on = Some(PathBuf::from(path));
        self
    }

    /// Paths written so far, in order.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.lock().unwrap().clone()
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }
}

fn marker_dir_name(path: &Path) -> Option<String> {
    let parts: Vec<Component<'_>> = path.components().collect();
    match parts.as_slice() {
        [Component::Normal(src), Component::Normal(dir), Component::Normal(file)]
            if *src == SOURCE_DIR
                && *file == COLLECTION_MARKER_FILE
                && !dir.to_string_lossy().starts_with('.') =>
        {
            Some(dir.to_string_lossy().to_string())
        }
        _ => None,
    }
}

impl ProjectStore for MemoryProjectStore {
    fn collection_markers(&self) -> Result<Vec<MarkerFile>, AppError> {
        if self.fail_scan {
            return Err(AppError::from(std::io::Error::other("scan failed")));
        }
        let files = self.files.lock().unwrap();
        Ok(files
            .iter()
            .filter_map(|(path, content)| {
                marker_dir_name(path)
                    .map(|dir_name| MarkerFile { dir_name, content: content.clone() })
            })
            .collect())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.fail_write_on.as_deref() == Some(path) {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Mock write denied",
            )));
        }
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        self.writes.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}
