use include_dir::{Dir, include_dir};

use crate::domain::AppError;
use crate::ports::TemplateStore;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Templates compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn template(&self, name: &str) -> Result<&str, AppError> {
        let file = TEMPLATES_DIR
            .get_file(name)
            .ok_or_else(|| AppError::template_error(name, "not found"))?;
        file.contents_utf8().ok_or_else(|| AppError::template_error(name, "not valid UTF-8"))
    }
}
