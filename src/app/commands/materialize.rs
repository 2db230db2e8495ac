use std::path::{Path, PathBuf};

use tracing::info;

use crate::adapters::template_engine::render_template;
use crate::domain::{AnswerStore, AppError};
use crate::ports::{ProjectStore, TemplateStore};

/// Render `group/<file>` for each file and write it under `destination`.
///
/// Files are written one at a time; a failure leaves earlier files in place.
pub(super) fn materialize<P, T>(
    project: &P,
    templates: &T,
    group: &str,
    destination: &Path,
    files: &[&str],
    context: &AnswerStore,
) -> Result<Vec<PathBuf>, AppError>
where
    P: ProjectStore,
    T: TemplateStore,
{
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let template_name = format!("{}/{}", group, file);
        let source = templates.template(&template_name)?;
        let rendered = render_template(&template_name, source, context)?;

        let path = destination.join(file);
        project.write_file(&path, &rendered)?;
        info!(path = %path.display(), "Wrote file");
        written.push(path);
    }
    Ok(written)
}
