use minijinja::{AutoEscape, Environment, Value};
use serde::Serialize;

use crate::domain::AppError;

/// Escaping applied to a template, chosen by file extension.
fn auto_escape_for(name: &str) -> AutoEscape {
    match name.rsplit('.').next() {
        Some("html") => AutoEscape::Html,
        Some("json" | "js") => AutoEscape::Json,
        _ => AutoEscape::None,
    }
}

/// Render the template `source` registered as `template_name`.
pub fn render_template<S: Serialize>(
    template_name: &str,
    source: &str,
    context: &S,
) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(auto_escape_for);

    env.add_template(template_name, source).map_err(|e| {
        AppError::template_error(template_name, format!("failed to register: {}", e))
    })?;

    let template = env
        .get_template(template_name)
        .map_err(|e| AppError::template_error(template_name, format!("failed to load: {}", e)))?;

    template
        .render(Value::from_serialize(context))
        .map_err(|e| AppError::template_error(template_name, format!("failed to render: {}", e)))
}
