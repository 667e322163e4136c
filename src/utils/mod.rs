pub mod paths;

use axum::response::Html;
use tera::{Context, Tera};

use crate::data::models::EntryError;

pub fn render_template(
    tera: &Tera,
    template_name: &str,
    context: Context,
) -> Result<Html<String>, EntryError> {
    Ok(Html(tera.render(template_name, &context)?))
}
