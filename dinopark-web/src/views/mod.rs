// View rendering: the Renderer seam and its minijinja implementation
use minijinja::value::{Kwargs, Value as TemplateValue};
use minijinja::{Environment, ErrorKind};
use serde_json::Value;
use thiserror::Error;

use crate::routes;

pub const DINOSAUR_INDEX: &str = "dinosaurs/index.html";
pub const DINOSAUR_SHOW: &str = "dinosaurs/show.html";

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    (DINOSAUR_INDEX, include_str!("../../templates/dinosaurs/index.html")),
    (DINOSAUR_SHOW, include_str!("../../templates/dinosaurs/show.html")),
];

#[derive(Debug, Error)]
#[error("failed to render `{template}`: {source}")]
pub struct RenderError {
    pub template: String,
    #[source]
    pub source: minijinja::Error,
}

/// Produces a document from a template name and a mapping of bindings.
pub trait Renderer: Send + Sync {
    fn render(&self, template: &str, bindings: &Value) -> Result<String, RenderError>;
}

/// Renderer over the templates compiled into the binary.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        env.add_function("path", path);
        Ok(Self { env })
    }
}

impl Renderer for TemplateRenderer {
    fn render(&self, template: &str, bindings: &Value) -> Result<String, RenderError> {
        let wrap = |source| RenderError {
            template: template.to_string(),
            source,
        };
        let tmpl = self.env.get_template(template).map_err(wrap)?;
        tmpl.render(bindings).map_err(wrap)
    }
}

/// `path(route_name, id=...)` template function for named routes.
/// Generated URLs are marked safe so auto-escaping leaves the slashes alone.
fn path(name: String, kwargs: Kwargs) -> Result<TemplateValue, minijinja::Error> {
    let id: Option<i64> = kwargs.get("id")?;
    kwargs.assert_all_used()?;
    routes::url_for(&name, id)
        .map(TemplateValue::from_safe_string)
        .ok_or_else(|| {
            minijinja::Error::new(
                ErrorKind::InvalidOperation,
                format!("unknown route `{name}` or missing parameter"),
            )
        })
}
