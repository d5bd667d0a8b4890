use std::path::Path;

use minijinja::{Environment, path_loader};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Template collaborator: a view name plus named parameters in, an HTML
/// document out. Views resolve to `<name>.html` under the views directory.
#[derive(Clone)]
pub struct ViewRenderer {
    env: Environment<'static>,
}

impl ViewRenderer {
    pub fn new(views_dir: impl AsRef<Path>) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(views_dir));
        Self { env }
    }

    pub fn render(&self, view: &str, ctx: impl Serialize) -> Result<String, RenderError> {
        let template = self.env.get_template(&format!("{}.html", view))?;
        Ok(template.render(ctx)?)
    }
}
