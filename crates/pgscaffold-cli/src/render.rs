//! Template rendering for the generated crate.
//!
//! A [`Renderer`] owns a Tera instance holding every template plus the helper
//! functions and filters templates call. It is built once per run from a
//! [`RenderConfig`] and then only read.

mod filters;
mod functions;

use crate::Config;

use anyhow::{Context as _, Result};
use pgscaffold_core::{schema::Table, Schema};
use tera::{Context, Tera};

/// Templates, by the name they are rendered under.
const TEMPLATES: &[(&str, &str)] = &[
    ("cargo.toml", include_str!("../templates/cargo.toml.tera")),
    ("connection.rs", include_str!("../templates/connection.rs.tera")),
    ("entities_mod.rs", include_str!("../templates/entities_mod.rs.tera")),
    ("entity.rs", include_str!("../templates/entity.rs.tera")),
    ("lib.rs", include_str!("../templates/lib.rs.tera")),
    ("readme.md", include_str!("../templates/readme.md.tera")),
    ("repo.rs", include_str!("../templates/repo.rs.tera")),
    ("repos_mod.rs", include_str!("../templates/repos_mod.rs.tera")),
    ("schema.sql", include_str!("../templates/schema.sql.tera")),
];

/// Run-level values exposed to templates as zero-argument functions.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub command_line: String,
    pub env_var: String,
    pub schema_name: String,
    pub crate_name: String,
    pub repo_name: String,
}

impl From<&Config> for RenderConfig {
    fn from(config: &Config) -> Self {
        Self {
            command_line: config.command_line.clone(),
            env_var: config.env_var.clone(),
            schema_name: config.schema.clone(),
            crate_name: config.crate_name(),
            repo_name: config.repo.clone(),
        }
    }
}

#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(TEMPLATES.iter().copied())
            .context("failed to load templates")?;

        filters::register(&mut tera);
        functions::register(&mut tera, &config);

        Ok(Self { tera })
    }

    /// Renders a template that describes the whole schema.
    pub fn render_schema(&self, template: &str, schema: &Schema) -> Result<String> {
        let context = schema_context(schema);
        self.render(template, &context)
    }

    /// Renders a template that describes one table.
    pub fn render_table(&self, template: &str, schema: &Schema, table: &Table) -> Result<String> {
        let mut context = schema_context(schema);
        context.insert("table", table);
        self.render(template, &context)
    }

    fn render(&self, template: &str, context: &Context) -> Result<String> {
        self.tera
            .render(template, context)
            .with_context(|| format!("failed to render template `{template}`"))
    }
}

fn schema_context(schema: &Schema) -> Context {
    let mut context = Context::new();
    context.insert("schema", schema);

    let mut dependencies: Vec<&str> = schema
        .tables
        .iter()
        .flat_map(|table| table.dependencies.iter().map(String::as_str))
        .collect();
    dependencies.sort_unstable();
    dependencies.dedup();
    context.insert("dependencies", &dependencies);

    context
}
