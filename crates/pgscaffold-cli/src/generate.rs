use crate::{
    config::DUMP_FILE,
    render::{RenderConfig, Renderer},
    Config,
};

use anyhow::{bail, Context as _, Result};
use console::style;
use pgscaffold_core::{schema::name, Schema};
use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};
use tracing::{debug, warn};

/// Writes the generated crate for a reflected schema.
#[derive(Debug)]
pub struct Generator<'a> {
    config: &'a Config,
    schema: &'a Schema,
    renderer: Renderer,
}

impl<'a> Generator<'a> {
    /// Checks the schema and prepares the renderer. Nothing is written yet.
    ///
    /// Fails when the schema has no tables or an updatable table does not
    /// have exactly one primary key column.
    pub fn new(config: &'a Config, schema: &'a Schema) -> Result<Self> {
        schema.verify()?;

        let renderer = Renderer::new(RenderConfig::from(config))?;

        Ok(Self {
            config,
            schema,
            renderer,
        })
    }

    /// Writes every artifact, in a fixed order.
    ///
    /// Every artifact is rendered before the output folder is touched, so a
    /// failure leaves any previous output in place. Returns the paths
    /// written, in the order they were written.
    pub fn generate(&self) -> Result<Vec<PathBuf>> {
        let root = self.config.output_dir();
        if root.exists() && !self.config.overwrite {
            bail!(
                "{} already exists; pass --overwrite to replace it",
                root.display()
            );
        }

        let artifacts = self.render()?;
        self.prepare(&root)?;

        let mut written = vec![];
        for (path, content) in &artifacts {
            self.write(path, content)?;
            written.push(path.clone());
        }

        if self.config.format {
            self.format(&written);
        }

        Ok(written)
    }

    /// Renders every artifact in memory, in write order, without touching
    /// the file system.
    pub fn render(&self) -> Result<Vec<(PathBuf, String)>> {
        let root = self.config.output_dir();
        let src = root.join("src");
        let entities = src.join("entities");
        let repos = src.join("repos");

        let mut artifacts = vec![(root.join(DUMP_FILE), self.schema.to_json()?)];

        for table in &self.schema.tables {
            artifacts.push((
                entities.join(module_file(&table.name.snake_name)),
                self.renderer.render_table("entity.rs", self.schema, table)?,
            ));
        }
        artifacts.push(self.render_schema(entities.join("mod.rs"), "entities_mod.rs")?);
        artifacts.push(self.render_schema(src.join("connection.rs"), "connection.rs")?);

        for table in &self.schema.tables {
            artifacts.push((
                repos.join(module_file(&table.name.snake_name)),
                self.renderer.render_table("repo.rs", self.schema, table)?,
            ));
        }
        artifacts.push(self.render_schema(repos.join("mod.rs"), "repos_mod.rs")?);

        artifacts.push(self.render_schema(src.join("lib.rs"), "lib.rs")?);
        artifacts.push(self.render_schema(root.join("Cargo.toml"), "cargo.toml")?);
        artifacts.push(self.render_schema(root.join("README.md"), "readme.md")?);
        artifacts.push(self.render_schema(root.join("postgres.sql"), "schema.sql")?);

        Ok(artifacts)
    }

    /// Creates the output folders, clearing an existing output folder first
    /// when overwriting is allowed.
    fn prepare(&self, root: &Path) -> Result<()> {
        if root.exists() {
            debug!(path = %root.display(), "clearing output folder");
            fs::remove_dir_all(root)
                .with_context(|| format!("failed to clear {}", root.display()))?;
        }

        for dir in [
            root.to_path_buf(),
            root.join("src").join("entities"),
            root.join("src").join("repos"),
        ] {
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        println!(
            "  {} {}",
            style("✓").green().bold(),
            style(format!("Prepared {}", root.display())).dim()
        );

        Ok(())
    }

    fn render_schema(&self, path: PathBuf, template: &str) -> Result<(PathBuf, String)> {
        let content = self.renderer.render_schema(template, self.schema)?;
        Ok((path, content))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;

        println!(
            "  {} {}",
            style("✓").green().bold(),
            style(format!("Wrote {}", self.config.relative(path).display())).dim()
        );

        Ok(())
    }

    /// Runs `rustfmt` over the generated Rust sources. A missing or failing
    /// `rustfmt` only produces a warning; the files are already written.
    fn format(&self, written: &[PathBuf]) {
        let sources: Vec<_> = written
            .iter()
            .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
            .collect();

        match Command::new("rustfmt")
            .args(["--edition", "2021"])
            .args(&sources)
            .status()
        {
            Ok(status) if status.success() => println!(
                "  {} {}",
                style("✓").green().bold(),
                style("Formatted generated sources").dim()
            ),
            Ok(status) => warn!(%status, "rustfmt failed"),
            Err(e) => warn!(error = %e, "could not run rustfmt"),
        }
    }
}

/// File name of a generated module. Keywords are escaped the same way the
/// `mod` declarations escape them, so `r#type` lives in `type.rs`.
fn module_file(snake_name: &str) -> String {
    let module = name::field_name(snake_name);
    format!("{}.rs", module.trim_start_matches("r#"))
}
