mod config;
pub use config::Config;

mod generate;
pub use generate::Generator;

mod render;
pub use render::{RenderConfig, Renderer};

mod utility;
pub use utility::redact_password;

use anyhow::{Context as _, Result};
use clap::Parser;
use console::style;
use pgscaffold_core::{Catalog, ReflectOptions, Reflector, Schema};
use pgscaffold_driver_postgresql::PostgreSQL;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate a Rust data-access crate from a PostgreSQL schema
#[derive(Parser, Debug)]
#[command(name = "pgscaffold")]
#[command(version)]
pub struct Cli {
    /// Clear and overwrite an existing destination folder
    #[arg(short = 'w', long)]
    overwrite: bool,

    /// Environment variable holding the connection string
    #[arg(long, value_name = "VAR", default_value = "DB_CONNSTR")]
    env: String,

    /// Database schema to reflect
    #[arg(long, default_value = "public")]
    schema: String,

    /// Parent folder for the generated crate
    #[arg(long, value_name = "PATH")]
    folder: PathBuf,

    /// Name of the generated crate and its folder
    #[arg(long, value_name = "NAME")]
    repo: String,

    /// Role used in `OWNER TO` clauses (defaults to the schema name)
    #[arg(long, value_name = "ROLE")]
    owner: Option<String>,

    /// Also reflect views
    #[arg(long)]
    views: bool,

    /// Load the schema from a previous dump.json instead of the database
    #[arg(long, value_name = "FILE")]
    from_dump: Option<PathBuf>,

    /// Run rustfmt over the generated sources
    #[arg(long)]
    fmt: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Builds the run configuration. `command_line` is recorded in generated
    /// files.
    pub fn config(&self, command_line: impl Into<String>) -> Config {
        Config::new()
            .schema(&self.schema)
            .folder(&self.folder)
            .repo(&self.repo)
            .env_var(&self.env)
            .owner(self.owner.clone())
            .overwrite(self.overwrite)
            .include_views(self.views)
            .from_dump(self.from_dump.clone())
            .format(self.fmt)
            .command_line(command_line)
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,pgscaffold_core=debug,pgscaffold_driver_postgresql=debug,pgscaffold_cli=debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reflects (or reloads) the schema and writes the generated crate.
pub async fn run(config: &Config) -> Result<()> {
    println!();
    println!("  {}", style("pgscaffold").cyan().bold().underlined());
    println!();
    println!("  {} {}", style("schema:").dim(), config.schema);
    println!("  {} {}", style("output:").dim(), config.output_dir().display());

    let schema = match &config.from_dump {
        Some(path) => load_dump(config, path)?,
        None => reflect(config).await?,
    };

    info!(tables = schema.tables.len(), "schema ready");

    let generator = Generator::new(config, &schema)?;
    let written = generator.generate()?;

    println!();
    println!(
        "  {}",
        style(format!(
            "Generated {} files for {} tables",
            written.len(),
            schema.tables.len()
        ))
        .green()
        .bold()
    );
    println!();

    Ok(())
}

async fn reflect(config: &Config) -> Result<Schema> {
    let conn_str = config.connection_string()?;
    println!(
        "  {} {}",
        style("database:").dim(),
        redact_password(&conn_str)
    );
    println!();

    let db = PostgreSQL::connect(&conn_str).await?;
    db.ping().await?;

    let options = ReflectOptions::new()
        .include_views(config.include_views)
        .owner(config.owner.clone());

    let schema = Reflector::new(&db, options).reflect(&config.schema).await?;

    println!(
        "  {} {}",
        style("✓").green().bold(),
        style(format!("Reflected {} tables", schema.tables.len())).dim()
    );

    Ok(schema)
}

fn load_dump(config: &Config, path: &Path) -> Result<Schema> {
    println!("  {} {}", style("dump:").dim(), path.display());
    println!();

    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut schema = Schema::from_json(&json)
        .with_context(|| format!("{} is not a schema dump", path.display()))?;

    if let Some(owner) = &config.owner {
        schema.owner = owner.clone();
        for table in &mut schema.tables {
            table.owner = owner.clone();
        }
    }

    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["pgscaffold", "--folder", "out", "--repo", "Shop"]).unwrap();
        let config = cli.config("pgscaffold --folder out --repo Shop");

        assert_eq!(config.schema, "public");
        assert_eq!(config.env_var, "DB_CONNSTR");
        assert_eq!(config.repo, "shop");
        assert_eq!(config.owner, None);
        assert!(!config.overwrite);
        assert!(!config.include_views);
        assert!(!config.format);
        assert!(!cli.verbose());
    }

    #[test]
    fn every_flag() {
        let cli = Cli::try_parse_from([
            "pgscaffold",
            "-w",
            "--env",
            "SHOP_DB",
            "--schema",
            "sales",
            "--folder",
            "out",
            "--repo",
            "shop",
            "--owner",
            "app",
            "--views",
            "--from-dump",
            "dump.json",
            "--fmt",
            "-v",
        ])
        .unwrap();
        let config = cli.config("pgscaffold");

        assert!(config.overwrite);
        assert_eq!(config.env_var, "SHOP_DB");
        assert_eq!(config.schema, "sales");
        assert_eq!(config.owner.as_deref(), Some("app"));
        assert!(config.include_views);
        assert_eq!(config.from_dump, Some(PathBuf::from("dump.json")));
        assert!(config.format);
        assert!(cli.verbose());
    }

    #[test]
    fn folder_and_repo_are_required() {
        assert!(Cli::try_parse_from(["pgscaffold", "--repo", "shop"]).is_err());
        assert!(Cli::try_parse_from(["pgscaffold", "--folder", "out"]).is_err());
    }
}
