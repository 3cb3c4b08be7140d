use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Schema to reflect
    pub schema: String,

    /// Parent folder of the generated crate
    pub folder: PathBuf,

    /// Name of the generated crate, also its folder name
    pub repo: String,

    /// Environment variable holding the connection string
    pub env_var: String,

    /// Role written to `OWNER TO` clauses. Defaults to the schema name.
    pub owner: Option<String>,

    /// Clear an existing output folder instead of refusing to run
    pub overwrite: bool,

    /// Also reflect views
    pub include_views: bool,

    /// Load the schema from a previous dump instead of the database
    pub from_dump: Option<PathBuf>,

    /// Run `rustfmt` over the generated sources
    pub format: bool,

    /// The invocation, recorded in generated files
    pub command_line: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: "public".to_string(),
            folder: PathBuf::from("."),
            repo: "repo".to_string(),
            env_var: "DB_CONNSTR".to_string(),
            owner: None,
            overwrite: false,
            include_views: false,
            from_dump: None,
            format: false,
            command_line: "pgscaffold".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.folder = folder.into();
        self
    }

    /// Set the crate name. It is lower-cased.
    pub fn repo(mut self, repo: impl AsRef<str>) -> Self {
        self.repo = repo.as_ref().trim().to_lowercase();
        self
    }

    pub fn env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = env_var.into();
        self
    }

    pub fn owner(mut self, owner: Option<String>) -> Self {
        self.owner = owner;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn include_views(mut self, include_views: bool) -> Self {
        self.include_views = include_views;
        self
    }

    pub fn from_dump(mut self, path: Option<PathBuf>) -> Self {
        self.from_dump = path;
        self
    }

    pub fn format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }

    pub fn command_line(mut self, command_line: impl Into<String>) -> Self {
        self.command_line = command_line.into();
        self
    }

    /// The folder the generated crate is written to.
    pub fn output_dir(&self) -> PathBuf {
        self.folder.join(&self.repo)
    }

    /// The crate name as a Rust path segment.
    pub fn crate_name(&self) -> String {
        self.repo.replace('-', "_")
    }

    /// Reads the connection string from the configured environment variable.
    pub fn connection_string(&self) -> Result<String> {
        std::env::var(&self.env_var).with_context(|| {
            format!(
                "environment variable `{}` must hold the database connection string",
                self.env_var
            )
        })
    }

    /// Path of the IR dump inside the output folder.
    pub fn dump_path(&self) -> PathBuf {
        self.output_dir().join(DUMP_FILE)
    }

    pub(crate) fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(self.folder.as_path()).unwrap_or(path)
    }
}

pub(crate) const DUMP_FILE: &str = "dump.json";
