//! The seam between reflection and a live database.
//!
//! A [`Catalog`] answers the five metadata questions reflection asks. Rows are
//! returned exactly as the catalog reports them; interpreting them is the
//! reflector's job. Every implementation must order its results explicitly so
//! reflection is deterministic.

use crate::Result;

use async_trait::async_trait;

/// A base table or view, one per `information_schema.tables` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,

    /// `BASE TABLE` or `VIEW`.
    pub table_type: String,

    /// `YES` or `NO`.
    pub is_insertable_into: String,

    pub comment: Option<String>,
}

/// A column, one per `information_schema.columns` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRow {
    pub position: i32,
    pub name: String,

    /// `YES` or `NO`.
    pub is_nullable: String,

    pub data_type: String,
    pub max_len: Option<i32>,
    pub default: Option<String>,
    pub numeric_precision: Option<i32>,
    pub comment: Option<String>,
}

/// One (constraint, key column) pair. A constraint over several columns
/// arrives as several rows sharing a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintRow {
    pub name: String,
    pub column_name: String,

    /// `PRIMARY KEY`, `FOREIGN KEY` or `UNIQUE`.
    pub constraint_type: String,

    pub ref_table: String,
    pub ref_column: String,
}

/// A physical index owned by a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRow {
    pub name: String,

    /// Space separated 1-based column positions, as in `pg_index.indkey`.
    pub key: String,

    pub is_primary: bool,
    pub is_unique: bool,
}

/// Read-only access to schema metadata.
#[async_trait]
pub trait Catalog {
    /// Checks that the database answers.
    async fn ping(&self) -> Result<()>;

    /// Relations in `schema`, ordered by name. Views are included only when
    /// `include_views` is set.
    async fn tables(&self, schema: &str, include_views: bool) -> Result<Vec<TableRow>>;

    /// Columns of a table, ordered by ordinal position.
    async fn columns(&self, schema: &str, table: &str) -> Result<Vec<ColumnRow>>;

    /// Constraint rows of a table, ordered by constraint name then key position.
    async fn constraints(&self, schema: &str, table: &str) -> Result<Vec<ConstraintRow>>;

    /// Indexes of a table, ordered by name.
    async fn indexes(&self, schema: &str, table: &str) -> Result<Vec<IndexRow>>;
}
