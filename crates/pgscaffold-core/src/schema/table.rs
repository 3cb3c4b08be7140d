use super::{name, ty::Dependency, Column, Constraint, Index, Name};
use crate::{Error, Result};

use serde::{Deserialize, Serialize};

/// A base table or view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub schema_name: String,

    /// The raw table name in the database.
    pub table_name: String,

    #[serde(flatten)]
    pub name: Name,

    pub display_name_plural: String,
    pub slug_name_plural: String,

    pub owner: String,
    pub comment: String,

    /// The native table type, `BASE TABLE` or `VIEW`.
    pub table_type: String,

    /// True when the relation accepts inserts. Updatable tables must have
    /// exactly one primary key column.
    pub is_updatable: bool,

    /// Columns in ordinal position order.
    pub columns: Vec<Column>,

    pub constraints: Vec<Constraint>,
    pub indexes: Vec<Index>,

    /// Crates generated code needs for this table's column types.
    pub dependencies: Vec<String>,
}

pub const BASE_TABLE: &str = "BASE TABLE";
pub const VIEW: &str = "VIEW";

impl Table {
    pub fn new(schema_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        let schema_name = schema_name.into();
        let table_name = table_name.into();
        let name = Name::new(&table_name);

        Table {
            owner: schema_name.clone(),
            schema_name,
            display_name_plural: name::plural(&name.display_name),
            slug_name_plural: name::plural(&name.slug_name),
            name,
            table_name,
            comment: String::new(),
            table_type: BASE_TABLE.to_string(),
            is_updatable: true,
            columns: vec![],
            constraints: vec![],
            indexes: vec![],
            dependencies: vec![],
        }
    }

    /// `schema.table`, used in messages.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema_name, self.table_name)
    }

    pub fn is_view(&self) -> bool {
        self.table_type.eq_ignore_ascii_case(VIEW)
    }

    pub fn column_at(&self, position: i32) -> Option<&Column> {
        self.columns.iter().find(|c| c.position == position)
    }

    pub fn column_named_mut(&mut self, column_name: &str) -> Option<&mut Column> {
        self.columns
            .iter_mut()
            .find(|c| c.column_name == column_name)
    }

    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|c| c.is_primary_key)
    }

    /// Columns that are not part of the primary key, in ordinal order.
    pub fn data_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|c| !c.is_primary_key)
    }

    /// Returns the single primary key column.
    ///
    /// Errors when the table has no primary key column or more than one.
    pub fn primary_key(&self) -> Result<&Column> {
        let mut columns = self.primary_key_columns();

        match (columns.next(), columns.next()) {
            (Some(column), None) => Ok(column),
            (None, _) => Err(Error::invalid_schema(format!(
                "{} has no primary key",
                self.qualified_name()
            ))),
            (Some(_), Some(_)) => Err(Error::invalid_schema(format!(
                "{} has more than one primary key column",
                self.qualified_name()
            ))),
        }
    }

    /// Records a required crate once.
    pub fn add_dependency(&mut self, dependency: Dependency) {
        let crate_name = dependency.crate_name();
        if !self.dependencies.iter().any(|d| d == crate_name) {
            self.dependencies.push(crate_name.to_string());
        }
    }

    /// Marks the primary key from index metadata.
    ///
    /// The leading column of a primary key index becomes the primary key.
    /// The leading column of every index becomes filterable.
    pub(crate) fn apply_index(&mut self, index: &Index) {
        let Some(leading) = index.leading_column() else {
            return;
        };

        if let Some(column) = self.column_named_mut(leading) {
            if index.is_primary_key {
                column.is_primary_key = true;
            }
            column.can_filter = true;
        }
    }
}
