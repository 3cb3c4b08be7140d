use super::{ty, Name, Type};
use crate::Result;

use serde::{Deserialize, Serialize};

/// A table column, as reflected from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// 1-based catalog ordinal position. Defines the order of every column
    /// and placeholder list generated for the table.
    pub position: i32,

    /// The raw column name in the database.
    pub column_name: String,

    #[serde(flatten)]
    pub name: Name,

    pub comment: String,

    /// Only authoritative once index metadata has been applied to the table.
    pub is_primary_key: bool,

    pub is_nullable: bool,

    /// True for integer types; a cardinal primary key is rendered with an
    /// identity type and no default.
    pub is_cardinal: bool,

    pub has_max_len: bool,
    pub has_default: bool,
    pub has_precision: bool,

    /// True when generated code may filter or sort on the column.
    pub can_filter: bool,

    /// The native PostgreSQL type name, e.g. `character varying`.
    pub sql_type: String,

    /// The Rust type, already wrapped for nullability.
    pub data_type: Type,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_len: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_default: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_precision: Option<i32>,
}

impl Column {
    /// Creates a column from its native description.
    ///
    /// The primary key flag starts out false, and `can_filter` starts out true
    /// only for columns of a view.
    pub fn new(
        position: i32,
        column_name: impl Into<String>,
        sql_type: impl Into<String>,
        nullable: bool,
    ) -> Result<Column> {
        let column_name = column_name.into();
        let sql_type = sql_type.into();
        let data_type = Type::from_native_nullable(&sql_type, nullable)?;

        Ok(Column {
            position,
            name: Name::new(&column_name),
            column_name,
            comment: String::new(),
            is_primary_key: false,
            is_nullable: nullable,
            is_cardinal: ty::is_cardinal(&sql_type),
            has_max_len: false,
            has_default: false,
            has_precision: false,
            can_filter: false,
            sql_type,
            data_type,
            max_len: None,
            column_default: None,
            numeric_precision: None,
        })
    }

    pub fn max_len(mut self, max_len: Option<i32>) -> Self {
        self.has_max_len = max_len.is_some();
        self.max_len = max_len;
        self
    }

    pub fn default_value(mut self, default: Option<String>) -> Self {
        self.has_default = default.is_some();
        self.column_default = default;
        self
    }

    pub fn numeric_precision(mut self, precision: Option<i32>) -> Self {
        self.has_precision = precision.is_some();
        self.numeric_precision = precision;
        self
    }

    pub fn comment(mut self, comment: impl AsRef<str>) -> Self {
        self.comment = comment.as_ref().trim().to_string();
        self
    }

    pub fn can_filter(mut self, can_filter: bool) -> Self {
        self.can_filter = can_filter;
        self
    }

    /// The Rust field name for this column in generated code.
    pub fn field_name(&self) -> String {
        self.name.field_name()
    }
}
