use super::Name;

use serde::{Deserialize, Serialize};

/// A named table constraint, folded from one catalog row per participating
/// column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraint {
    pub constraint_name: String,

    #[serde(flatten)]
    pub name: Name,

    pub is_primary_key: bool,
    pub is_foreign_key: bool,
    pub is_unique_key: bool,

    /// Raw names of the participating columns, in key order, without duplicates.
    pub column_names: Vec<String>,

    /// The native constraint type label, e.g. `PRIMARY KEY`.
    pub constraint_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_table: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_column: Option<String>,
}

impl Constraint {
    pub fn new(constraint_name: impl Into<String>, constraint_type: impl Into<String>) -> Self {
        let constraint_name = constraint_name.into();
        let constraint_type = constraint_type.into();
        let kind = constraint_type.to_ascii_lowercase();

        Constraint {
            name: Name::new(&constraint_name),
            constraint_name,
            is_primary_key: kind == "primary key",
            is_foreign_key: kind == "foreign key",
            is_unique_key: kind == "unique",
            column_names: vec![],
            constraint_type,
            foreign_table: None,
            foreign_column: None,
        }
    }

    /// Sets the referenced table and column. Ignored unless this is a foreign key.
    pub fn references(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        if self.is_foreign_key {
            self.foreign_table = Some(table.into());
            self.foreign_column = Some(column.into());
        }
        self
    }

    /// Appends a participating column unless it is already listed.
    ///
    /// The catalog join yields one row per (key column, referenced column)
    /// pair, so composite keys repeat column names.
    pub fn push_column(&mut self, column_name: &str) -> bool {
        if self.column_names.iter().any(|c| c == column_name) {
            return false;
        }
        self.column_names.push(column_name.to_string());
        true
    }
}
