use super::{Name, Table};
use crate::{Error, Result};

use serde::{Deserialize, Serialize};

/// The root of the reflected IR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub schema_name: String,

    #[serde(flatten)]
    pub name: Name,

    pub owner: String,

    /// Tables in discovery order (by name).
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn new(schema_name: impl Into<String>) -> Self {
        let schema_name = schema_name.into();

        Schema {
            name: Name::new(&schema_name),
            owner: schema_name.clone(),
            schema_name,
            tables: vec![],
        }
    }

    pub fn table(&self, table_name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.table_name == table_name)
    }

    /// Checks the invariants artifact generation depends on.
    ///
    /// The schema must contain at least one table, and every updatable table
    /// must have exactly one primary key column.
    pub fn verify(&self) -> Result<()> {
        if self.tables.is_empty() {
            return Err(Error::empty_schema(&self.schema_name));
        }

        for table in self.tables.iter().filter(|t| t.is_updatable) {
            table.primary_key()?;
        }

        Ok(())
    }

    /// Serializes the IR as indented JSON, keys in declaration order.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Schema> {
        Ok(serde_json::from_str(json)?)
    }
}
