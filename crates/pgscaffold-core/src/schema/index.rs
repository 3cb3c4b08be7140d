use super::Name;
use crate::{Error, Result};

use serde::{Deserialize, Serialize};

/// A physical index on a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    pub index_name: String,

    #[serde(flatten)]
    pub name: Name,

    /// Raw names of the indexed columns, in key order.
    pub column_names: Vec<String>,

    pub is_primary_key: bool,
    pub is_unique: bool,
}

impl Index {
    pub fn new(index_name: impl Into<String>, is_primary_key: bool, is_unique: bool) -> Self {
        let index_name = index_name.into();

        Index {
            name: Name::new(&index_name),
            index_name,
            column_names: vec![],
            is_primary_key,
            is_unique,
        }
    }

    /// The column whose primary key status is set by this index.
    pub fn leading_column(&self) -> Option<&str> {
        self.column_names.first().map(String::as_str)
    }
}

/// Decodes a native index key (`pg_index.indkey`) into column positions.
///
/// The key is a space separated list of 1-based column positions. A `0`
/// entry stands for an expression rather than a column and is kept so the
/// caller can decide what to do with it.
pub fn parse_index_key(key: &str) -> Result<Vec<i32>> {
    key.split_whitespace()
        .map(|token| {
            token.parse::<i32>().map_err(|_| {
                Error::query_message(format!("malformed index key `{key}`: bad token `{token}`"))
            })
        })
        .collect()
}
