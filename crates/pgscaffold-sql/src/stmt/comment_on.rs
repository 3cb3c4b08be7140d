use super::*;

use pgscaffold_core::schema::{Column, Table};

/// `COMMENT ON TABLE|COLUMN ... IS '...'`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentOn {
    pub target: CommentTarget,

    /// The comment text, unescaped.
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentTarget {
    Table(Name),
    Column(Name),
}

impl Statement {
    /// Returns `None` when the table has no comment.
    pub fn comment_on_table(table: &Table) -> Option<Self> {
        if table.comment.is_empty() {
            return None;
        }

        Some(
            CommentOn {
                target: CommentTarget::Table(Name::table(&table.schema_name, &table.table_name)),
                comment: table.comment.clone(),
            }
            .into(),
        )
    }

    /// Returns `None` when the column has no comment.
    pub fn comment_on_column(table: &Table, column: &Column) -> Option<Self> {
        if column.comment.is_empty() {
            return None;
        }

        Some(
            CommentOn {
                target: CommentTarget::Column(Name::column(
                    &table.schema_name,
                    &table.table_name,
                    &column.column_name,
                )),
                comment: column.comment.clone(),
            }
            .into(),
        )
    }
}

impl From<CommentOn> for Statement {
    fn from(value: CommentOn) -> Self {
        Self::CommentOn(value)
    }
}
