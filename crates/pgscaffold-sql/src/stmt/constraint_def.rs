use super::Name;

use pgscaffold_core::schema::{Constraint, Table};

/// One `CONSTRAINT` clause of a `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintDef {
    pub name: String,

    /// The native constraint label, e.g. `PRIMARY KEY`.
    pub constraint_type: String,

    /// Participating columns, in key order.
    pub columns: Vec<String>,

    /// Set for foreign keys only.
    pub references: Option<References>,
}

/// The target of a foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct References {
    pub table: Name,
    pub column: String,
}

impl ConstraintDef {
    /// Builds the clause for a reflected constraint. Foreign tables are
    /// resolved in the owning table's schema.
    pub fn from_schema(table: &Table, constraint: &Constraint) -> ConstraintDef {
        let references = match (&constraint.foreign_table, &constraint.foreign_column) {
            (Some(foreign_table), Some(foreign_column)) if constraint.is_foreign_key => {
                Some(References {
                    table: Name::table(&table.schema_name, foreign_table),
                    column: foreign_column.clone(),
                })
            }
            _ => None,
        };

        ConstraintDef {
            name: constraint.constraint_name.clone(),
            constraint_type: constraint.constraint_type.to_ascii_uppercase(),
            columns: constraint.column_names.clone(),
            references,
        }
    }
}
