use super::*;

use pgscaffold_core::schema::Table;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// Whether or not to add an `IF NOT EXISTS` clause.
    pub if_not_exists: bool,

    /// Column definitions, in ordinal order
    pub columns: Vec<ColumnDef>,

    /// Constraint clauses, in reflected order
    pub constraints: Vec<ConstraintDef>,
}

impl Statement {
    pub fn create_table(table: &Table) -> Self {
        CreateTable {
            name: Name::table(&table.schema_name, &table.table_name),
            if_not_exists: true,
            columns: table.columns.iter().map(ColumnDef::from_schema).collect(),
            constraints: table
                .constraints
                .iter()
                .map(|constraint| ConstraintDef::from_schema(table, constraint))
                .collect(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
