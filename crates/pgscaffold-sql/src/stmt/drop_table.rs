use super::*;

use pgscaffold_core::schema::Table;

/// A statement to drop a SQL table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTable {
    /// Name of the table.
    pub name: Name,

    /// Whether or not to add an `IF EXISTS` clause.
    pub if_exists: bool,

    /// Whether or not to add a `CASCADE` clause.
    pub cascade: bool,
}

impl Statement {
    /// Drops a table and everything that depends on it.
    ///
    /// This function does _not_ add an `IF EXISTS` clause.
    pub fn drop_table(table: &Table) -> Self {
        DropTable {
            name: Name::table(&table.schema_name, &table.table_name),
            if_exists: false,
            cascade: true,
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
