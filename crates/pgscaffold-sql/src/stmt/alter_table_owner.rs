use super::*;

use pgscaffold_core::schema::Table;

/// `ALTER TABLE ... OWNER TO ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterTableOwner {
    pub name: Name,
    pub owner: String,
}

impl Statement {
    pub fn alter_table_owner(table: &Table) -> Self {
        AlterTableOwner {
            name: Name::table(&table.schema_name, &table.table_name),
            owner: table.owner.clone(),
        }
        .into()
    }
}

impl From<AlterTableOwner> for Statement {
    fn from(value: AlterTableOwner) -> Self {
        Self::AlterTableOwner(value)
    }
}
