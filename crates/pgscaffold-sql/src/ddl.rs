use crate::{Serializer, Statement};

use pgscaffold_core::{schema::Table, Schema};

/// Renders the DDL that recreates `table`.
///
/// Statements always come in the same order: drop, create, owner, then the
/// table comment and one comment per commented column. A table without
/// columns renders as an empty string.
pub fn table_sql(table: &Table) -> String {
    if table.columns.is_empty() {
        return String::new();
    }

    let serializer = Serializer::new();
    let mut sql = String::from("\n");

    sql += &serializer.serialize(&Statement::drop_table(table));
    sql += "\n\n";
    sql += &serializer.serialize(&Statement::create_table(table));
    sql += "\n\n";
    sql += &serializer.serialize(&Statement::alter_table_owner(table));
    sql += "\n";

    let comments = Statement::comment_on_table(table).into_iter().chain(
        table
            .columns
            .iter()
            .filter_map(|column| Statement::comment_on_column(table, column)),
    );

    for stmt in comments {
        sql += &serializer.serialize(&stmt);
        sql += "\n";
    }

    sql
}

/// Renders the DDL script for a whole schema, tables in discovery order.
pub fn schema_sql(schema: &Schema) -> String {
    schema.tables.iter().map(table_sql).collect()
}
