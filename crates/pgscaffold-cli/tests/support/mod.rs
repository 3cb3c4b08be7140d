#![allow(dead_code)]

use pgscaffold_core::{
    schema::{Column, Dependency, Table, VIEW},
    Schema,
};

/// `users(id bigserial pk, email varchar(250) not null, created_at timestamptz null)`
pub fn users() -> Table {
    let mut table = Table::new("public", "users");
    table.comment = "Registered users".to_string();

    let mut id = Column::new(1, "id", "bigint", false)
        .unwrap()
        .default_value(Some("nextval('users_id_seq'::regclass)".to_string()));
    id.is_primary_key = true;
    id.can_filter = true;

    table.columns = vec![
        id,
        Column::new(2, "email", "character varying", false)
            .unwrap()
            .max_len(Some(250))
            .comment("Login address"),
        Column::new(3, "created_at", "timestamp with time zone", true).unwrap(),
    ];
    table.add_dependency(Dependency::Chrono);
    table
}

/// A view over `users`, reflected with `--views`.
pub fn recent_users() -> Table {
    let mut view = Table::new("public", "recent_users");
    view.table_type = VIEW.to_string();
    view.is_updatable = false;
    view.columns = vec![Column::new(1, "email", "character varying", true)
        .unwrap()
        .can_filter(true)];
    view
}

/// One column of every mapped native type category.
pub fn samples() -> Table {
    let mut table = Table::new("public", "samples");

    let mut id = Column::new(1, "id", "integer", false).unwrap();
    id.is_primary_key = true;

    table.columns = vec![
        id,
        Column::new(2, "amount", "numeric", false).unwrap(),
        Column::new(3, "price", "money", true).unwrap(),
        Column::new(4, "score", "double precision", false).unwrap(),
        Column::new(5, "payload", "jsonb", true).unwrap(),
        Column::new(6, "seen_at", "timestamp without time zone", true).unwrap(),
        Column::new(7, "born_on", "date", true).unwrap(),
        Column::new(8, "opens_at", "time without time zone", true).unwrap(),
        Column::new(9, "took", "interval", true).unwrap(),
        Column::new(10, "token", "uuid", false).unwrap(),
        Column::new(11, "body", "bytea", true).unwrap(),
        Column::new(12, "active", "boolean", false).unwrap(),
    ];
    table.add_dependency(Dependency::Chrono);
    table.add_dependency(Dependency::Uuid);
    table
}

/// Column names that are reserved words in SQL.
pub fn order_lines() -> Table {
    let mut table = Table::new("public", "order_lines");

    let mut id = Column::new(1, "id", "bigint", false).unwrap();
    id.is_primary_key = true;

    table.columns = vec![
        id,
        Column::new(2, "order", "bigint", false).unwrap(),
        Column::new(3, "user", "text", false).unwrap(),
    ];
    table
}

pub fn schema(tables: Vec<Table>) -> Schema {
    let mut schema = Schema::new("public");
    schema.tables = tables;
    schema
}
