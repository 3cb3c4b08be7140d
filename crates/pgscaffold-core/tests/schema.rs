use pgscaffold_core::{
    schema::{Column, Table, VIEW},
    Schema,
};
use pretty_assertions::assert_eq;

fn users() -> Table {
    let mut table = Table::new("public", "users");

    let mut id = Column::new(1, "id", "bigint", false).unwrap();
    id.is_primary_key = true;
    id.can_filter = true;

    table.columns = vec![
        id,
        Column::new(2, "email", "character varying", false)
            .unwrap()
            .max_len(Some(250)),
        Column::new(3, "created_at", "timestamp with time zone", true).unwrap(),
    ];
    table
}

#[test]
fn empty_schema_fails_verification() {
    let schema = Schema::new("public");
    let err = schema.verify().unwrap_err();

    assert!(err.is_empty_schema());
    assert_eq!(err.to_string(), "no tables were found in schema `public`");
}

#[test]
fn updatable_table_needs_a_primary_key() {
    let mut table = users();
    table.columns[0].is_primary_key = false;

    let mut schema = Schema::new("public");
    schema.tables.push(table);

    let err = schema.verify().unwrap_err();
    assert!(err.is_invalid_schema());
    assert_eq!(err.to_string(), "invalid schema: public.users has no primary key");
}

#[test]
fn updatable_table_rejects_composite_primary_key() {
    let mut table = users();
    table.columns[1].is_primary_key = true;

    let mut schema = Schema::new("public");
    schema.tables.push(table);

    let err = schema.verify().unwrap_err();
    assert!(err.is_invalid_schema());
    assert!(err.to_string().ends_with("has more than one primary key column"));
}

#[test]
fn non_updatable_relations_are_exempt() {
    let mut view = Table::new("public", "recent_users");
    view.table_type = VIEW.to_string();
    view.is_updatable = false;
    view.columns = vec![Column::new(1, "email", "text", true).unwrap()];

    let mut schema = Schema::new("public");
    schema.tables.push(users());
    schema.tables.push(view);

    assert!(schema.verify().is_ok());
}

#[test]
fn table_names_and_plurals() {
    let table = Table::new("sales", "order_item");

    assert_eq!(table.name.code_name, "OrderItem");
    assert_eq!(table.name.display_name, "Order Item");
    assert_eq!(table.display_name_plural, "Order Items");
    assert_eq!(table.slug_name_plural, "order-items");
    assert_eq!(table.owner, "sales");
    assert_eq!(table.qualified_name(), "sales.order_item");
    assert!(table.is_updatable);
    assert!(!table.is_view());
}

#[test]
fn data_columns_skip_the_primary_key() {
    let table = users();
    let names: Vec<_> = table.data_columns().map(|c| c.column_name.as_str()).collect();
    assert_eq!(names, ["email", "created_at"]);
}

#[test]
fn json_dump_uses_camel_case_keys() {
    let mut schema = Schema::new("public");
    schema.tables.push(users());

    let json = schema.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["schemaName"], "public");
    assert_eq!(value["codeName"], "Public");

    let table = &value["tables"][0];
    assert_eq!(table["tableName"], "users");
    assert_eq!(table["slugNamePlural"], "users");
    assert_eq!(table["isUpdatable"], true);

    let email = &table["columns"][1];
    assert_eq!(email["columnName"], "email");
    assert_eq!(email["jsonName"], "email");
    assert_eq!(email["maxLen"], 250);
    assert_eq!(email["dataType"], "String");
    assert!(email.get("columnDefault").is_none());

    let created_at = &table["columns"][2];
    assert_eq!(created_at["dataType"], "Option<DateTime<Utc>>");
}

#[test]
fn json_dump_reloads() {
    let mut schema = Schema::new("public");
    schema.tables.push(users());

    let json = schema.to_json().unwrap();
    let reloaded = Schema::from_json(&json).unwrap();

    assert_eq!(schema, reloaded);
    assert!(reloaded.verify().is_ok());
}
