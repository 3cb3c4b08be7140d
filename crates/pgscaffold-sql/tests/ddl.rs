use pgscaffold_core::{
    schema::{Column, Constraint, Table},
    Schema,
};
use pgscaffold_sql::{
    schema_sql,
    stmt::{DropTable, Name},
    table_sql, Serializer, Statement,
};
use pretty_assertions::assert_eq;

fn users() -> Table {
    let mut table = Table::new("public", "users");
    table.comment = "Registered users".to_string();

    let mut id = Column::new(1, "id", "bigint", false)
        .unwrap()
        .default_value(Some("nextval('users_id_seq'::regclass)".to_string()));
    id.is_primary_key = true;

    table.columns = vec![
        id,
        Column::new(2, "email", "character varying", false)
            .unwrap()
            .max_len(Some(250))
            .comment("Login address, e.g. 'jo@example.com'"),
        Column::new(3, "created_at", "timestamp with time zone", true)
            .unwrap()
            .default_value(Some("now()".to_string())),
    ];

    let mut pk = Constraint::new("users_pkey", "PRIMARY KEY");
    pk.push_column("id");
    table.constraints = vec![pk];

    table
}

#[test]
fn users_table() {
    let expected = r#"
DROP TABLE public.users CASCADE;

CREATE TABLE IF NOT EXISTS public.users (
    id BIGSERIAL NOT NULL,
    email character varying(250) NOT NULL,
    created_at timestamp with time zone DEFAULT now(),
    CONSTRAINT users_pkey PRIMARY KEY (id)
);

ALTER TABLE public.users OWNER TO public;
COMMENT ON TABLE public.users IS 'Registered users';
COMMENT ON COLUMN public.users.email IS 'Login address, e.g. ''jo@example.com''';
"#;

    assert_eq!(table_sql(&users()), expected);
}

#[test]
fn emission_is_deterministic() {
    let table = users();
    assert_eq!(table_sql(&table), table_sql(&table.clone()));
}

#[test]
fn table_without_columns_renders_nothing() {
    let table = Table::new("public", "empty");
    assert_eq!(table_sql(&table), "");
}

#[test]
fn foreign_keys_reference_the_same_schema() {
    let mut table = Table::new("sales", "order_item");
    table.owner = "app".to_string();

    let mut id = Column::new(1, "id", "integer", false).unwrap();
    id.is_primary_key = true;
    table.columns = vec![
        id,
        Column::new(2, "order_id", "integer", false).unwrap(),
    ];

    let mut fk = Constraint::new("order_item_order_fk", "FOREIGN KEY").references("orders", "id");
    fk.push_column("order_id");
    table.constraints = vec![fk];

    let expected = r#"
DROP TABLE sales.order_item CASCADE;

CREATE TABLE IF NOT EXISTS sales.order_item (
    id SERIAL NOT NULL,
    order_id integer NOT NULL,
    CONSTRAINT order_item_order_fk FOREIGN KEY (order_id)
        REFERENCES sales.orders (id) MATCH SIMPLE
        ON UPDATE NO ACTION ON DELETE NO ACTION
);

ALTER TABLE sales.order_item OWNER TO app;
"#;

    assert_eq!(table_sql(&table), expected);
}

#[test]
fn non_key_cardinal_columns_keep_their_type_and_default() {
    let mut table = Table::new("public", "counters");
    table.columns = vec![Column::new(1, "hits", "smallint", true)
        .unwrap()
        .default_value(Some("0".to_string()))];

    let sql = table_sql(&table);
    assert!(sql.contains("\n    hits smallint DEFAULT 0\n"), "{sql}");
}

#[test]
fn awkward_identifiers_are_quoted() {
    let mut table = Table::new("public", "Order");
    table.owner = "app".to_string();
    table.columns = vec![
        Column::new(1, "user", "text", true).unwrap(),
        Column::new(2, "Say \"hi\"", "text", true).unwrap(),
    ];

    let sql = table_sql(&table);
    assert!(sql.contains("CREATE TABLE IF NOT EXISTS public.\"Order\" ("), "{sql}");
    assert!(sql.contains("\n    \"user\" text,"), "{sql}");
    assert!(sql.contains("\n    \"Say \"\"hi\"\"\" text\n"), "{sql}");
}

#[test]
fn schema_script_concatenates_tables_in_order() {
    let mut schema = Schema::new("public");
    let mut accounts = users();
    accounts.table_name = "accounts".to_string();
    schema.tables = vec![users(), Table::new("public", "empty"), accounts];

    let sql = schema_sql(&schema);
    let users_at = sql.find("CREATE TABLE IF NOT EXISTS public.users").unwrap();
    let accounts_at = sql.find("CREATE TABLE IF NOT EXISTS public.accounts").unwrap();

    assert!(users_at < accounts_at);
    assert!(!sql.contains("public.empty"));
    assert_eq!(sql, format!("{}{}", table_sql(&users()), table_sql(&schema.tables[2])));
}

#[test]
fn serializer_terminates_statements() {
    let table = users();
    let sql = Serializer::new().serialize(&Statement::drop_table(&table));
    assert_eq!(sql, "DROP TABLE public.users CASCADE;");
}

#[test]
fn drop_table_clauses() {
    let stmt: Statement = DropTable {
        name: Name::table("public", "users"),
        if_exists: true,
        cascade: false,
    }
    .into();

    let sql = Serializer::new().serialize(&stmt);
    assert_eq!(sql, "DROP TABLE IF EXISTS public.users;");
}
