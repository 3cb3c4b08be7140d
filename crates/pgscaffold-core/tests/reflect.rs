use pgscaffold_core::{
    async_trait,
    catalog::{Catalog, ColumnRow, ConstraintRow, IndexRow, TableRow},
    err,
    schema::Type,
    ReflectOptions, Reflector, Result,
};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

/// An in-memory catalog keyed by table name.
#[derive(Default)]
struct FakeCatalog {
    tables: Vec<TableRow>,
    columns: HashMap<String, Vec<ColumnRow>>,
    constraints: HashMap<String, Vec<ConstraintRow>>,
    indexes: HashMap<String, Vec<IndexRow>>,
    fail_on_columns: bool,
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn tables(&self, _schema: &str, include_views: bool) -> Result<Vec<TableRow>> {
        Ok(self
            .tables
            .iter()
            .filter(|t| include_views || t.table_type == "BASE TABLE")
            .cloned()
            .collect())
    }

    async fn columns(&self, _schema: &str, table: &str) -> Result<Vec<ColumnRow>> {
        if self.fail_on_columns {
            return Err(err!("connection reset"));
        }
        Ok(self.columns.get(table).cloned().unwrap_or_default())
    }

    async fn constraints(&self, _schema: &str, table: &str) -> Result<Vec<ConstraintRow>> {
        Ok(self.constraints.get(table).cloned().unwrap_or_default())
    }

    async fn indexes(&self, _schema: &str, table: &str) -> Result<Vec<IndexRow>> {
        Ok(self.indexes.get(table).cloned().unwrap_or_default())
    }
}

fn table_row(name: &str, table_type: &str, insertable: &str) -> TableRow {
    TableRow {
        name: name.to_string(),
        table_type: table_type.to_string(),
        is_insertable_into: insertable.to_string(),
        comment: None,
    }
}

fn column_row(position: i32, name: &str, data_type: &str, nullable: bool) -> ColumnRow {
    ColumnRow {
        position,
        name: name.to_string(),
        is_nullable: if nullable { "YES" } else { "NO" }.to_string(),
        data_type: data_type.to_string(),
        max_len: None,
        default: None,
        numeric_precision: None,
        comment: None,
    }
}

fn constraint_row(name: &str, column: &str, ty: &str, ref_table: &str, ref_column: &str) -> ConstraintRow {
    ConstraintRow {
        name: name.to_string(),
        column_name: column.to_string(),
        constraint_type: ty.to_string(),
        ref_table: ref_table.to_string(),
        ref_column: ref_column.to_string(),
    }
}

fn index_row(name: &str, key: &str, is_primary: bool, is_unique: bool) -> IndexRow {
    IndexRow {
        name: name.to_string(),
        key: key.to_string(),
        is_primary,
        is_unique,
    }
}

/// `users(id bigserial pk, email varchar(250) not null, created_at timestamptz null)`
fn users_catalog() -> FakeCatalog {
    let mut catalog = FakeCatalog {
        tables: vec![TableRow {
            comment: Some("  Registered users ".to_string()),
            ..table_row("users", "BASE TABLE", "YES")
        }],
        ..Default::default()
    };

    catalog.columns.insert(
        "users".to_string(),
        vec![
            ColumnRow {
                default: Some("nextval('users_id_seq'::regclass)".to_string()),
                numeric_precision: Some(64),
                ..column_row(1, "id", "bigint", false)
            },
            ColumnRow {
                max_len: Some(250),
                comment: Some("Login address".to_string()),
                ..column_row(2, "email", "character varying", false)
            },
            column_row(3, "created_at", "timestamp with time zone", true),
        ],
    );
    catalog.constraints.insert(
        "users".to_string(),
        vec![constraint_row("users_pkey", "id", "PRIMARY KEY", "users", "id")],
    );
    catalog.indexes.insert(
        "users".to_string(),
        vec![
            index_row("users_email_key", "2", false, true),
            index_row("users_pkey", "1", true, true),
        ],
    );

    catalog
}

#[tokio::test]
async fn reflects_users_table() {
    let catalog = users_catalog();
    let schema = pgscaffold_core::reflect(&catalog, "public").await.unwrap();

    assert_eq!(schema.schema_name, "public");
    assert_eq!(schema.owner, "public");
    assert_eq!(schema.tables.len(), 1);

    let users = &schema.tables[0];
    assert_eq!(users.name.code_name, "Users");
    assert_eq!(users.name.slug_name, "users");
    assert_eq!(users.comment, "Registered users");
    assert!(users.is_updatable);
    assert!(!users.is_view());

    let positions: Vec<_> = users.columns.iter().map(|c| c.position).collect();
    assert_eq!(positions, [1, 2, 3]);

    let id = &users.columns[0];
    assert!(id.is_primary_key);
    assert!(id.can_filter);
    assert!(id.is_cardinal);
    assert_eq!(id.data_type, Type::I64);
    assert!(id.has_default);

    let email = &users.columns[1];
    assert!(!email.is_primary_key);
    assert!(!email.is_nullable);
    assert_eq!(email.max_len, Some(250));
    assert_eq!(email.data_type, Type::String);
    assert_eq!(email.comment, "Login address");

    let created_at = &users.columns[2];
    assert!(created_at.is_nullable);
    assert!(!created_at.can_filter);
    assert_eq!(created_at.data_type.to_string(), "Option<DateTime<Utc>>");

    assert_eq!(users.constraints.len(), 1);
    assert!(users.constraints[0].is_primary_key);
    assert_eq!(users.constraints[0].column_names, ["id"]);
    assert_eq!(users.constraints[0].foreign_table, None);

    assert_eq!(users.dependencies, ["chrono"]);
    assert_eq!(users.primary_key().unwrap().column_name, "id");
}

#[tokio::test]
async fn primary_key_is_back_filled_from_indexes() {
    let mut catalog = users_catalog();
    catalog.indexes.clear();

    let schema = pgscaffold_core::reflect(&catalog, "public").await.unwrap();
    let users = &schema.tables[0];
    assert!(users.primary_key_columns().next().is_none());
    assert!(!users.columns[0].can_filter);

    let catalog = users_catalog();
    let schema = pgscaffold_core::reflect(&catalog, "public").await.unwrap();
    let users = &schema.tables[0];
    assert!(users.columns[0].is_primary_key);
    assert!(users.columns[0].can_filter);
}

#[tokio::test]
async fn non_primary_index_does_not_clear_primary_key() {
    let mut catalog = users_catalog();
    catalog.indexes.insert(
        "users".to_string(),
        vec![
            index_row("users_pkey", "1", true, true),
            index_row("users_id_email_idx", "1 2", false, false),
        ],
    );

    let schema = pgscaffold_core::reflect(&catalog, "public").await.unwrap();
    let users = &schema.tables[0];
    assert!(users.columns[0].is_primary_key);
    assert_eq!(users.indexes[1].column_names, ["id", "email"]);
}

#[tokio::test]
async fn leading_column_of_any_index_is_filterable() {
    let schema = pgscaffold_core::reflect(&users_catalog(), "public")
        .await
        .unwrap();
    let email = &schema.tables[0].columns[1];
    assert!(email.can_filter);
    assert!(!email.is_primary_key);
}

#[tokio::test]
async fn composite_constraint_rows_fold_into_one() {
    let mut catalog = users_catalog();
    catalog.constraints.insert(
        "users".to_string(),
        vec![
            constraint_row("fk_users_org", "org_id", "FOREIGN KEY", "orgs", "id"),
            constraint_row("fk_users_org", "org_region", "FOREIGN KEY", "orgs", "region"),
            constraint_row("pk_account", "id", "PRIMARY KEY", "users", "id"),
            constraint_row("pk_account", "id", "PRIMARY KEY", "users", "id"),
        ],
    );

    let schema = pgscaffold_core::reflect(&catalog, "public").await.unwrap();
    let constraints = &schema.tables[0].constraints;

    assert_eq!(constraints.len(), 2);

    assert_eq!(constraints[0].constraint_name, "fk_users_org");
    assert!(constraints[0].is_foreign_key);
    assert_eq!(constraints[0].column_names, ["org_id", "org_region"]);
    assert_eq!(constraints[0].foreign_table.as_deref(), Some("orgs"));
    assert_eq!(constraints[0].foreign_column.as_deref(), Some("id"));

    assert_eq!(constraints[1].constraint_name, "pk_account");
    assert_eq!(constraints[1].column_names, ["id"]);
}

#[tokio::test]
async fn unsupported_type_aborts_reflection() {
    let mut catalog = users_catalog();
    catalog
        .columns
        .get_mut("users")
        .unwrap()
        .push(column_row(4, "flags", "bit", false));

    let err = pgscaffold_core::reflect(&catalog, "public")
        .await
        .unwrap_err();

    assert!(err.is_unsupported_type());
    assert_eq!(
        err.to_string(),
        "reflecting `public.users`: column `flags`: unsupported type: bit (use 'boolean' instead)"
    );
}

#[tokio::test]
async fn query_failure_aborts_reflection() {
    let catalog = FakeCatalog {
        fail_on_columns: true,
        ..users_catalog()
    };

    let err = pgscaffold_core::reflect(&catalog, "public")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("connection reset"));
}

#[tokio::test]
async fn malformed_index_key_is_a_query_fault() {
    let mut catalog = users_catalog();
    catalog
        .indexes
        .insert("users".to_string(), vec![index_row("users_pkey", "1 x", true, true)]);

    let err = pgscaffold_core::reflect(&catalog, "public")
        .await
        .unwrap_err();
    assert!(err.is_query());
}

#[tokio::test]
async fn index_key_outside_the_table_is_a_query_fault() {
    let mut catalog = users_catalog();
    catalog
        .indexes
        .insert("users".to_string(), vec![index_row("users_pkey", "9", true, true)]);

    let err = pgscaffold_core::reflect(&catalog, "public")
        .await
        .unwrap_err();
    assert!(err.is_query());
}

#[tokio::test]
async fn expression_entries_in_index_keys_are_skipped() {
    let mut catalog = users_catalog();
    catalog.indexes.insert(
        "users".to_string(),
        vec![
            index_row("users_pkey", "1", true, true),
            index_row("users_lower_email_idx", "0 2", false, false),
        ],
    );

    let schema = pgscaffold_core::reflect(&catalog, "public").await.unwrap();
    assert_eq!(schema.tables[0].indexes[1].column_names, ["email"]);
}

#[tokio::test]
async fn views_are_opt_in() {
    let mut catalog = users_catalog();
    catalog
        .tables
        .push(table_row("active_users", "VIEW", "NO"));
    catalog.columns.insert(
        "active_users".to_string(),
        vec![
            column_row(1, "id", "bigint", true),
            column_row(2, "email", "character varying", true),
        ],
    );

    let schema = pgscaffold_core::reflect(&catalog, "public").await.unwrap();
    assert_eq!(schema.tables.len(), 1);

    let schema = Reflector::new(&catalog, ReflectOptions::new().include_views(true))
        .reflect("public")
        .await
        .unwrap();
    assert_eq!(schema.tables.len(), 2);

    let view = schema.table("active_users").unwrap();
    assert!(view.is_view());
    assert!(!view.is_updatable);
    assert!(view.columns.iter().all(|c| c.can_filter));
    assert!(schema.verify().is_ok());
}

#[tokio::test]
async fn owner_override() {
    let catalog = users_catalog();
    let schema = Reflector::new(
        &catalog,
        ReflectOptions::new().owner(Some("app_owner".to_string())),
    )
    .reflect("public")
    .await
    .unwrap();

    assert_eq!(schema.owner, "app_owner");
    assert_eq!(schema.tables[0].owner, "app_owner");
}

#[tokio::test]
async fn reflection_is_deterministic() {
    let catalog = users_catalog();
    let first = pgscaffold_core::reflect(&catalog, "public").await.unwrap();
    let second = pgscaffold_core::reflect(&catalog, "public").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}
