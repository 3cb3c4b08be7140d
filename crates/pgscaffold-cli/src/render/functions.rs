use super::RenderConfig;

use pgscaffold_core::schema::{Column, Table};
use pgscaffold_sql::columns;
use std::collections::HashMap;
use tera::{Result, Tera, Value};

pub(super) fn register(tera: &mut Tera, config: &RenderConfig) {
    register_constant(tera, "command_line", &config.command_line);
    register_constant(tera, "env_var", &config.env_var);
    register_constant(tera, "schema_name", &config.schema_name);
    register_constant(tera, "crate_name", &config.crate_name);
    register_constant(tera, "repo_name", &config.repo_name);

    register_table_fn(tera, "column_names", columns::column_names);
    register_table_fn(
        tera,
        "column_names_without_primary_keys",
        columns::column_names_without_primary_keys,
    );
    register_table_fn(
        tera,
        "placeholders_without_primary_keys",
        columns::placeholders_without_primary_keys,
    );
    register_table_fn(
        tera,
        "assignments_without_primary_keys",
        columns::assignments_without_primary_keys,
    );
    register_table_fn(tera, "primary_key_parameters", columns::primary_key_parameters);
    register_table_fn(tera, "qualified_name", columns::qualified_name);
    register_table_fn(tera, "select_list", columns::select_list);
    register_table_fn(
        tera,
        "typed_placeholders_without_primary_keys",
        columns::typed_placeholders_without_primary_keys,
    );
    register_table_fn(
        tera,
        "typed_assignments_without_primary_keys",
        columns::typed_assignments_without_primary_keys,
    );
    register_table_fn(tera, "table_sql", pgscaffold_sql::table_sql);

    tera.register_function(
        "column_index_after_primary_keys",
        |args: &HashMap<String, Value>| {
            let table = table_arg(args, "column_index_after_primary_keys")?;
            Ok(Value::from(columns::column_index_after_primary_keys(&table)))
        },
    );

    register_prefixed_fn(tera, "code_names", columns::code_names);
    register_prefixed_fn(tera, "field_names", columns::field_names);
    register_prefixed_fn(tera, "data_field_names", columns::data_field_names);
    register_prefixed_fn(tera, "data_bind_values", columns::data_bind_values);
    register_prefixed_fn(tera, "primary_key_bind_values", columns::primary_key_bind_values);

    tera.register_function("primary_key_predicate", |args: &HashMap<String, Value>| {
        let table = table_arg(args, "primary_key_predicate")?;
        let first = match args.get("index") {
            Some(value) => value.as_u64().ok_or_else(|| {
                tera::Error::msg("primary_key_predicate: `index` must be a positive integer")
            })? as usize,
            None => 1,
        };
        Ok(Value::String(columns::primary_key_predicate(&table, first)))
    });

    tera.register_function("row_value", |args: &HashMap<String, Value>| {
        let value = args
            .get("column")
            .ok_or_else(|| tera::Error::msg("row_value: missing `column` argument"))?;
        let column: Column = serde_json::from_value(value.clone()).map_err(|e| {
            tera::Error::chain("row_value: `column` is not a reflected column", e)
        })?;
        Ok(Value::String(columns::row_value(&column, "row")))
    });
}

/// `{{ name() }}` returning a fixed string.
fn register_constant(tera: &mut Tera, name: &str, value: &str) {
    let value = Value::String(value.to_string());
    tera.register_function(name, move |_: &HashMap<String, Value>| Ok(value.clone()));
}

/// `{{ name(table=table) }}`
fn register_table_fn(tera: &mut Tera, name: &'static str, f: fn(&Table) -> String) {
    tera.register_function(name, move |args: &HashMap<String, Value>| {
        let table = table_arg(args, name)?;
        Ok(Value::String(f(&table)))
    });
}

/// `{{ name(table=table, prefix="row.") }}`
fn register_prefixed_fn(tera: &mut Tera, name: &'static str, f: fn(&Table, &str) -> String) {
    tera.register_function(name, move |args: &HashMap<String, Value>| {
        let table = table_arg(args, name)?;
        let prefix = match args.get("prefix") {
            Some(value) => value
                .as_str()
                .ok_or_else(|| tera::Error::msg(format!("{name}: `prefix` must be a string")))?,
            None => "",
        };
        Ok(Value::String(f(&table, prefix)))
    });
}

fn table_arg(args: &HashMap<String, Value>, function: &str) -> Result<Table> {
    let value = args
        .get("table")
        .ok_or_else(|| tera::Error::msg(format!("{function}: missing `table` argument")))?;

    serde_json::from_value(value.clone())
        .map_err(|e| tera::Error::chain(format!("{function}: `table` is not a reflected table"), e))
}
