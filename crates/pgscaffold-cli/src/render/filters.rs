use pgscaffold_core::schema::{name, Column, Table, BASE_TABLE};
use std::collections::HashMap;
use tera::{Result, Tera, Value};

pub(super) fn register(tera: &mut Tera) {
    tera.register_filter("plural", plural);
    tera.register_filter("field", field);
    tera.register_filter("literal", literal);
    tera.register_filter("table_comment", table_comment);
    tera.register_filter("column_comment", column_comment);
}

/// `{{ table.displayName | plural }}`
fn plural(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("plural filter requires a string"))?;
    Ok(Value::String(name::plural(s)))
}

/// `{{ column.snakeName | field }}`, escaping Rust keywords.
fn field(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("field filter requires a string"))?;
    Ok(Value::String(name::field_name(s)))
}

/// `{{ sql | literal }}`, a Rust string literal with the value escaped.
fn literal(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("literal filter requires a string"))?;
    Ok(Value::String(format!("{s:?}")))
}

/// Doc comment lines describing a table.
fn table_comment(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let table: Table = from_value(value, "table_comment")?;

    let kind = if table.table_type == BASE_TABLE {
        "table".to_string()
    } else {
        table.table_type.to_lowercase()
    };

    let mut lines = vec![describe(
        &table.name.code_name,
        &table.name.display_name,
        &kind,
        &table.table_name,
    )];

    if !table.is_updatable {
        lines.push("It's READ ONLY.".to_string());
    }

    if !table.comment.is_empty() {
        lines.push(String::new());
        lines.push(sentence(&table.comment));
    }

    Ok(Value::String(doc_comment(&lines, indent(args))))
}

/// Doc comment lines describing a column.
fn column_comment(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let column: Column = from_value(value, "column_comment")?;

    let mut lines = vec![describe(
        &column.name.code_name,
        &column.name.display_name,
        "column",
        &column.column_name,
    )];

    if column.is_primary_key {
        lines.push("It's a PRIMARY KEY.".to_string());
    }

    if column.can_filter {
        lines.push("It's filterable/sortable.".to_string());
    }

    if let Some(max_len) = column.max_len {
        lines.push(format!("It has a maximum size of {max_len}."));
    }

    if let Some(default) = &column.column_default {
        lines.push(String::new());
        lines.push(format!("Default: `{default}`"));
    }

    if !column.comment.is_empty() {
        lines.push(String::new());
        lines.push(sentence(&column.comment));
    }

    Ok(Value::String(doc_comment(&lines, indent(args))))
}

fn describe(code_name: &str, display_name: &str, kind: &str, raw: &str) -> String {
    let mut line = format!("{code_name} is for {kind} `{raw}`");
    if code_name != display_name {
        line += &format!(" (\"{display_name}\")");
    }
    line.push('.');
    line
}

fn sentence(text: &str) -> String {
    if text.ends_with('.') {
        text.to_string()
    } else {
        format!("{text}.")
    }
}

/// Renders `///` lines without a trailing newline. Comment text spanning
/// several lines gets one `///` per line.
fn doc_comment(lines: &[String], indent: usize) -> String {
    let pad = " ".repeat(indent);

    lines
        .iter()
        .flat_map(|line| line.split('\n'))
        .map(|line| match line.trim_end() {
            "" => format!("{pad}///"),
            line => format!("{pad}/// {line}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn indent(args: &HashMap<String, Value>) -> usize {
    args.get("indent").and_then(Value::as_u64).unwrap_or(0) as usize
}

fn from_value<T: serde::de::DeserializeOwned>(value: &Value, filter: &str) -> Result<T> {
    serde_json::from_value(value.clone())
        .map_err(|e| tera::Error::chain(format!("{filter} filter requires a reflected value"), e))
}
