//! Column and parameter lists for generated CRUD statements.
//!
//! Every function walks the table's columns in ordinal position order. The
//! placeholder numbers handed out here must line up with the order generated
//! code binds its values in, so columns are never re-sorted.
//!
//! Identifiers are quoted with the same rule the DDL uses.

use crate::serializer::quote_ident;

use pgscaffold_core::schema::{Column, Table};

use std::fmt;

/// A PostgreSQL positional parameter, displayed as `$n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// How a column's value travels between the database and its mapped Rust
/// type in generated code.
///
/// tokio-postgres only converts a Rust type to and from a few exact
/// PostgreSQL types, e.g. `f64` is `float8` only and `DateTime<Utc>` is
/// `timestamptz` only. Other native types are cast in the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wire {
    /// Sent and received as the column's own type.
    Native,

    /// Read as `col[::via]::wire`, written as `$n::wire[::via]::native`.
    Cast {
        wire: &'static str,
        via: Option<&'static str>,
    },

    /// A time of day, carried as a `timestamptz` on 1970-01-01.
    TimeOfDay,

    /// An interval, carried as `float8` seconds.
    Seconds,
}

impl Wire {
    pub fn of(column: &Column) -> Wire {
        match column.sql_type.to_ascii_lowercase().as_str() {
            "timestamp" | "timestamp without time zone" | "date" => Wire::Cast {
                wire: "timestamptz",
                via: None,
            },
            "time" | "time without time zone" | "time with time zone" | "timetz" => {
                Wire::TimeOfDay
            }
            "interval" => Wire::Seconds,
            "decimal" | "numeric" | "real" => Wire::Cast {
                wire: "float8",
                via: None,
            },
            // money has no direct cast to or from float8
            "money" => Wire::Cast {
                wire: "float8",
                via: Some("numeric"),
            },
            "json" | "jsonb" | "xml" => Wire::Cast {
                wire: "text",
                via: None,
            },
            _ => Wire::Native,
        }
    }

    /// The projection of `column` in a `SELECT` or `RETURNING` list.
    pub fn read(self, column: &Column) -> String {
        let ident = quote_ident(&column.column_name);

        match self {
            Wire::Native => ident,
            Wire::Cast { wire, via: None } => format!("{ident}::{wire} AS {ident}"),
            Wire::Cast {
                wire,
                via: Some(via),
            } => format!("{ident}::{via}::{wire} AS {ident}"),
            Wire::TimeOfDay => {
                format!("(DATE '1970-01-01' + {ident})::timestamptz AS {ident}")
            }
            Wire::Seconds => format!("extract(epoch FROM {ident})::float8 AS {ident}"),
        }
    }

    /// The parameter expression that binds a value for `column`.
    pub fn write(self, column: &Column, placeholder: Placeholder) -> String {
        let native = &column.sql_type;

        match self {
            Wire::Native => placeholder.to_string(),
            Wire::Cast { wire, via: None } => format!("{placeholder}::{wire}::{native}"),
            Wire::Cast {
                wire,
                via: Some(via),
            } => format!("{placeholder}::{wire}::{via}::{native}"),
            Wire::TimeOfDay => format!("{placeholder}::timestamptz::{native}"),
            Wire::Seconds => format!("({placeholder}::float8 * interval '1 second')"),
        }
    }
}

/// `id,email,name`, for `SELECT` projections.
pub fn column_names(table: &Table) -> String {
    join(table.columns.iter().map(|c| quote_ident(&c.column_name)))
}

/// `email,name`, for `INSERT` column lists.
pub fn column_names_without_primary_keys(table: &Table) -> String {
    join(table.data_columns().map(|c| quote_ident(&c.column_name)))
}

/// `$1,$2`, one placeholder per non primary key column.
pub fn placeholders_without_primary_keys(table: &Table) -> String {
    join(numbered(table).map(|(placeholder, _)| placeholder.to_string()))
}

/// `email=$1,name=$2`, for `UPDATE ... SET`.
pub fn assignments_without_primary_keys(table: &Table) -> String {
    join(numbered(table).map(|(placeholder, column)| {
        format!("{}={placeholder}", quote_ident(&column.column_name))
    }))
}

/// The first placeholder index free after the non primary key columns.
///
/// Generated statements bind the primary key here, e.g. the `WHERE` clause of
/// an `UPDATE`.
pub fn column_index_after_primary_keys(table: &Table) -> usize {
    table.data_columns().count() + 1
}

/// `public.users`, quoted where needed.
pub fn qualified_name(table: &Table) -> String {
    format!(
        "{}.{}",
        quote_ident(&table.schema_name),
        quote_ident(&table.table_name)
    )
}

/// Projection of every column, cast to what the mapped Rust type decodes,
/// e.g. `id,created_at::timestamptz AS created_at`.
pub fn select_list(table: &Table) -> String {
    join(table.columns.iter().map(|c| Wire::of(c).read(c)))
}

/// Like [`placeholders_without_primary_keys`], with each placeholder cast
/// from the bound Rust type to the column type.
pub fn typed_placeholders_without_primary_keys(table: &Table) -> String {
    join(numbered(table).map(|(placeholder, column)| Wire::of(column).write(column, placeholder)))
}

/// Like [`assignments_without_primary_keys`], with typed placeholders.
pub fn typed_assignments_without_primary_keys(table: &Table) -> String {
    join(numbered(table).map(|(placeholder, column)| {
        format!(
            "{}={}",
            quote_ident(&column.column_name),
            Wire::of(column).write(column, placeholder)
        )
    }))
}

/// `id=$n` for the primary key columns, numbered from `first`.
pub fn primary_key_predicate(table: &Table, first: usize) -> String {
    table
        .primary_key_columns()
        .enumerate()
        .map(|(i, column)| {
            let placeholder = Placeholder(first + i);
            format!(
                "{}={}",
                quote_ident(&column.column_name),
                Wire::of(column).write(column, placeholder)
            )
        })
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// Code names of every column with `prefix` prepended, e.g. `row.Id,row.Email`.
pub fn code_names(table: &Table, prefix: &str) -> String {
    join(
        table
            .columns
            .iter()
            .map(|c| format!("{prefix}{}", c.name.code_name)),
    )
}

/// Rust field names of every column with `prefix` prepended, e.g.
/// `&entity.id, &entity.email`.
pub fn field_names(table: &Table, prefix: &str) -> String {
    table
        .columns
        .iter()
        .map(|c| format!("{prefix}{}", c.field_name()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rust field names of the non primary key columns with `prefix` prepended,
/// in placeholder order.
pub fn data_field_names(table: &Table, prefix: &str) -> String {
    table
        .data_columns()
        .map(|c| format!("{prefix}{}", c.field_name()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rust expressions binding the non primary key columns, in placeholder
/// order. `prefix` is prepended to each field, e.g. `&entity.`.
pub fn data_bind_values(table: &Table, prefix: &str) -> String {
    table
        .data_columns()
        .map(|c| bind_value(c, prefix))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rust expressions binding the primary key columns.
pub fn primary_key_bind_values(table: &Table, prefix: &str) -> String {
    table
        .primary_key_columns()
        .map(|c| bind_value(c, prefix))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A Rust expression binding `column`, matching [`Wire::write`].
pub fn bind_value(column: &Column, prefix: &str) -> String {
    let field = format!("{prefix}{}", column.field_name());

    match Wire::of(column) {
        Wire::Seconds if column.data_type.is_nullable() => format!(
            "{field}.and_then(|d| d.num_microseconds()).map(|us| us as f64 / 1_000_000.0)"
        ),
        Wire::Seconds => {
            format!("{field}.num_microseconds().map(|us| us as f64 / 1_000_000.0)")
        }
        _ => field,
    }
}

/// A Rust expression reading `column` from a row, matching [`Wire::read`].
pub fn row_value(column: &Column, row: &str) -> String {
    let name = format!("{:?}", column.column_name);

    match Wire::of(column) {
        Wire::Seconds if column.data_type.is_nullable() => format!(
            "{row}.try_get::<_, Option<f64>>({name})?\
             .map(|secs| chrono::Duration::microseconds((secs * 1_000_000.0).round() as i64))"
        ),
        Wire::Seconds => format!(
            "chrono::Duration::microseconds(\
             ({row}.try_get::<_, f64>({name})? * 1_000_000.0).round() as i64)"
        ),
        _ => format!("{row}.try_get({name})?"),
    }
}

/// Function parameters for the primary key, e.g. `id: i64`.
pub fn primary_key_parameters(table: &Table) -> String {
    table
        .primary_key_columns()
        .map(|c| format!("{}: {}", c.field_name(), c.data_type))
        .collect::<Vec<_>>()
        .join(", ")
}

fn numbered(table: &Table) -> impl Iterator<Item = (Placeholder, &Column)> + '_ {
    table
        .data_columns()
        .enumerate()
        .map(|(i, column)| (Placeholder(i + 1), column))
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(",")
}
