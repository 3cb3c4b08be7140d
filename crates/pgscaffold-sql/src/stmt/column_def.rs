use pgscaffold_core::schema::Column;

/// One column clause of a `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,

    /// The SQL type, including any length qualifier.
    pub ty: String,

    pub not_null: bool,

    /// Raw default expression.
    pub default: Option<String>,
}

impl ColumnDef {
    /// Builds the clause for a reflected column.
    ///
    /// A cardinal primary key column is rendered with the serial type of the
    /// same width and loses its default, since the sequence supplies it.
    pub fn from_schema(column: &Column) -> ColumnDef {
        let mut ty = column.sql_type.clone();
        let mut default = column.column_default.clone();

        if let Some(len) = column.max_len.filter(|len| *len > 0) {
            ty = format!("{ty}({len})");
        }

        if column.is_primary_key && column.is_cardinal {
            ty = serial_type(&column.sql_type).to_string();
            default = None;
        }

        ColumnDef {
            name: column.column_name.clone(),
            ty,
            not_null: !column.is_nullable,
            default,
        }
    }
}

fn serial_type(sql_type: &str) -> &'static str {
    match sql_type.to_ascii_lowercase().as_str() {
        "smallint" | "smallserial" => "SMALLSERIAL",
        "integer" | "serial" => "SERIAL",
        _ => "BIGSERIAL",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_type_by_width() {
        assert_eq!(serial_type("smallint"), "SMALLSERIAL");
        assert_eq!(serial_type("SERIAL"), "SERIAL");
        assert_eq!(serial_type("integer"), "SERIAL");
        assert_eq!(serial_type("bigserial"), "BIGSERIAL");
        assert_eq!(serial_type("bigint"), "BIGSERIAL");
    }
}
