use std::fmt;

/// A possibly schema-qualified object name, one part per identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(pub Vec<String>);

impl Name {
    /// `schema.table`
    pub fn table(schema_name: &str, table_name: &str) -> Self {
        Self(vec![schema_name.into(), table_name.into()])
    }

    /// `schema.table.column`
    pub fn column(schema_name: &str, table_name: &str, column_name: &str) -> Self {
        Self(vec![
            schema_name.into(),
            table_name.into(),
            column_name.into(),
        ])
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self(vec![value.into()])
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for ident in &self.0 {
            write!(f, "{s}{ident}")?;
            s = ".";
        }

        Ok(())
    }
}
