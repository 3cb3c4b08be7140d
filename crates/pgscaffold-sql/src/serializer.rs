#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Period};

mod ident;
use ident::Ident;
pub use ident::quote_ident;

mod literal;
use literal::Literal;

// Fragment serializers
mod column_def;
mod constraint_def;
mod name;
mod statement;

use crate::stmt::Statement;

/// Serialize a statement to a PostgreSQL string
#[derive(Debug, Default)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes one statement, terminated by a semicolon.
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }
}
