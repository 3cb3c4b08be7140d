use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The Rust type a column maps to in generated code.
///
/// Reflection maps every native PostgreSQL column type onto one of these. The
/// mapping is strict: a native type outside the supported set is an error
/// rather than a guess, since a wrong guess produces code that compiles but
/// misreads data.
///
/// In the IR dump the type is written as its Rust spelling, e.g.
/// `Option<DateTime<Utc>>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Type {
    /// 16-bit signed integer (`smallint`, `smallserial`)
    I16,

    /// 32-bit signed integer (`integer`, `serial`)
    I32,

    /// 64-bit signed integer (`bigint`, `bigserial`)
    I64,

    /// 64-bit float (`numeric`, `decimal`, `money`, `real`, `double precision`)
    F64,

    /// Byte sequence (`bytea`)
    Bytes,

    /// UTF-8 string (character types, `json`, `jsonb`, `xml`)
    String,

    /// Boolean (`boolean`)
    Bool,

    /// An instant in time (date, time and timestamp variants)
    Timestamp,

    /// A duration (`interval`)
    Interval,

    /// 128-bit identifier (`uuid`)
    Uuid,

    /// A nullable value
    Option(Box<Type>),
}

/// An external crate that generated code needs for a mapped type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dependency {
    Chrono,
    Uuid,
}

impl Type {
    /// Maps a native PostgreSQL type name to its Rust type.
    ///
    /// Temporal types always map to an `Option`, regardless of the column's
    /// nullability. Matching is case-insensitive.
    pub fn from_native(native: &str) -> Result<Type> {
        let ty = match native.to_ascii_lowercase().as_str() {
            "smallint" | "smallserial" => Type::I16,
            "integer" | "serial" => Type::I32,
            "bigint" | "bigserial" => Type::I64,
            "decimal" | "numeric" | "money" | "real" | "double precision" => Type::F64,
            "bytea" => Type::Bytes,
            "character varying" | "varchar" | "character" | "char" | "text" => Type::String,
            "boolean" => Type::Bool,
            "bit" => {
                return Err(Error::unsupported_type(
                    native,
                    Some("use 'boolean' instead"),
                ))
            }
            "timestamp"
            | "timestamptz"
            | "timestamp with time zone"
            | "timestamp without time zone"
            | "date"
            | "time"
            | "time with time zone"
            | "time without time zone" => Type::Timestamp.nullable(),
            "interval" => Type::Interval.nullable(),
            "uuid" => Type::Uuid,
            "json" | "jsonb" | "xml" => Type::String,
            _ => return Err(Error::unsupported_type(native, None)),
        };

        Ok(ty)
    }

    /// Maps a native type and wraps it in an `Option` when the column is nullable.
    pub fn from_native_nullable(native: &str, nullable: bool) -> Result<Type> {
        let ty = Type::from_native(native)?;
        Ok(if nullable { ty.nullable() } else { ty })
    }

    /// Wraps the type in an `Option`. Wrapping an `Option` is a no-op.
    pub fn nullable(self) -> Type {
        match self {
            Type::Option(_) => self,
            ty => Type::Option(Box::new(ty)),
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Type::Option(_))
    }

    /// The type with any `Option` wrapper removed.
    pub fn base(&self) -> &Type {
        match self {
            Type::Option(inner) => inner.base(),
            ty => ty,
        }
    }

    pub fn dependency(&self) -> Option<Dependency> {
        match self.base() {
            Type::Timestamp | Type::Interval => Some(Dependency::Chrono),
            Type::Uuid => Some(Dependency::Uuid),
            _ => None,
        }
    }
}

/// Returns `true` for the integer types that are rendered with an identity
/// type when they hold a primary key.
pub fn is_cardinal(native: &str) -> bool {
    matches!(
        native.to_ascii_lowercase().as_str(),
        "smallint" | "smallserial" | "integer" | "serial" | "bigint" | "bigserial"
    )
}

impl Dependency {
    pub fn crate_name(self) -> &'static str {
        match self {
            Dependency::Chrono => "chrono",
            Dependency::Uuid => "uuid",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::I16 => f.write_str("i16"),
            Type::I32 => f.write_str("i32"),
            Type::I64 => f.write_str("i64"),
            Type::F64 => f.write_str("f64"),
            Type::Bytes => f.write_str("Vec<u8>"),
            Type::String => f.write_str("String"),
            Type::Bool => f.write_str("bool"),
            Type::Timestamp => f.write_str("DateTime<Utc>"),
            Type::Interval => f.write_str("Duration"),
            Type::Uuid => f.write_str("Uuid"),
            Type::Option(inner) => write!(f, "Option<{inner}>"),
        }
    }
}

impl FromStr for Type {
    type Err = Error;

    fn from_str(s: &str) -> Result<Type> {
        if let Some(inner) = s
            .strip_prefix("Option<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return Ok(inner.parse::<Type>()?.nullable());
        }

        Ok(match s {
            "i16" => Type::I16,
            "i32" => Type::I32,
            "i64" => Type::I64,
            "f64" => Type::F64,
            "Vec<u8>" => Type::Bytes,
            "String" => Type::String,
            "bool" => Type::Bool,
            "DateTime<Utc>" => Type::Timestamp,
            "Duration" => Type::Interval,
            "Uuid" => Type::Uuid,
            _ => return Err(Error::unsupported_type(s, None)),
        })
    }
}

impl From<Type> for String {
    fn from(value: Type) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Type {
    type Error = Error;

    fn try_from(value: String) -> Result<Type> {
        value.parse()
    }
}
