pub mod columns;

mod ddl;
pub use ddl::{schema_sql, table_sql};

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::Statement;
