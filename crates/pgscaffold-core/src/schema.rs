mod column;
pub use column::Column;

mod constraint;
pub use constraint::Constraint;

mod index;
pub use index::{parse_index_key, Index};

pub mod name;
pub use name::Name;

#[allow(clippy::module_inception)]
mod schema;
pub use schema::Schema;

mod table;
pub use table::{Table, BASE_TABLE, VIEW};

mod ty;
pub use ty::{is_cardinal, Dependency, Type};
