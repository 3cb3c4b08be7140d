mod alter_table_owner;
pub use alter_table_owner::AlterTableOwner;

mod column_def;
pub use column_def::ColumnDef;

mod comment_on;
pub use comment_on::{CommentOn, CommentTarget};

mod constraint_def;
pub use constraint_def::{ConstraintDef, References};

mod create_table;
pub use create_table::CreateTable;

mod drop_table;
pub use drop_table::DropTable;

mod name;
pub use name::Name;

/// A DDL statement that reproduces part of a reflected table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    AlterTableOwner(AlterTableOwner),
    CommentOn(CommentOn),
    CreateTable(CreateTable),
    DropTable(DropTable),
}
