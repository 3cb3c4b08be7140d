use super::{Ident, Literal, ToSql};

use crate::stmt;

struct ColumnsWithConstraints<'a>(&'a stmt::CreateTable);

impl ToSql for ColumnsWithConstraints<'_> {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let clauses = self.0.columns.len() + self.0.constraints.len();
        let mut index = 0;

        for column in &self.0.columns {
            fmt!(f, "\n    " column);
            index += 1;
            if index < clauses {
                fmt!(f, ",");
            }
        }

        for constraint in &self.0.constraints {
            fmt!(f, "\n    " constraint);
            index += 1;
            if index < clauses {
                fmt!(f, ",");
            }
        }

        fmt!(f, "\n");
    }
}

impl ToSql for &stmt::AlterTableOwner {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = &self.name;
        let owner = Ident(&self.owner);
        fmt!(f, "ALTER TABLE " name " OWNER TO " owner);
    }
}

impl ToSql for &stmt::CommentOn {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let comment = Literal(&self.comment);

        match &self.target {
            stmt::CommentTarget::Table(name) => fmt!(f, "COMMENT ON TABLE " name " IS " comment),
            stmt::CommentTarget::Column(name) => fmt!(f, "COMMENT ON COLUMN " name " IS " comment),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let if_not_exists = if self.if_not_exists { "IF NOT EXISTS " } else { "" };
        let name = &self.name;
        let columns = ColumnsWithConstraints(self);

        fmt!(f, "CREATE TABLE " if_not_exists name " (" columns ")");
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        let cascade = if self.cascade { " CASCADE" } else { "" };
        let name = &self.name;
        fmt!(f, "DROP TABLE " if_exists name cascade);
    }
}

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        match self {
            stmt::Statement::AlterTableOwner(stmt) => stmt.to_sql(f),
            stmt::Statement::CommentOn(stmt) => stmt.to_sql(f),
            stmt::Statement::CreateTable(stmt) => stmt.to_sql(f),
            stmt::Statement::DropTable(stmt) => stmt.to_sql(f),
        }
    }
}
