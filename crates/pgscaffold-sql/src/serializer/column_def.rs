use super::{Ident, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = Ident(&self.name);
        let ty = &self.ty;
        let not_null = if self.not_null { " NOT NULL" } else { "" };
        let default = self.default.as_ref().map(|default| (" DEFAULT ", default));

        fmt!(f, name " " ty not_null default)
    }
}
