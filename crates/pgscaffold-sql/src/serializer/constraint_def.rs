use super::{Comma, Ident, ToSql};

use crate::stmt;

impl ToSql for &stmt::ConstraintDef {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = Ident(&self.name);
        let constraint_type = &self.constraint_type;
        let columns = Comma(self.columns.iter().map(Ident));
        let references = self.references.as_ref();

        fmt!(f, "CONSTRAINT " name " " constraint_type " (" columns ")" references);
    }
}

impl ToSql for &stmt::References {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let table = &self.table;
        let column = Ident(&self.column);

        fmt!(
            f,
            "\n        REFERENCES " table " (" column ") MATCH SIMPLE"
            "\n        ON UPDATE NO ACTION ON DELETE NO ACTION"
        );
    }
}
