use super::{Formatter, ToSql};

/// A single-quoted string literal. Embedded quotes are doubled.
pub(super) struct Literal<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Literal<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('\'');
        f.dst.push_str(&self.0.as_ref().replace('\'', "''"));
        f.dst.push('\'');
    }
}
