use super::{Formatter, ToSql};

/// An SQL identifier. Written bare when PostgreSQL would read it back
/// unchanged, double-quoted otherwise.
pub(super) struct Ident<S>(pub(super) S);

/// Reserved words that cannot be used as bare column or table names.
const RESERVED: &[&str] = &[
    "all", "analyse", "analyze", "and", "any", "array", "as", "asc", "asymmetric", "both",
    "case", "cast", "check", "collate", "column", "constraint", "create", "current_catalog",
    "current_date", "current_role", "current_time", "current_timestamp", "current_user",
    "default", "deferrable", "desc", "distinct", "do", "else", "end", "except", "false",
    "fetch", "for", "foreign", "from", "grant", "group", "having", "in", "initially",
    "intersect", "into", "lateral", "leading", "limit", "localtime", "localtimestamp", "not",
    "null", "offset", "on", "only", "or", "order", "placing", "primary", "references",
    "returning", "select", "session_user", "some", "symmetric", "table", "then", "to",
    "trailing", "true", "union", "unique", "user", "using", "variadic", "when", "where",
    "window", "with",
];

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let ident = self.0.as_ref();

        if !needs_quotes(ident) {
            f.dst.push_str(ident);
            return;
        }

        f.dst.push('"');
        for c in ident.chars() {
            if c == '"' {
                f.dst.push('"');
            }
            f.dst.push(c);
        }
        f.dst.push('"');
    }
}

/// Quotes `ident` the way DDL output does.
pub fn quote_ident(ident: &str) -> String {
    let mut dst = String::new();
    Ident(ident).to_sql(&mut Formatter { dst: &mut dst });
    dst
}

fn needs_quotes(ident: &str) -> bool {
    let mut chars = ident.chars();

    let Some(first) = chars.next() else {
        return true;
    };

    if !(first.is_ascii_lowercase() || first == '_') {
        return true;
    }

    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '$') {
        return true;
    }

    RESERVED.contains(&ident)
}

#[cfg(test)]
mod tests {
    use super::{needs_quotes, quote_ident};

    #[test]
    fn plain_lower_case_names_are_bare() {
        assert!(!needs_quotes("users"));
        assert!(!needs_quotes("created_at"));
        assert!(!needs_quotes("_x1$"));
    }

    #[test]
    fn other_names_are_quoted() {
        assert!(needs_quotes(""));
        assert!(needs_quotes("Users"));
        assert!(needs_quotes("order item"));
        assert!(needs_quotes("1st"));
        assert!(needs_quotes("user"));
        assert!(needs_quotes("order"));
    }

    #[test]
    fn quoting_doubles_embedded_quotes() {
        assert_eq!(quote_ident("email"), "email");
        assert_eq!(quote_ident("order"), "\"order\"");
        assert_eq!(quote_ident("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
