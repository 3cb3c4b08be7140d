use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToTitleCase, ToUpperCamelCase};
use serde::{Deserialize, Serialize};

/// The names derived from one raw database identifier.
///
/// Every schema, table, column, constraint, and index name goes through the
/// same transform. Derivations always start from the raw identifier; they are
/// never chained off each other's output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    /// PascalCase, e.g. `display_name` -> `DisplayName`.
    pub code_name: String,

    /// Space separated words, e.g. `display_name` -> `Display Name`.
    pub display_name: String,

    /// camelCase, e.g. `display_name` -> `displayName`.
    pub json_name: String,

    /// Hyphen separated lower case, e.g. `display_name` -> `display-name`.
    pub slug_name: String,

    /// Lower snake_case, used for module and field names in generated Rust.
    pub snake_name: String,
}

impl Name {
    pub fn new(raw: &str) -> Self {
        Self {
            code_name: code_name(raw),
            display_name: display_name(raw),
            json_name: json_name(raw),
            slug_name: slug_name(raw),
            snake_name: snake_name(raw),
        }
    }

    /// The snake name, escaped so it is a legal Rust field identifier.
    pub fn field_name(&self) -> String {
        field_name(&self.snake_name)
    }
}

// Word boundaries are underscores, other punctuation, and case changes, so
// `account_id`, `ACCOUNT_ID` and `AccountId` all split into the same words.
// Each word is capitalized with the rest lower-cased: `id` and `ID` both
// become `Id`, never `ID`.

pub fn code_name(raw: &str) -> String {
    raw.to_upper_camel_case()
}

pub fn display_name(raw: &str) -> String {
    raw.to_title_case()
}

pub fn json_name(raw: &str) -> String {
    raw.to_lower_camel_case()
}

pub fn slug_name(raw: &str) -> String {
    raw.to_kebab_case()
}

pub fn snake_name(raw: &str) -> String {
    raw.to_snake_case()
}

/// Pluralizes the final word of a display or slug name.
///
/// `Order Item` -> `Order Items`, `order-item` -> `order-items`,
/// `category` -> `categories`.
pub fn plural(value: &str) -> String {
    let split = value
        .rfind([' ', '-', '_'])
        .map(|i| i + 1)
        .unwrap_or(0);
    let (head, last) = value.split_at(split);

    if last.is_empty() {
        return value.to_string();
    }

    format!("{head}{}", pluralizer::pluralize(last, 2, false))
}

const STRICT_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where", "while",
    "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be raw identifiers.
const PATH_KEYWORDS: &[&str] = &["self", "super", "crate"];

/// Escapes a snake case name so it is a legal Rust identifier: keywords
/// become raw identifiers, and names that cannot be raw get a suffix.
pub fn field_name(snake: &str) -> String {
    if PATH_KEYWORDS.contains(&snake) {
        format!("{snake}_")
    } else if STRICT_KEYWORDS.contains(&snake) {
        format!("r#{snake}")
    } else if snake.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{snake}")
    } else {
        snake.to_string()
    }
}
