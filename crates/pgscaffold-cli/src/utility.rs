/// Redact the password portion of a connection string for safe display.
///
/// URL form strings have their password replaced with `***`. In key/value
/// form the `password=` pair is replaced. Anything else is returned unchanged.
pub fn redact_password(conn_str: &str) -> String {
    if conn_str.contains("://") {
        return match url::Url::parse(conn_str) {
            Ok(mut parsed) => {
                if parsed.password().is_some() {
                    let _ = parsed.set_password(Some("***"));
                }
                parsed.to_string()
            }
            Err(_) => conn_str.to_string(),
        };
    }

    conn_str
        .split_whitespace()
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if key.eq_ignore_ascii_case("password") => format!("{key}=***"),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
