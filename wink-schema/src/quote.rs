//! Identifier quoting for introspection queries.

/// Quote a MySQL identifier using backticks.
///
/// Escapes backticks by doubling them and wraps in backticks.
pub(crate) fn quote_mysql(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Quote a SQLite identifier using double quotes.
///
/// Escapes double quotes by doubling them and wraps in double quotes.
pub(crate) fn quote_sqlite(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_mysql() {
        assert_eq!(quote_mysql("posts"), "`posts`");
        assert_eq!(quote_mysql("order items"), "`order items`");
        assert_eq!(quote_mysql("we`ird"), "`we``ird`");
        assert_eq!(quote_mysql("x`; DROP TABLE users; --"), "`x``; DROP TABLE users; --`");
    }

    #[test]
    fn test_quote_sqlite() {
        assert_eq!(quote_sqlite("posts"), "\"posts\"");
        assert_eq!(quote_sqlite("select"), "\"select\"");
        assert_eq!(quote_sqlite("we\"ird"), "\"we\"\"ird\"");
    }
}
