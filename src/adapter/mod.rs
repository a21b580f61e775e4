//! # Adapter Dialects
//!
//! Per-driver dialect objects: identifier quoting, placeholder syntax, and
//! the optional RETURNING capability. An adapter is fixed for the lifetime of
//! a [`Database`](crate::database::Database); the capability is a property of
//! the driver, not of any single operation, and its absence is a valid state.

mod mysql;
mod postgres;
mod sqlite;

pub use mysql::Mysql;
pub use postgres::Postgres;
pub use sqlite::Sqlite;

/// SQL dialect for one database driver.
pub trait Adapter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Quotes an identifier (table or column name) for this dialect.
    fn quote_identifier(&self, ident: &str) -> String {
        format!("\"{}\"", ident)
    }

    /// Renders the parameter placeholder for the 1-based ordinal.
    fn placeholder(&self, ordinal: usize) -> String {
        let _ = ordinal;
        "?".to_string()
    }

    /// Probes for the RETURNING capability. `None` means the driver only
    /// supports a post-insert last-inserted-id lookup.
    fn returning_suffixer(&self) -> Option<&dyn InsertReturningSuffixer> {
        None
    }
}

/// Capability: produce a dialect-specific suffix that makes an INSERT return
/// the generated columns inline.
pub trait InsertReturningSuffixer {
    fn insert_returning_suffix(&self, auto_columns: &[&str]) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_exposes_returning_capability() {
        let adapter = Postgres;
        let suffixer = adapter.returning_suffixer().unwrap();
        assert_eq!(
            suffixer.insert_returning_suffix(&["id", "created_at"]),
            "RETURNING \"id\", \"created_at\""
        );
    }

    #[test]
    fn sqlite_and_mysql_lack_returning_capability() {
        assert!(Sqlite.returning_suffixer().is_none());
        assert!(Mysql.returning_suffixer().is_none());
    }

    #[test]
    fn placeholders_follow_dialect() {
        assert_eq!(Postgres.placeholder(1), "$1");
        assert_eq!(Postgres.placeholder(3), "$3");
        assert_eq!(Sqlite.placeholder(3), "?");
        assert_eq!(Mysql.placeholder(1), "?");
    }

    #[test]
    fn identifier_quoting_follows_dialect() {
        assert_eq!(Postgres.quote_identifier("users"), "\"users\"");
        assert_eq!(Sqlite.quote_identifier("users"), "\"users\"");
        assert_eq!(Mysql.quote_identifier("users"), "`users`");
    }
}
