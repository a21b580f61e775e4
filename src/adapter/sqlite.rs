use crate::adapter::Adapter;

/// SQLite dialect: `?` placeholders, double-quoted identifiers, generated
/// keys read back through `last_insert_rowid`.
pub struct Sqlite;

impl Adapter for Sqlite {
    fn name(&self) -> &'static str {
        "sqlite"
    }
}
