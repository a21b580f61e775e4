use crate::adapter::Adapter;

/// MySQL dialect: `?` placeholders, backtick identifiers, generated keys read
/// back through `LAST_INSERT_ID`.
pub struct Mysql;

impl Adapter for Mysql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident)
    }
}
