use crate::adapter::{Adapter, InsertReturningSuffixer};

/// PostgreSQL dialect: `$n` placeholders, double-quoted identifiers, and
/// native RETURNING support.
pub struct Postgres;

impl Adapter for Postgres {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn placeholder(&self, ordinal: usize) -> String {
        format!("${}", ordinal)
    }

    fn returning_suffixer(&self) -> Option<&dyn InsertReturningSuffixer> {
        Some(self)
    }
}

impl InsertReturningSuffixer for Postgres {
    fn insert_returning_suffix(&self, auto_columns: &[&str]) -> String {
        let quoted: Vec<String> = auto_columns
            .iter()
            .map(|c| self.quote_identifier(c))
            .collect();
        format!("RETURNING {}", quoted.join(", "))
    }
}
