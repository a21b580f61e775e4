use crate::database::Database;
use crate::types::OwnedValue;
use eyre::{bail, Result};
use log::{debug, trace};

/// Fluent INSERT statement bound to one table.
///
/// `columns` and `values` append on every call; a statement is meant to be
/// configured once and executed once. Rendering happens at execution time,
/// so the column and value lists must be equal in count by then.
pub struct InsertStatement<'d> {
    pub(crate) db: &'d mut Database,
    table: String,
    columns: Vec<String>,
    values: Vec<OwnedValue>,
    suffix: Option<String>,
}

impl<'d> InsertStatement<'d> {
    pub(crate) fn new(db: &'d mut Database, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
            columns: Vec::new(),
            values: Vec::new(),
            suffix: None,
        }
    }

    /// Appends column names. Names are quoted with the active dialect.
    pub fn columns<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let adapter = &self.db.adapter;
        self.columns
            .extend(names.into_iter().map(|n| adapter.quote_identifier(n.as_ref())));
        self
    }

    /// Appends values, positionally aligned with the columns.
    pub fn values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OwnedValue>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Sets a trailing clause, e.g. a RETURNING suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Renders the statement with the active dialect.
    pub fn to_sql(&self) -> Result<String> {
        if self.columns.is_empty() {
            bail!("insert into '{}' has no columns", self.table);
        }
        if self.columns.len() != self.values.len() {
            bail!(
                "insert into '{}' has {} columns but {} values",
                self.table,
                self.columns.len(),
                self.values.len()
            );
        }

        let adapter = &self.db.adapter;
        let placeholders: Vec<String> = (1..=self.values.len())
            .map(|ordinal| adapter.placeholder(ordinal))
            .collect();

        let mut sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            adapter.quote_identifier(&self.table),
            self.columns.join(", "),
            placeholders.join(", "),
        );
        if let Some(suffix) = self.suffix.as_deref() {
            if !suffix.is_empty() {
                sql.push(' ');
                sql.push_str(suffix);
            }
        }
        Ok(sql)
    }

    /// Executes the plain insert path and returns the driver-reported
    /// last-inserted id.
    pub fn execute(&mut self) -> Result<i64> {
        let sql = self.to_sql()?;
        debug!("executing insert: {}", sql);
        trace!("params: {:?}", self.values);
        let result = self.db.conn.execute(&sql, &self.values)?;
        Ok(result.last_insert_id)
    }

    /// Executes the insert expecting the suffix to return one row of
    /// generated column values.
    pub fn execute_returning(&mut self) -> Result<Vec<OwnedValue>> {
        let sql = self.to_sql()?;
        debug!("executing insert with returning: {}", sql);
        trace!("params: {:?}", self.values);
        self.db.conn.query_returning(&sql, &self.values)
    }
}

#[cfg(test)]
mod tests {
    use crate::adapter::{Mysql, Postgres, Sqlite};
    use crate::conn::{Connection, ExecResult};
    use crate::database::Database;
    use crate::types::OwnedValue;
    use eyre::Result;

    struct NullConn;

    impl Connection for NullConn {
        fn execute(&mut self, _sql: &str, _params: &[OwnedValue]) -> Result<ExecResult> {
            Ok(ExecResult {
                rows_affected: 1,
                last_insert_id: 1,
            })
        }

        fn query_returning(
            &mut self,
            _sql: &str,
            _params: &[OwnedValue],
        ) -> Result<Vec<OwnedValue>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn renders_postgres_placeholders_and_quoting() {
        let mut db = Database::new(Box::new(Postgres), Box::new(NullConn));
        let stmt = db
            .insert_into("users")
            .columns(["name", "email"])
            .values([OwnedValue::from("ann"), OwnedValue::from("a@b")]);

        assert_eq!(
            stmt.to_sql().unwrap(),
            "INSERT INTO \"users\" (\"name\", \"email\") VALUES ($1, $2)"
        );
    }

    #[test]
    fn renders_mysql_placeholders_and_quoting() {
        let mut db = Database::new(Box::new(Mysql), Box::new(NullConn));
        let stmt = db
            .insert_into("users")
            .columns(["name"])
            .values([OwnedValue::from("ann")]);

        assert_eq!(
            stmt.to_sql().unwrap(),
            "INSERT INTO `users` (`name`) VALUES (?)"
        );
    }

    #[test]
    fn suffix_is_appended_after_values() {
        let mut db = Database::new(Box::new(Postgres), Box::new(NullConn));
        let stmt = db
            .insert_into("users")
            .columns(["name"])
            .values([OwnedValue::from("ann")])
            .suffix("RETURNING \"id\"");

        assert_eq!(
            stmt.to_sql().unwrap(),
            "INSERT INTO \"users\" (\"name\") VALUES ($1) RETURNING \"id\""
        );
    }

    #[test]
    fn empty_suffix_is_not_appended() {
        let mut db = Database::new(Box::new(Sqlite), Box::new(NullConn));
        let stmt = db
            .insert_into("t")
            .columns(["a"])
            .values([OwnedValue::Int(1)])
            .suffix("");

        assert_eq!(stmt.to_sql().unwrap(), "INSERT INTO \"t\" (\"a\") VALUES (?)");
    }

    #[test]
    fn columns_and_values_append_across_calls() {
        let mut db = Database::new(Box::new(Sqlite), Box::new(NullConn));
        let stmt = db
            .insert_into("t")
            .columns(["a"])
            .columns(["b"])
            .values([OwnedValue::Int(1)])
            .values([OwnedValue::Int(2)]);

        assert_eq!(
            stmt.to_sql().unwrap(),
            "INSERT INTO \"t\" (\"a\", \"b\") VALUES (?, ?)"
        );
    }

    #[test]
    fn rejects_empty_and_misaligned_statements() {
        let mut db = Database::new(Box::new(Sqlite), Box::new(NullConn));
        let err = db.insert_into("t").to_sql().unwrap_err();
        assert!(err.to_string().contains("no columns"));

        let mut db = Database::new(Box::new(Sqlite), Box::new(NullConn));
        let err = db
            .insert_into("t")
            .columns(["a", "b"])
            .values([OwnedValue::Int(1)])
            .to_sql()
            .unwrap_err();
        assert!(err.to_string().contains("2 columns but 1 values"));
    }
}
