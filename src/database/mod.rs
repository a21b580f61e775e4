//! # Database Entry Point
//!
//! `Database` pairs one dialect [`Adapter`](crate::adapter::Adapter) with one
//! [`Connection`](crate::conn::Connection). Both are fixed for its lifetime:
//! the adapter decides quoting, placeholders, and whether generated keys come
//! back inline via RETURNING; the connection performs the blocking
//! round-trips. Sharing a `Database` across threads is the caller's concern,
//! the mapping layer itself holds no locks.

mod insert;

pub use insert::Insert;

use crate::adapter::Adapter;
use crate::conn::Connection;
use crate::record::Describe;
use crate::sql::InsertStatement;

pub struct Database {
    pub(crate) adapter: Box<dyn Adapter>,
    pub(crate) conn: Box<dyn Connection>,
}

impl Database {
    pub fn new(adapter: Box<dyn Adapter>, conn: Box<dyn Connection>) -> Self {
        Self { adapter, conn }
    }

    /// Name of the active dialect.
    pub fn adapter_name(&self) -> &'static str {
        self.adapter.name()
    }

    /// Starts a bare INSERT statement for `table`.
    pub fn insert_into(&mut self, table: &str) -> InsertStatement<'_> {
        InsertStatement::new(self, table)
    }

    /// Maps `record` to an INSERT operation.
    ///
    /// Construction never fails loudly: a collection-shaped input or a record
    /// that cannot be described puts the error into the returned operation,
    /// where [`Insert::execute`] surfaces it.
    pub fn insert<'a, R>(&'a mut self, record: &'a mut R) -> Insert<'a, R>
    where
        R: Describe + ?Sized,
    {
        Insert::new(self, record)
    }
}
