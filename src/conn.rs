//! # Connection Abstraction
//!
//! Blocking, externally synchronized access to one database connection. The
//! mapping layer never pools, retries, or cancels; each call is one
//! round-trip that blocks until the driver answers or fails.

use crate::types::OwnedValue;
use eyre::Result;

/// Outcome of a plain (non-RETURNING) statement execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecResult {
    pub rows_affected: u64,
    /// Driver-reported last-inserted id. Signed 64-bit, as every driver's
    /// native lookup reports it.
    pub last_insert_id: i64,
}

/// One database connection, as seen by the statement layer.
pub trait Connection: Send {
    /// Executes a statement that returns no rows.
    fn execute(&mut self, sql: &str, params: &[OwnedValue]) -> Result<ExecResult>;

    /// Executes a statement with a RETURNING-style suffix and hands back the
    /// single returned row, positionally aligned with the suffix columns.
    fn query_returning(&mut self, sql: &str, params: &[OwnedValue]) -> Result<Vec<OwnedValue>>;
}
