//! # SQL Statement Building
//!
//! Dialect-neutral INSERT assembly. Statements are built fluently, rendered
//! once with the active adapter's quoting and placeholder syntax, and
//! executed through the [`Connection`](crate::conn::Connection).

mod insert;

pub use insert::InsertStatement;
