//! # structdb - Struct-to-SQL Data Mapping
//!
//! structdb maps plain Rust structs to relational INSERT statements and
//! propagates server-generated key values back into the struct. It is the
//! mapping core of a data layer: statement text, dialect quoting, and
//! generated-key retrieval live here; the actual driver round-trip is behind
//! a narrow [`Connection`](conn::Connection) trait.
//!
//! ## Quick Start
//!
//! ```ignore
//! use structdb::{map_record, Database, Sqlite};
//!
//! pub struct User {
//!     pub id: i64,
//!     pub name: String,
//! }
//!
//! map_record!(User, "users", {
//!     key id: i64 => "id",
//!     col name: String => "name",
//! });
//!
//! let mut db = Database::new(Box::new(Sqlite), Box::new(conn));
//! let mut user = User { id: 0, name: "Ann".into() };
//! db.insert(&mut user).execute()?;
//! assert_ne!(user.id, 0); // populated from the driver
//! ```
//!
//! ## Generated-Key Strategies
//!
//! How the generated key comes back depends on the adapter, probed once per
//! operation:
//!
//! - **RETURNING** (e.g. PostgreSQL): one round-trip; the statement carries a
//!   dialect suffix naming every auto column and the returned row populates
//!   all of them.
//! - **Last-inserted id** (e.g. SQLite, MySQL): the plain insert path runs,
//!   then the driver-reported 64-bit id is narrowed into the record's
//!   declared key kind. Records without a key field skip this silently.
//!
//! ## Module Overview
//!
//! - [`adapter`]: dialect objects and the RETURNING capability probe
//! - [`conn`]: blocking connection abstraction
//! - [`database`]: entry point and the insert orchestrator
//! - [`record`]: record description, key slots, typed write-back
//! - [`sql`]: INSERT statement assembly
//! - [`types`]: owned runtime values and field conversions

#[macro_use]
mod macros;

pub mod adapter;
pub mod conn;
pub mod database;
pub mod record;
pub mod sql;
pub mod types;

pub use adapter::{Adapter, InsertReturningSuffixer, Mysql, Postgres, Sqlite};
pub use conn::{Connection, ExecResult};
pub use database::{Database, Insert};
pub use record::{Describe, Description, KeySlot, KeyTarget, Shape};
pub use sql::InsertStatement;
pub use types::{FromValue, OwnedValue};
