//! # Record Description
//!
//! This module defines how an in-memory record presents itself to the insert
//! machinery: which table it belongs to, which columns the caller supplies,
//! which columns the database generates, and where a generated key can be
//! written back.
//!
//! ## Column Groups
//!
//! - **Non-auto columns**: caller-supplied; their names and values are
//!   positionally aligned and equal in count.
//! - **Auto columns**: database-generated (autoincrement keys, defaulted
//!   timestamps); never sent in the VALUES list, only read back.
//!
//! ## Key Write-Back
//!
//! A record exposes at most one generated key field through [`KeySlot`]. The
//! slot is resolved fresh per call; [`KeyTarget`] holds a live mutable borrow
//! into the record, so the orchestrator never needs reflective field access.
//! The supported key kinds are exactly the 8 fixed-width integers; any other
//! declared kind surfaces as `KeySlot::Unsupported` with the type name.

use crate::types::OwnedValue;
use eyre::{bail, Result};
use smallvec::SmallVec;

/// Shape of a value handed to `Database::insert`.
///
/// Collections are rejected: insert maps exactly one record per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Single,
    Collection,
}

/// Ephemeral per-call view over a record, discarded once execution returns.
#[derive(Debug)]
pub struct Description {
    pub(crate) table: &'static str,
    pub(crate) non_auto_columns: SmallVec<[&'static str; 8]>,
    pub(crate) auto_columns: SmallVec<[&'static str; 4]>,
    pub(crate) values: Vec<OwnedValue>,
}

impl Description {
    pub fn new(
        table: &'static str,
        non_auto_columns: SmallVec<[&'static str; 8]>,
        values: Vec<OwnedValue>,
        auto_columns: SmallVec<[&'static str; 4]>,
    ) -> Result<Self> {
        if non_auto_columns.len() != values.len() {
            bail!(
                "record description for table '{}' is misaligned: {} columns but {} values",
                table,
                non_auto_columns.len(),
                values.len()
            );
        }
        Ok(Self {
            table,
            non_auto_columns,
            auto_columns,
            values,
        })
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn non_auto_columns(&self) -> &[&'static str] {
        &self.non_auto_columns
    }

    pub fn auto_columns(&self) -> &[&'static str] {
        &self.auto_columns
    }

    pub fn values(&self) -> &[OwnedValue] {
        &self.values
    }
}

/// Writable reference to a record's generated key field.
///
/// One variant per supported integer kind. `write` narrows the 64-bit id the
/// driver reports with native `as` semantics, matching what the database
/// itself would store into a narrower column.
#[derive(Debug)]
pub enum KeyTarget<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
}

impl KeyTarget<'_> {
    /// Name of the destination kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            KeyTarget::I8(_) => "i8",
            KeyTarget::I16(_) => "i16",
            KeyTarget::I32(_) => "i32",
            KeyTarget::I64(_) => "i64",
            KeyTarget::U8(_) => "u8",
            KeyTarget::U16(_) => "u16",
            KeyTarget::U32(_) => "u32",
            KeyTarget::U64(_) => "u64",
        }
    }

    /// Writes the generated id into the record, narrowing to the declared kind.
    pub fn write(self, id: i64) {
        match self {
            KeyTarget::I8(field) => *field = id as i8,
            KeyTarget::I16(field) => *field = id as i16,
            KeyTarget::I32(field) => *field = id as i32,
            KeyTarget::I64(field) => *field = id,
            KeyTarget::U8(field) => *field = id as u8,
            KeyTarget::U16(field) => *field = id as u16,
            KeyTarget::U32(field) => *field = id as u32,
            KeyTarget::U64(field) => *field = id as u64,
        }
    }
}

/// Resolution of a record's generated key field.
///
/// `None` is a valid state (tables without an autoincrement key), not an
/// error. `Unsupported` carries the declared type's name so the terminal
/// error can spell out what it cannot represent.
#[derive(Debug)]
pub enum KeySlot<'a> {
    None,
    Target(KeyTarget<'a>),
    Unsupported(&'static str),
}

/// A record the insert machinery can describe and write back into.
///
/// Implemented by the [`map_record!`](crate::map_record) macro for concrete
/// structs, and by blanket impls for `Vec<T>`, `[T]` and `[T; N]` that report
/// `Shape::Collection` so multi-record input fails with a deferred error
/// instead of building a statement.
pub trait Describe {
    /// Whether this value is a single record or a collection of them.
    fn shape(&self) -> Shape {
        Shape::Single
    }

    /// Builds the per-call description: table, column groups, values.
    fn description(&self) -> Result<Description>;

    /// Resolves the writable generated-key field, if the record declares one.
    fn key_slot(&mut self) -> KeySlot<'_> {
        KeySlot::None
    }

    /// Populates auto fields from a RETURNING row, positionally aligned with
    /// `columns`. Columns the record does not know are ignored.
    fn load_generated(&mut self, columns: &[&'static str], row: &[OwnedValue]) -> Result<()> {
        let _ = (columns, row);
        Ok(())
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn shape(&self) -> Shape {
        Shape::Collection
    }

    fn description(&self) -> Result<Description> {
        bail!("insert accepts only a single instance, got a collection");
    }
}

impl<T: Describe> Describe for [T] {
    fn shape(&self) -> Shape {
        Shape::Collection
    }

    fn description(&self) -> Result<Description> {
        bail!("insert accepts only a single instance, got a collection");
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn shape(&self) -> Shape {
        Shape::Collection
    }

    fn description(&self) -> Result<Description> {
        bail!("insert accepts only a single instance, got a collection");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn description_rejects_misaligned_columns_and_values() {
        let err = Description::new(
            "users",
            smallvec!["name", "email"],
            vec![OwnedValue::Text("ann".into())],
            smallvec![],
        )
        .unwrap_err();
        assert!(err.to_string().contains("misaligned"));
    }

    #[test]
    fn key_target_writes_exact_width() {
        let mut id = 0i64;
        KeyTarget::I64(&mut id).write(42);
        assert_eq!(id, 42);

        let mut small = 0u8;
        KeyTarget::U8(&mut small).write(300);
        assert_eq!(small, 300i64 as u8);

        let mut negative = 0i16;
        KeyTarget::I16(&mut negative).write(-7);
        assert_eq!(negative, -7);
    }

    #[test]
    fn key_target_reports_kind_names() {
        let mut id = 0u32;
        assert_eq!(KeyTarget::U32(&mut id).kind(), "u32");
    }

    #[test]
    fn collections_report_collection_shape() {
        struct Stub;
        impl Describe for Stub {
            fn description(&self) -> Result<Description> {
                Description::new("stub", smallvec![], vec![], smallvec![])
            }
        }

        let v: Vec<Stub> = vec![Stub, Stub];
        assert_eq!(v.shape(), Shape::Collection);
        assert!(v
            .description()
            .unwrap_err()
            .to_string()
            .contains("single instance"));

        let a = [Stub, Stub];
        assert_eq!(a.shape(), Shape::Collection);
    }
}
