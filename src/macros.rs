//! # Record Mapping Macro
//!
//! This module provides `map_record!`, which implements the
//! [`Describe`](crate::record::Describe) trait for a plain struct from a
//! compact column listing.
//!
//! ## map_record!
//!
//! Each line maps one struct field to one column and carries a marker:
//!
//! - `col`: caller-supplied column, sent in the VALUES list
//! - `auto`: database-generated column, only read back via RETURNING
//! - `key`: the generated key column; also written back from the driver's
//!   last-inserted id when the adapter has no RETURNING support
//!
//! Field lines are comma-terminated, including the last one.
//!
//! ### Usage
//!
//! ```ignore
//! pub struct User {
//!     pub id: i64,
//!     pub name: String,
//! }
//!
//! map_record!(User, "users", {
//!     key id: i64 => "id",
//!     col name: String => "name",
//! });
//! ```
//!
//! The key type is matched against the 8 fixed-width integer kinds at
//! expansion time; any other type expands to `KeySlot::Unsupported` carrying
//! the type name, so the mismatch surfaces as a runtime error on execution
//! rather than silently mis-writing the key.

/// Implements [`Describe`](crate::record::Describe) for a struct from a
/// column listing. See the module documentation for the field syntax.
#[macro_export]
macro_rules! map_record {
    ($ty:ident, $table:literal, { $($fields:tt)* }) => {
        impl $crate::record::Describe for $ty {
            #[allow(unused_mut)]
            fn description(&self) -> ::eyre::Result<$crate::record::Description> {
                let mut columns: ::smallvec::SmallVec<[&'static str; 8]> =
                    ::smallvec::SmallVec::new();
                let mut values: ::std::vec::Vec<$crate::types::OwnedValue> =
                    ::std::vec::Vec::new();
                let mut auto_columns: ::smallvec::SmallVec<[&'static str; 4]> =
                    ::smallvec::SmallVec::new();
                $crate::map_record!(@describe self, columns, values, auto_columns, $($fields)*);
                $crate::record::Description::new($table, columns, values, auto_columns)
            }

            fn key_slot(&mut self) -> $crate::record::KeySlot<'_> {
                $crate::map_record!(@key self, $($fields)*)
            }

            fn load_generated(
                &mut self,
                columns: &[&'static str],
                row: &[$crate::types::OwnedValue],
            ) -> ::eyre::Result<()> {
                for (_name, _value) in columns.iter().zip(row.iter()) {
                    $crate::map_record!(@load self, _name, _value, $($fields)*);
                }
                Ok(())
            }
        }
    };

    // description: non-auto columns collect name + value, auto/key collect name only
    (@describe $s:ident, $cols:ident, $vals:ident, $auto:ident,) => {};
    (@describe $s:ident, $cols:ident, $vals:ident, $auto:ident,
        col $f:ident : $t:ty => $c:literal, $($rest:tt)*) => {
        $cols.push($c);
        $vals.push($crate::types::OwnedValue::from(::std::clone::Clone::clone(&$s.$f)));
        $crate::map_record!(@describe $s, $cols, $vals, $auto, $($rest)*);
    };
    (@describe $s:ident, $cols:ident, $vals:ident, $auto:ident,
        auto $f:ident : $t:ty => $c:literal, $($rest:tt)*) => {
        $auto.push($c);
        $crate::map_record!(@describe $s, $cols, $vals, $auto, $($rest)*);
    };
    (@describe $s:ident, $cols:ident, $vals:ident, $auto:ident,
        key $f:ident : $t:ty => $c:literal, $($rest:tt)*) => {
        $auto.push($c);
        $crate::map_record!(@describe $s, $cols, $vals, $auto, $($rest)*);
    };

    // key slot: first `key` field wins; supported kinds matched by token
    (@key $s:ident,) => { $crate::record::KeySlot::None };
    (@key $s:ident, key $f:ident : i8 => $c:literal, $($rest:tt)*) => {
        $crate::record::KeySlot::Target($crate::record::KeyTarget::I8(&mut $s.$f))
    };
    (@key $s:ident, key $f:ident : i16 => $c:literal, $($rest:tt)*) => {
        $crate::record::KeySlot::Target($crate::record::KeyTarget::I16(&mut $s.$f))
    };
    (@key $s:ident, key $f:ident : i32 => $c:literal, $($rest:tt)*) => {
        $crate::record::KeySlot::Target($crate::record::KeyTarget::I32(&mut $s.$f))
    };
    (@key $s:ident, key $f:ident : i64 => $c:literal, $($rest:tt)*) => {
        $crate::record::KeySlot::Target($crate::record::KeyTarget::I64(&mut $s.$f))
    };
    (@key $s:ident, key $f:ident : u8 => $c:literal, $($rest:tt)*) => {
        $crate::record::KeySlot::Target($crate::record::KeyTarget::U8(&mut $s.$f))
    };
    (@key $s:ident, key $f:ident : u16 => $c:literal, $($rest:tt)*) => {
        $crate::record::KeySlot::Target($crate::record::KeyTarget::U16(&mut $s.$f))
    };
    (@key $s:ident, key $f:ident : u32 => $c:literal, $($rest:tt)*) => {
        $crate::record::KeySlot::Target($crate::record::KeyTarget::U32(&mut $s.$f))
    };
    (@key $s:ident, key $f:ident : u64 => $c:literal, $($rest:tt)*) => {
        $crate::record::KeySlot::Target($crate::record::KeyTarget::U64(&mut $s.$f))
    };
    (@key $s:ident, key $f:ident : $t:ty => $c:literal, $($rest:tt)*) => {
        $crate::record::KeySlot::Unsupported(::std::stringify!($t))
    };
    (@key $s:ident, col $f:ident : $t:ty => $c:literal, $($rest:tt)*) => {
        $crate::map_record!(@key $s, $($rest)*)
    };
    (@key $s:ident, auto $f:ident : $t:ty => $c:literal, $($rest:tt)*) => {
        $crate::map_record!(@key $s, $($rest)*)
    };

    // RETURNING write-back: auto and key fields load from their column,
    // caller-supplied columns are skipped
    (@load $s:ident, $n:ident, $v:ident,) => {};
    (@load $s:ident, $n:ident, $v:ident,
        col $f:ident : $t:ty => $c:literal, $($rest:tt)*) => {
        $crate::map_record!(@load $s, $n, $v, $($rest)*);
    };
    (@load $s:ident, $n:ident, $v:ident,
        auto $f:ident : $t:ty => $c:literal, $($rest:tt)*) => {
        if *$n == $c {
            $s.$f = <$t as $crate::types::FromValue>::from_value(
                ::std::clone::Clone::clone($v),
            )?;
        }
        $crate::map_record!(@load $s, $n, $v, $($rest)*);
    };
    (@load $s:ident, $n:ident, $v:ident,
        key $f:ident : $t:ty => $c:literal, $($rest:tt)*) => {
        if *$n == $c {
            $s.$f = <$t as $crate::types::FromValue>::from_value(
                ::std::clone::Clone::clone($v),
            )?;
        }
        $crate::map_record!(@load $s, $n, $v, $($rest)*);
    };
}
