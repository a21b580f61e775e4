//! # Insert Orchestration
//!
//! This module wires a record description, the statement builder, and the
//! adapter capability into one insert execution:
//!
//! 1. Describe the record: table, non-auto columns with aligned values, auto
//!    columns.
//! 2. Attach quoted columns and values to the statement.
//! 3. Probe the adapter for RETURNING support, once.
//! 4. With the capability: attach the suffix built from all auto columns,
//!    execute, and load every auto field from the returned row.
//! 5. Without it: execute, fetch the driver's last-inserted id, and narrow it
//!    into the record's key field if one is declared.
//!
//! Construction errors (collection input, undescribable record) are stored in
//! the operation and surfaced by `execute`; nothing reaches the database in
//! that case. Every error propagates to the caller verbatim, no retry, no
//! partial success: either all auto fields are populated, or exactly the key
//! field is, or nothing is and an error comes back.

use crate::database::Database;
use crate::record::{Describe, Description, KeySlot, Shape};
use crate::sql::InsertStatement;
use eyre::{bail, eyre, Result};
use log::debug;

/// One insert operation for one record. Single-use: `execute` consumes it.
pub struct Insert<'a, R: Describe + ?Sized> {
    record: &'a mut R,
    state: State<'a>,
}

enum State<'a> {
    Ready {
        stmt: InsertStatement<'a>,
        desc: Description,
    },
    Failed(eyre::Report),
}

impl<'a, R: Describe + ?Sized> Insert<'a, R> {
    pub(crate) fn new(db: &'a mut Database, record: &'a mut R) -> Self {
        let state = match record.shape() {
            Shape::Collection => {
                State::Failed(eyre!("insert accepts only a single instance, got a collection"))
            }
            Shape::Single => match record.description() {
                Ok(desc) => {
                    let stmt = InsertStatement::new(db, desc.table());
                    State::Ready { stmt, desc }
                }
                Err(err) => State::Failed(err),
            },
        };
        Self { record, state }
    }

    /// Executes the insert and writes generated values back into the record.
    pub fn execute(self) -> Result<()> {
        let (stmt, desc) = match self.state {
            State::Ready { stmt, desc } => (stmt, desc),
            State::Failed(err) => return Err(err),
        };

        let auto_columns = desc.auto_columns;
        let mut stmt = stmt.columns(&desc.non_auto_columns).values(desc.values);

        let suffix = stmt
            .db
            .adapter
            .returning_suffixer()
            .map(|suffixer| suffixer.insert_returning_suffix(&auto_columns));

        match suffix {
            Some(suffix) => {
                debug!("insert into '{}': returning strategy", desc.table);
                let row = stmt.suffix(suffix).execute_returning()?;
                self.record.load_generated(&auto_columns, &row)
            }
            None => {
                debug!("insert into '{}': last-inserted-id strategy", desc.table);
                let id = stmt.execute()?;
                match self.record.key_slot() {
                    KeySlot::None => Ok(()),
                    KeySlot::Target(target) => {
                        debug!("writing generated id {} into {} key field", id, target.kind());
                        target.write(id);
                        Ok(())
                    }
                    KeySlot::Unsupported(ty) => {
                        bail!("unsupported type for key: {}", ty)
                    }
                }
            }
        }
    }
}
