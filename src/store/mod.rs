//! Persistence for payroll records.
//!
//! [`RecordStore`] is the persistence contract: schema setup, save (insert
//! or update), delete and bulk load. A store is constructed once at startup
//! and passed to whatever needs it. Stores never cache; every call goes to
//! the backing storage, and each call is an independent atomic unit.
//!
//! Two implementations are provided: [`SqliteRecordStore`] for durable
//! storage and [`MemoryRecordStore`] for tests and throwaway sessions.

mod memory;
mod schema;
mod sqlite;

pub use memory::MemoryRecordStore;
pub use schema::EMPLOYEES_TABLE;
pub use sqlite::SqliteRecordStore;

use crate::error::PayrollResult;
use crate::models::PayrollRecord;

/// Durable CRUD for [`PayrollRecord`]s, keyed by id.
///
/// Every method fails with [`PayrollError::Storage`](crate::error::PayrollError::Storage)
/// on I/O failure, leaving the in-memory record unchanged.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    /// Ensures the backing table exists. Safe to call on every startup.
    async fn initialize_schema(&self) -> PayrollResult<()>;

    /// Inserts the record if it has no id, assigning the generated id back
    /// onto it; otherwise updates the row with the record's id.
    ///
    /// The id is only assigned once the insert has fully succeeded.
    async fn save(&self, record: &mut PayrollRecord) -> PayrollResult<()>;

    /// Removes the row with the record's id. Deleting an absent row, or a
    /// record that was never saved, succeeds without effect.
    async fn delete(&self, record: &PayrollRecord) -> PayrollResult<()>;

    /// Returns every stored record in ascending id order.
    ///
    /// Derived values are returned exactly as stored, not recomputed.
    async fn load_all(&self) -> PayrollResult<Vec<PayrollRecord>>;
}
