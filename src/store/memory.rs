//! In-process record store.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{PayrollRecord, StoredFields};

use super::RecordStore;

#[derive(Debug)]
struct MemoryTable {
    rows: BTreeMap<i64, StoredFields>,
    next_id: i64,
}

impl Default for MemoryTable {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// A [`RecordStore`] that keeps rows in a map for the life of the process.
///
/// Ids are generated the way SQLite's `AUTOINCREMENT` does: ascending from 1
/// and never reused after a delete.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    table: Mutex<MemoryTable>,
}

impl MemoryRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> PayrollResult<usize> {
        Ok(self.lock()?.rows.len())
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> PayrollResult<bool> {
        Ok(self.lock()?.rows.is_empty())
    }

    fn lock(&self) -> PayrollResult<MutexGuard<'_, MemoryTable>> {
        self.table
            .lock()
            .map_err(|_| PayrollError::storage("memory store lock poisoned"))
    }
}

impl RecordStore for MemoryRecordStore {
    async fn initialize_schema(&self) -> PayrollResult<()> {
        self.lock().map(|_| ())
    }

    async fn save(&self, record: &mut PayrollRecord) -> PayrollResult<()> {
        let mut table = self.lock()?;
        let fields = record.stored_fields();

        match record.id() {
            None => {
                let id = table.next_id;
                table.rows.insert(id, fields);
                table.next_id += 1;
                record.assign_id(id);
            }
            Some(id) => match table.rows.get_mut(&id) {
                Some(row) => *row = fields,
                None => {
                    return Err(PayrollError::storage(format!(
                        "no payroll record with id {}",
                        id
                    )));
                }
            },
        }
        Ok(())
    }

    async fn delete(&self, record: &PayrollRecord) -> PayrollResult<()> {
        if let Some(id) = record.id() {
            self.lock()?.rows.remove(&id);
        }
        Ok(())
    }

    async fn load_all(&self) -> PayrollResult<Vec<PayrollRecord>> {
        let table = self.lock()?;
        table
            .rows
            .iter()
            .map(|(id, fields)| PayrollRecord::restore(*id, fields.clone()))
            .collect()
    }
}
