//! SQLite-backed record store.
//!
//! Decimal amounts are persisted as REAL. They are converted through their
//! shortest decimal text form in both directions, so any value with up to
//! fifteen significant digits reads back exactly as it was written. A value
//! that would not read back exactly is refused at save time.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use sqlx::sqlite::{SqliteArguments, SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{FromRow, Sqlite};
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Deductions, PayrollRecord, StoredFields};

use super::RecordStore;
use super::schema::{
    COUNT_EMPLOYEES, CREATE_EMPLOYEES_TABLE, DELETE_EMPLOYEE, INSERT_EMPLOYEE, SELECT_EMPLOYEES,
    UPDATE_EMPLOYEE,
};

type Query<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// A [`RecordStore`] over a pooled SQLite database.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::StoreConfig;
/// use payroll_engine::models::PayrollRecord;
/// use payroll_engine::store::{RecordStore, SqliteRecordStore};
/// use rust_decimal::Decimal;
///
/// # async fn run() -> payroll_engine::error::PayrollResult<()> {
/// let store = SqliteRecordStore::connect(&StoreConfig::default()).await?;
/// store.initialize_schema().await?;
///
/// let mut record = PayrollRecord::new("Juan Dela Cruz", "Clerk", Decimal::from(50), 5)?;
/// store.save(&mut record).await?;
/// assert!(record.id().is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    /// Opens a connection pool as described by `config`.
    ///
    /// In-memory databases are held on a single connection that is never
    /// recycled, since each SQLite connection would otherwise see its own
    /// empty database.
    pub async fn connect(config: &StoreConfig) -> PayrollResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(config.create_if_missing);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .acquire_timeout(config.acquire_timeout());
        if config.is_in_memory() {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;
        debug!(database_url = %config.database_url, "Connected payroll record store");
        Ok(Self { pool })
    }

    /// Wraps an existing pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Number of stored records.
    pub async fn count(&self) -> PayrollResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(COUNT_EMPLOYEES)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl RecordStore for SqliteRecordStore {
    async fn initialize_schema(&self) -> PayrollResult<()> {
        sqlx::query(CREATE_EMPLOYEES_TABLE)
            .execute(&self.pool)
            .await?;
        debug!("Ensured employees table exists");
        Ok(())
    }

    async fn save(&self, record: &mut PayrollRecord) -> PayrollResult<()> {
        let row = EmployeeValues::try_from(record.stored_fields())?;

        match record.id() {
            None => {
                let result = row
                    .bind(sqlx::query(INSERT_EMPLOYEE))
                    .execute(&self.pool)
                    .await?;
                let id = result.last_insert_rowid();
                record.assign_id(id);
                debug!(id, "Inserted payroll record");
            }
            Some(id) => {
                let result = row
                    .bind(sqlx::query(UPDATE_EMPLOYEE))
                    .bind(id)
                    .execute(&self.pool)
                    .await?;
                let rows_affected = result.rows_affected();
                if rows_affected == 0 {
                    return Err(PayrollError::storage(format!(
                        "no payroll record with id {}",
                        id
                    )));
                }
                debug!(id, rows_affected, "Updated payroll record");
            }
        }
        Ok(())
    }

    async fn delete(&self, record: &PayrollRecord) -> PayrollResult<()> {
        let Some(id) = record.id() else {
            return Ok(());
        };

        let result = sqlx::query(DELETE_EMPLOYEE)
            .bind(id)
            .execute(&self.pool)
            .await?;
        debug!(id, rows_affected = result.rows_affected(), "Deleted payroll record");
        Ok(())
    }

    async fn load_all(&self) -> PayrollResult<Vec<PayrollRecord>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(SELECT_EMPLOYEES)
            .fetch_all(&self.pool)
            .await?;
        let records = rows
            .into_iter()
            .map(EmployeeRow::into_record)
            .collect::<PayrollResult<Vec<_>>>()?;
        debug!(count = records.len(), "Loaded payroll records");
        Ok(records)
    }
}

/// A row as read from the `employees` table. Every column but `id` and
/// `name` is nullable in the schema.
#[derive(Debug, FromRow)]
struct EmployeeRow {
    id: i64,
    name: String,
    position: Option<String>,
    base_salary: Option<f64>,
    hourly_rate: Option<f64>,
    hours_worked: Option<f64>,
    overtime_hours: Option<f64>,
    working_days: Option<i64>,
    sss: Option<f64>,
    philhealth: Option<f64>,
    pagibig: Option<f64>,
    tax: Option<f64>,
}

impl EmployeeRow {
    fn into_record(self) -> PayrollResult<PayrollRecord> {
        let id = self.id;
        let working_days = self.working_days.unwrap_or_default();
        let working_days = u32::try_from(working_days).map_err(|_| {
            PayrollError::storage(format!(
                "row {}: working_days {} is out of range",
                id, working_days
            ))
        })?;

        let fields = StoredFields {
            name: self.name,
            position: self.position.unwrap_or_default(),
            base_salary: from_real("base_salary", self.base_salary)?,
            hourly_rate: from_real("hourly_rate", self.hourly_rate)?,
            hours_worked: from_real("hours_worked", self.hours_worked)?,
            overtime_hours: from_real("overtime_hours", self.overtime_hours)?,
            working_days,
            deductions: Deductions {
                sss: from_real("sss", self.sss)?,
                philhealth: from_real("philhealth", self.philhealth)?,
                pagibig: from_real("pagibig", self.pagibig)?,
                tax: from_real("tax", self.tax)?,
            },
        };

        PayrollRecord::restore(id, fields)
            .map_err(|err| PayrollError::storage(format!("row {}: {}", id, err)))
    }
}

/// Persisted fields converted to SQLite bind values.
#[derive(Debug)]
struct EmployeeValues {
    name: String,
    position: String,
    base_salary: f64,
    hourly_rate: f64,
    hours_worked: f64,
    overtime_hours: f64,
    working_days: i64,
    sss: f64,
    philhealth: f64,
    pagibig: f64,
    tax: f64,
}

impl EmployeeValues {
    fn bind(self, query: Query<'_>) -> Query<'_> {
        query
            .bind(self.name)
            .bind(self.position)
            .bind(self.base_salary)
            .bind(self.hourly_rate)
            .bind(self.hours_worked)
            .bind(self.overtime_hours)
            .bind(self.working_days)
            .bind(self.sss)
            .bind(self.philhealth)
            .bind(self.pagibig)
            .bind(self.tax)
    }
}

impl TryFrom<StoredFields> for EmployeeValues {
    type Error = PayrollError;

    fn try_from(fields: StoredFields) -> PayrollResult<Self> {
        Ok(Self {
            base_salary: to_real("base_salary", fields.base_salary)?,
            hourly_rate: to_real("hourly_rate", fields.hourly_rate)?,
            hours_worked: to_real("hours_worked", fields.hours_worked)?,
            overtime_hours: to_real("overtime_hours", fields.overtime_hours)?,
            working_days: i64::from(fields.working_days),
            sss: to_real("sss", fields.deductions.sss)?,
            philhealth: to_real("philhealth", fields.deductions.philhealth)?,
            pagibig: to_real("pagibig", fields.deductions.pagibig)?,
            tax: to_real("tax", fields.deductions.tax)?,
            name: fields.name,
            position: fields.position,
        })
    }
}

fn to_real(column: &str, value: Decimal) -> PayrollResult<f64> {
    let real = value.to_string().parse::<f64>().ok();
    match real {
        Some(real) if from_real(column, Some(real)).is_ok_and(|back| back == value) => Ok(real),
        _ => Err(PayrollError::storage(format!(
            "{} value {} cannot be stored exactly as REAL",
            column, value
        ))),
    }
}

// NULL reads as zero, matching how the column would have been written.
fn from_real(column: &str, value: Option<f64>) -> PayrollResult<Decimal> {
    let Some(value) = value else {
        return Ok(Decimal::ZERO);
    };

    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
        .ok_or_else(|| {
            PayrollError::storage(format!("{} value {} is not a valid amount", column, value))
        })
}
