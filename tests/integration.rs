//! Integration tests for the payroll engine.
//!
//! This test suite drives records through both record stores:
//! - Schema initialization
//! - Insert with id assignment
//! - Update in place
//! - Delete, including absent rows
//! - Bulk load without recomputation
//! - Reports over loaded records

use rust_decimal::Decimal;
use std::str::FromStr;

use payroll_engine::calculation::generate_payroll_report;
use payroll_engine::config::{ConfigLoader, StoreConfig};
use payroll_engine::models::{PayPeriod, PayrollRecord};
use payroll_engine::store::{MemoryRecordStore, RecordStore, SqliteRecordStore};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn create_sqlite_store() -> SqliteRecordStore {
    let store = SqliteRecordStore::connect(&StoreConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    store.initialize_schema().await.unwrap();
    store
}

async fn create_memory_store() -> MemoryRecordStore {
    let store = MemoryRecordStore::new();
    store.initialize_schema().await.unwrap();
    store
}

fn create_clerk() -> PayrollRecord {
    let mut record = PayrollRecord::new("Maria Santos", "Clerk", dec("50"), 5).unwrap();
    record.set_hours_worked(dec("8")).unwrap();
    record
}

fn create_engineer() -> PayrollRecord {
    let mut record = PayrollRecord::new("Jose Rizal", "Engineer", dec("187.25"), 6).unwrap();
    record.set_hours_worked(dec("10")).unwrap();
    record.set_overtime_hours(dec("1.5")).unwrap();
    record
}

// =============================================================================
// Shared Scenarios
// =============================================================================

async fn round_trip_preserves_every_field<S: RecordStore>(store: &S) {
    let mut record = create_engineer();
    store.save(&mut record).await.unwrap();

    let id = record.id().expect("id assigned on insert");
    assert!(id > 0);

    let loaded = store.load_all().await.unwrap();
    assert_eq!(loaded.len(), 1);
    let loaded = &loaded[0];
    assert_eq!(loaded.id(), Some(id));
    assert_eq!(loaded.name(), "Jose Rizal");
    assert_eq!(loaded.position(), "Engineer");
    assert_eq!(loaded.hourly_rate(), dec("187.25"));
    assert_eq!(loaded.hours_worked(), dec("10"));
    assert_eq!(loaded.overtime_hours(), dec("1.5"));
    assert_eq!(loaded.working_days(), 6);
    assert_eq!(loaded.base_salary(), record.base_salary());
    assert_eq!(loaded.sss(), record.sss());
    assert_eq!(loaded.philhealth(), record.philhealth());
    assert_eq!(loaded.pagibig(), record.pagibig());
    assert_eq!(loaded.tax(), record.tax());
}

async fn update_overwrites_in_place<S: RecordStore>(store: &S) {
    let mut clerk = create_clerk();
    let mut engineer = create_engineer();
    store.save(&mut clerk).await.unwrap();
    store.save(&mut engineer).await.unwrap();
    let clerk_id = clerk.id();

    clerk.set_hours_worked(dec("12")).unwrap();
    store.save(&mut clerk).await.unwrap();

    assert_eq!(clerk.id(), clerk_id);
    let loaded = store.load_all().await.unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0], clerk);
    assert_eq!(loaded[0].monthly_gross_pay(), dec("12000"));
    assert_eq!(loaded[1], engineer);
}

async fn delete_removes_only_target<S: RecordStore>(store: &S) {
    let mut clerk = create_clerk();
    let mut engineer = create_engineer();
    store.save(&mut clerk).await.unwrap();
    store.save(&mut engineer).await.unwrap();

    store.delete(&clerk).await.unwrap();
    store.delete(&clerk).await.unwrap();

    let loaded = store.load_all().await.unwrap();
    assert_eq!(loaded, vec![engineer]);
}

async fn update_after_delete_is_storage_error<S: RecordStore>(store: &S) {
    let mut clerk = create_clerk();
    store.save(&mut clerk).await.unwrap();
    store.delete(&clerk).await.unwrap();

    let err = store.save(&mut clerk).await.unwrap_err();
    assert!(err.is_storage());
    assert!(store.load_all().await.unwrap().is_empty());
}

async fn load_orders_by_id<S: RecordStore>(store: &S) {
    let mut ids = Vec::new();
    for name in ["Ana", "Ben", "Cora", "Dante"] {
        let mut record = PayrollRecord::new(name, "Staff", dec("75"), 5).unwrap();
        store.save(&mut record).await.unwrap();
        ids.push(record.id().unwrap());
    }

    let loaded: Vec<i64> = store
        .load_all()
        .await
        .unwrap()
        .iter()
        .filter_map(PayrollRecord::id)
        .collect();
    assert_eq!(loaded, ids);
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

// =============================================================================
// SQLite Store
// =============================================================================

#[tokio::test]
async fn test_sqlite_round_trip() {
    round_trip_preserves_every_field(&create_sqlite_store().await).await;
}

#[tokio::test]
async fn test_sqlite_update() {
    update_overwrites_in_place(&create_sqlite_store().await).await;
}

#[tokio::test]
async fn test_sqlite_delete() {
    delete_removes_only_target(&create_sqlite_store().await).await;
}

#[tokio::test]
async fn test_sqlite_update_after_delete() {
    update_after_delete_is_storage_error(&create_sqlite_store().await).await;
}

#[tokio::test]
async fn test_sqlite_load_order() {
    load_orders_by_id(&create_sqlite_store().await).await;
}

#[tokio::test]
async fn test_sqlite_schema_initialization_keeps_rows() {
    let store = create_sqlite_store().await;
    let mut record = create_clerk();
    store.save(&mut record).await.unwrap();

    store.initialize_schema().await.unwrap();

    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_sqlite_load_does_not_recompute() {
    let store = create_sqlite_store().await;
    let mut record = create_clerk();
    store.save(&mut record).await.unwrap();

    // Stored derived values win over what the inputs would produce.
    sqlx::query("UPDATE employees SET sss = 999.99, hourly_rate = 60 WHERE id = ?")
        .bind(record.id())
        .execute(store.pool())
        .await
        .unwrap();

    let loaded = store.load_all().await.unwrap();
    assert_eq!(loaded[0].sss(), dec("999.99"));
    assert_eq!(loaded[0].hourly_rate(), dec("60"));
    assert_eq!(loaded[0].base_salary(), dec("12000"));
}

#[tokio::test]
async fn test_sqlite_file_database_persists_across_connections() {
    let path = std::env::temp_dir().join(format!(
        "payroll_engine_integration_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let config = StoreConfig {
        database_url: format!("sqlite://{}", path.display()),
        ..StoreConfig::default()
    };

    let mut record = create_engineer();
    {
        let store = SqliteRecordStore::connect(&config).await.unwrap();
        store.initialize_schema().await.unwrap();
        store.save(&mut record).await.unwrap();
        store.close().await;
    }

    let store = SqliteRecordStore::connect(&config).await.unwrap();
    store.initialize_schema().await.unwrap();
    let loaded = store.load_all().await.unwrap();
    store.close().await;
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, vec![record]);
}

#[tokio::test]
async fn test_sqlite_missing_file_without_create_fails() {
    let path = std::env::temp_dir().join(format!(
        "payroll_engine_missing_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let config = StoreConfig {
        database_url: format!("sqlite://{}", path.display()),
        create_if_missing: false,
        ..StoreConfig::default()
    };

    let err = SqliteRecordStore::connect(&config).await.unwrap_err();
    assert!(err.is_storage());
}

// =============================================================================
// Memory Store
// =============================================================================

#[tokio::test]
async fn test_memory_round_trip() {
    round_trip_preserves_every_field(&create_memory_store().await).await;
}

#[tokio::test]
async fn test_memory_update() {
    update_overwrites_in_place(&create_memory_store().await).await;
}

#[tokio::test]
async fn test_memory_delete() {
    delete_removes_only_target(&create_memory_store().await).await;
}

#[tokio::test]
async fn test_memory_update_after_delete() {
    update_after_delete_is_storage_error(&create_memory_store().await).await;
}

#[tokio::test]
async fn test_memory_load_order() {
    load_orders_by_id(&create_memory_store().await).await;
}

// =============================================================================
// Reports and Configuration
// =============================================================================

#[tokio::test]
async fn test_report_over_loaded_records() {
    let store = create_sqlite_store().await;
    let mut clerk = create_clerk();
    clerk.set_overtime_hours(dec("1")).unwrap();
    let mut engineer = PayrollRecord::new("Jose Rizal", "Engineer", dec("200"), 5).unwrap();
    engineer.set_hours_worked(dec("8")).unwrap();
    store.save(&mut clerk).await.unwrap();
    store.save(&mut engineer).await.unwrap();

    let records = store.load_all().await.unwrap();
    let report = generate_payroll_report(&records, PayPeriod::Monthly).unwrap();

    assert_eq!(report.lines.len(), 2);
    assert_eq!(report.lines[0].id, clerk.id());
    assert_eq!(report.totals.gross_pay, dec("41250"));
    assert_eq!(report.totals.deductions, dec("5446.40"));
    assert_eq!(report.totals.net_pay, dec("35803.60"));
}

#[tokio::test]
async fn test_store_from_repository_config() {
    let loader = ConfigLoader::load("./config/payroll.yaml").expect("Failed to load config");
    let config = StoreConfig {
        database_url: StoreConfig::in_memory().database_url,
        ..loader.into_config()
    };

    let store = SqliteRecordStore::connect(&config).await.unwrap();
    store.initialize_schema().await.unwrap();
    let mut record = create_clerk();
    store.save(&mut record).await.unwrap();

    assert_eq!(store.load_all().await.unwrap(), vec![record]);
}
