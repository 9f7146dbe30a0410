//! Payroll engine for hourly employees.
//!
//! This crate computes base salary, gross pay and statutory deductions
//! (SSS, PhilHealth, Pag-IBIG and withholding tax) for a [`PayrollRecord`],
//! and persists records through a [`RecordStore`].
//!
//! [`PayrollRecord`]: models::PayrollRecord
//! [`RecordStore`]: store::RecordStore

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
