//! Configuration loading for the payroll engine.
//!
//! Statutory rates are fixed constants in [`crate::calculation`]; the only
//! configurable part of the engine is how the record store connects.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Database: {}", loader.config().database_url);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_DATABASE_URL, StoreConfig};
