pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::{load_registry, save_registry, CsvFileStore};
pub use app::{SessionEnd, Shell};
pub use config::MarinaConfig;
pub use crate::core::{
    fees::{accept_payment, apply_monthly_fees, monthly_rate},
    registry::{Registry, DEFAULT_CAPACITY},
};
pub use domain::model::{Boat, Category, Location};
pub use domain::ports::{BoatStore, ConfigProvider};
pub use utils::error::{MarinaError, Result};
