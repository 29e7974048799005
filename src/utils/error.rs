use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarinaError {
    #[error("Registry is full: capacity of {capacity} boats reached")]
    CapacityExceeded { capacity: usize },

    #[error("No boat named '{name}'")]
    NotFound { name: String },

    #[error("Payment of {amount:.2} exceeds amount owed for {name}: {owed:.2}")]
    PaymentExceedsBalance { name: String, amount: f64, owed: f64 },

    #[error("Could not load data from {}: {source}", .path.display())]
    LoadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not save data to {}: {source}", .path.display())]
    SaveError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl MarinaError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            MarinaError::CapacityExceeded { .. } => "Failed to add boat.".to_string(),
            MarinaError::NotFound { .. } => "No boat with that name.".to_string(),
            MarinaError::PaymentExceedsBalance { name, owed, .. } => format!(
                "Payment exceeds amount owed, amount owed for {}: ${:.2}",
                name, owed
            ),
            MarinaError::LoadError { path, .. } => {
                format!("Could not load data from {}", path.display())
            }
            MarinaError::SaveError { .. } => "Error saving data.".to_string(),
            MarinaError::CsvError(_) | MarinaError::IoError(_) => {
                format!("Data file problem: {}", self)
            }
            MarinaError::ConfigError { message } => format!("Configuration problem: {}", message),
            MarinaError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MarinaError::CapacityExceeded { .. } => {
                "Remove a boat first, or raise the registry capacity in the config file"
            }
            MarinaError::NotFound { .. } => "Check the spelling; use I to list the inventory",
            MarinaError::PaymentExceedsBalance { .. } => {
                "Enter an amount no larger than the balance owed"
            }
            MarinaError::LoadError { .. } => {
                "Check that the file exists and is readable; starting with an empty registry"
            }
            MarinaError::SaveError { .. } => {
                "Check write permissions for the data file and its directory"
            }
            MarinaError::CsvError(_) | MarinaError::IoError(_) => {
                "Check the data file and the disk it lives on"
            }
            MarinaError::ConfigError { .. } | MarinaError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and restart"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MarinaError>;
