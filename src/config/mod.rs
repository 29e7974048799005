#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::registry::DEFAULT_CAPACITY;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

/// Settings after command line, config file and defaults are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct MarinaConfig {
    pub data_file: String,
    pub capacity: usize,
    pub verbose: bool,
    pub json_logs: bool,
}

impl MarinaConfig {
    pub fn new(data_file: impl Into<String>) -> Self {
        Self {
            data_file: data_file.into(),
            capacity: DEFAULT_CAPACITY,
            verbose: false,
            json_logs: false,
        }
    }

    /// Takes every value the file sets.
    pub fn with_file_config(mut self, file: &TomlConfig) -> Self {
        if let Some(capacity) = file.registry.as_ref().and_then(|r| r.capacity) {
            self.capacity = capacity;
        }
        if let Some(logging) = &file.logging {
            self.verbose = logging.verbose.unwrap_or(self.verbose);
            self.json_logs = logging.json.unwrap_or(self.json_logs);
        }
        self
    }
}

impl ConfigProvider for MarinaConfig {
    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

impl Validate for MarinaConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("file", &self.data_file)?;
        validation::validate_positive_number("registry.capacity", self.capacity, 1)?;
        Ok(())
    }
}
