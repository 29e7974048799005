use crate::config::toml_config::TomlConfig;
use crate::config::MarinaConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "marina")]
#[command(about = "Marina boat registry: inventory, payments and monthly fees")]
pub struct CliConfig {
    /// Data file to load at startup and save on exit
    pub file: String,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Maximum number of boats (overrides the config file)
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// Flags win over the config file, which wins over defaults.
    pub fn resolve(&self) -> Result<MarinaConfig> {
        let mut config = MarinaConfig::new(self.file.clone());

        if let Some(path) = &self.config {
            let file_config = TomlConfig::from_file(path)?;
            config = config.with_file_config(&file_config);
        }

        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        config.verbose |= self.verbose;
        config.json_logs |= self.log_json;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_argument_is_required() {
        assert!(CliConfig::try_parse_from(["marina"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[registry]\ncapacity = 10\n\n[logging]\nverbose = true\n")
            .unwrap();
        let config_path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from([
            "marina",
            "boats.csv",
            "--config",
            config_path.as_str(),
            "--capacity",
            "25",
        ])
        .unwrap();

        let config = cli.resolve().unwrap();
        assert_eq!(config.data_file, "boats.csv");
        assert_eq!(config.capacity, 25);
        assert!(config.verbose);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli =
            CliConfig::try_parse_from(["marina", "boats.csv", "-c", "/nonexistent/marina.toml"])
                .unwrap();
        assert!(cli.resolve().is_err());
    }
}
