use crate::core::codec;
use crate::core::registry::Registry;
use crate::domain::ports::BoatStore;
use crate::utils::error::{MarinaError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Boats stored as lines of a flat text file.
#[derive(Debug, Clone)]
pub struct CsvFileStore {
    path: PathBuf,
}

impl CsvFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BoatStore for CsvFileStore {
    fn load(&self, capacity: usize) -> Result<Registry> {
        let file = File::open(&self.path).map_err(|source| MarinaError::LoadError {
            path: self.path.clone(),
            source,
        })?;
        let boats = codec::read_boats(BufReader::new(file))?;

        let mut registry = Registry::with_capacity(capacity);
        let mut skipped = 0;
        for boat in boats {
            let name = boat.name().to_string();
            if let Err(e) = registry.insert(boat) {
                tracing::warn!("Skipping '{}' from {}: {}", name, self.path.display(), e);
                skipped += 1;
            }
        }

        tracing::info!(
            "Loaded {} boats from {} ({} skipped)",
            registry.len(),
            self.path.display(),
            skipped
        );
        Ok(registry)
    }

    fn save(&self, registry: &Registry) -> Result<()> {
        let file = File::create(&self.path).map_err(|source| MarinaError::SaveError {
            path: self.path.clone(),
            source,
        })?;
        codec::write_boats(registry, BufWriter::new(file))?;

        tracing::info!("Saved {} boats to {}", registry.len(), self.path.display());
        Ok(())
    }
}

/// Loads a registry of the default capacity from `path`.
pub fn load_registry<P: AsRef<Path>>(path: P) -> Result<Registry> {
    CsvFileStore::new(path.as_ref()).load(crate::core::registry::DEFAULT_CAPACITY)
}

/// Overwrites `path` with the registry's boats.
pub fn save_registry<P: AsRef<Path>>(registry: &Registry, path: P) -> Result<()> {
    CsvFileStore::new(path.as_ref()).save(registry)
}
