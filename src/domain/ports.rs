use crate::core::registry::Registry;
use crate::utils::error::Result;

/// Where a registry is loaded from at startup and written back to on exit.
pub trait BoatStore {
    /// Reads every stored boat into a registry of the given capacity.
    fn load(&self, capacity: usize) -> Result<Registry>;

    /// Replaces the stored content with the registry, in list order.
    fn save(&self, registry: &Registry) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_file(&self) -> &str;
    fn capacity(&self) -> usize;
    fn verbose(&self) -> bool;
    fn json_logs(&self) -> bool;
}
