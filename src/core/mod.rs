pub mod codec;
pub mod fees;
pub mod registry;

pub use crate::domain::model::{Boat, Category, Location};
pub use crate::domain::ports::BoatStore;
pub use crate::utils::error::Result;
