//! Persistent stores for registered vehicles and the last-used marker

mod last_used;
mod vehicles;

pub use last_used::LastUsedStore;
pub use vehicles::VehicleStore;
