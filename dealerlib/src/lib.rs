//! dealerlib — dealership fleet lifecycle: budgeted acquisition, upkeep and sales over an in-memory lot.

pub mod config;
pub mod dates;
pub mod error;
pub mod factory;
pub mod fleet;
pub mod model;
pub mod traits;

pub mod formats {
    pub mod csv;
    pub mod json;
}

pub use fleet::FleetManager;
