//! In-memory vehicle source.

use tracing::debug;

use crate::{model::Vehicle, traits::VehicleSource};

#[derive(Debug, Clone, Default)]
pub struct Factory {
    name: String,
    ready_to_ship: Vec<Vehicle>,
}

impl Factory {
    pub fn new(name: impl Into<String>) -> Self {
        Factory {
            name: name.into(),
            ready_to_ship: Vec::new(),
        }
    }

    pub fn with_vehicles(name: impl Into<String>, vehicles: Vec<Vehicle>) -> Self {
        Factory {
            name: name.into(),
            ready_to_ship: vehicles,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Puts a finished unit at the back of the shipping queue.
    pub fn produce(&mut self, v: Vehicle) {
        debug!(factory = %self.name, vin = %v.vin, "vehicle ready to ship");
        self.ready_to_ship.push(v);
    }
}

impl VehicleSource for Factory {
    fn ready_to_ship(&self) -> &[Vehicle] {
        &self.ready_to_ship
    }

    fn ship(&mut self, picks: &[usize]) -> Vec<Vehicle> {
        let mut shipped = Vec::with_capacity(picks.len());
        let mut kept = Vec::with_capacity(self.ready_to_ship.len().saturating_sub(picks.len()));
        for (i, v) in std::mem::take(&mut self.ready_to_ship).into_iter().enumerate() {
            if picks.binary_search(&i).is_ok() {
                shipped.push(v);
            } else {
                kept.push(v);
            }
        }
        self.ready_to_ship = kept;
        shipped
    }
}
