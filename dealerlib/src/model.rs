//! Domain records: the vehicle and the sale log entry.

use chrono::{DateTime, Utc};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::config::MaintenancePolicy;
use crate::error::{DealerError, Result};

/// ISO 3779: 17 characters, letters I, O and Q excluded.
static ISO_VIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$").expect("ISO VIN pattern compiles"));

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub vin: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub cost_to_dealership: Decimal,
    pub price: Decimal,
    pub fuel_level: f64,
    pub fuel_capacity: f64,
    pub is_clean: bool,
    pub last_insured: DateTime<Utc>,
    pub last_serviced: DateTime<Utc>,
}

impl Vehicle {
    /// Builds a fresh unit: full tank, clean, insured and serviced right now.
    pub fn new(
        vin: impl Into<String>,
        year: i32,
        make: impl Into<String>,
        model: impl Into<String>,
        cost_to_dealership: Decimal,
        price: Decimal,
        fuel_capacity: f64,
    ) -> Result<Self> {
        let now = Utc::now();
        let v = Vehicle {
            vin: vin.into(),
            year,
            make: make.into(),
            model: model.into(),
            cost_to_dealership,
            price,
            fuel_level: fuel_capacity,
            fuel_capacity,
            is_clean: true,
            last_insured: now,
            last_serviced: now,
        };
        v.validate()?;
        Ok(v)
    }

    /// Checks the record invariants: non-blank VIN and `0 <= fuel_level <= fuel_capacity`.
    pub fn validate(&self) -> Result<()> {
        if self.vin.trim().is_empty() {
            return Err(DealerError::InvalidVehicle("empty VIN".into()));
        }
        let valid = |x: f64| x.is_finite() && x >= 0.0;
        if !valid(self.fuel_capacity) || !valid(self.fuel_level) {
            return Err(DealerError::InvalidVehicle(format!(
                "{}: fuel values must be finite and non-negative",
                self.vin
            )));
        }
        if self.fuel_level > self.fuel_capacity {
            return Err(DealerError::InvalidVehicle(format!(
                "{}: fuel level {} exceeds capacity {}",
                self.vin, self.fuel_level, self.fuel_capacity
            )));
        }
        Ok(())
    }

    /// Stricter opt-in check for a 17-character ISO VIN.
    pub fn validate_iso_vin(&self) -> Result<()> {
        if !ISO_VIN.is_match(&self.vin) {
            return Err(DealerError::InvalidVehicle(format!("not an ISO VIN: {:?}", self.vin)));
        }
        Ok(())
    }

    pub fn description(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    pub fn net_profit(&self) -> Decimal {
        self.price - self.cost_to_dealership
    }

    /// `true` when the tank holds enough fuel for a test drive.
    pub fn check_fuel(&self, policy: &MaintenancePolicy) -> bool {
        self.fuel_level >= self.fuel_capacity * policy.low_fuel_ratio
    }

    pub fn refuel(&mut self) {
        self.fuel_level = self.fuel_capacity;
    }

    pub fn wash(&mut self) {
        self.is_clean = true;
    }

    pub fn renew_insurance(&mut self, now: DateTime<Utc>) {
        self.last_insured = now;
    }

    pub fn service(&mut self, now: DateTime<Utc>) {
        self.last_serviced = now;
    }
}

/// One completed sale in a dealership's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleRecord {
    pub vin: String,
    pub description: String,
    pub net_profit: Decimal,
    pub sold_at: DateTime<Utc>,
}

impl SaleRecord {
    pub fn of(v: &Vehicle, sold_at: DateTime<Utc>) -> Self {
        SaleRecord {
            vin: v.vin.clone(),
            description: v.description(),
            net_profit: v.net_profit(),
            sold_at,
        }
    }
}

impl fmt::Display for SaleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // buyer is not tracked
        write!(
            f,
            "Vehicle sold: {} | VIN: {} | Net profit: {} | Sold: {}",
            self.description,
            self.vin,
            self.net_profit.round_dp(2),
            self.sold_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}
