//! Dealership settings and maintenance thresholds.

use rust_decimal::Decimal;

pub struct DealershipConfig {
    pub name: String,
    pub starting_balance: Decimal,
    /// Spending limit handed to a single acquisition run.
    pub acquisition_budget: Decimal,
}

impl Default for DealershipConfig {
    fn default() -> Self {
        DealershipConfig {
            name: "Autowars Motors".into(),
            starting_balance: Decimal::new(100_000, 0),
            acquisition_budget: Decimal::new(50_000, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaintenancePolicy {
    /// Insurance is renewed once more than this many days have elapsed.
    pub insurance_days: i64,
    /// Service is due once more than this many days have elapsed.
    pub service_days: i64,
    /// Share of capacity below which a tank counts as low.
    pub low_fuel_ratio: f64,
}

impl Default for MaintenancePolicy {
    fn default() -> Self {
        MaintenancePolicy {
            insurance_days: 30,
            service_days: 90,
            low_fuel_ratio: 0.25,
        }
    }
}
