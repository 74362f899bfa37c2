//! The dealership: lot ownership, budgeted acquisition, sales and upkeep.

use chrono::{DateTime, Utc};
use rand::{seq::IndexedRandom, Rng};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::{
    config::{DealershipConfig, MaintenancePolicy},
    dates,
    error::{DealerError, Result},
    model::{SaleRecord, Vehicle},
    traits::VehicleSource,
};

#[derive(Debug, Clone, Copy)]
enum Renewal {
    Insurance,
    Service,
}

impl Renewal {
    fn threshold(self, policy: &MaintenancePolicy) -> i64 {
        match self {
            Renewal::Insurance => policy.insurance_days,
            Renewal::Service => policy.service_days,
        }
    }

    fn last(self, v: &Vehicle) -> DateTime<Utc> {
        match self {
            Renewal::Insurance => v.last_insured,
            Renewal::Service => v.last_serviced,
        }
    }

    fn apply(self, v: &mut Vehicle, now: DateTime<Utc>) {
        match self {
            Renewal::Insurance => v.renew_insurance(now),
            Renewal::Service => v.service(now),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Renewal::Insurance => "insurance",
            Renewal::Service => "maintenance",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FleetManager {
    name: String,
    balance: Decimal,
    car_lot: Vec<Vehicle>,
    sales_history: Vec<SaleRecord>,
    policy: MaintenancePolicy,
}

impl FleetManager {
    pub fn new(name: impl Into<String>, starting_balance: Decimal) -> Self {
        let name = name.into();
        info!(dealership = %name, balance = %starting_balance.round_dp(2), "open for business");
        FleetManager {
            name,
            balance: starting_balance,
            car_lot: Vec::new(),
            sales_history: Vec::new(),
            policy: MaintenancePolicy::default(),
        }
    }

    pub fn from_config(cfg: &DealershipConfig) -> Self {
        Self::new(cfg.name.clone(), cfg.starting_balance)
    }

    pub fn with_policy(mut self, policy: MaintenancePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn car_lot(&self) -> &[Vehicle] {
        &self.car_lot
    }

    pub fn sales_history(&self) -> &[SaleRecord] {
        &self.sales_history
    }

    pub fn policy(&self) -> &MaintenancePolicy {
        &self.policy
    }

    /// First vehicle on the lot with this VIN.
    pub fn find(&self, vin: &str) -> Option<&Vehicle> {
        self.car_lot.iter().find(|v| v.vin == vin)
    }

    fn position(&self, vin: &str) -> Option<usize> {
        self.car_lot.iter().position(|v| v.vin == vin)
    }

    fn find_mut(&mut self, vin: &str) -> Option<&mut Vehicle> {
        self.car_lot.iter_mut().find(|v| v.vin == vin)
    }

    pub fn pick_random_vehicle(&self) -> Result<&Vehicle> {
        self.pick_random_vehicle_with(&mut rand::rng())
    }

    /// Uniform pick from the lot; `EmptyInventory` when there is nothing to pick.
    pub fn pick_random_vehicle_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Vehicle> {
        self.car_lot.choose(rng).ok_or(DealerError::EmptyInventory)
    }

    /// Buys from `source` in offer order while each unit costs strictly less
    /// than what is left of `budget`.
    ///
    /// The balance is charged for the whole batch here. The returned vehicles
    /// are not placed on the lot; pass them to [`FleetManager::add_to_lot`]
    /// for that, which charges their cost once more.
    pub fn acquire_vehicles<S: VehicleSource + ?Sized>(
        &mut self,
        source: &mut S,
        budget: Decimal,
    ) -> Vec<Vehicle> {
        let mut remaining = budget;
        let mut total_cost = Decimal::ZERO;
        let mut picks = Vec::new();

        for (i, v) in source.ready_to_ship().iter().enumerate() {
            let cost = v.cost_to_dealership;
            if cost < remaining {
                debug!(vin = %v.vin, %cost, remaining = %remaining, "within budget");
                remaining -= cost;
                total_cost += cost;
                picks.push(i);
            } else {
                debug!(vin = %v.vin, %cost, remaining = %remaining, "over budget, skipped");
            }
        }

        self.balance -= total_cost;
        let purchased = source.ship(&picks);

        info!(
            count = purchased.len(),
            total_cost = %total_cost.round_dp(2),
            balance = %self.balance.round_dp(2),
            "vehicles purchased"
        );
        purchased
    }

    /// Charges each vehicle's cost and parks it on the lot, in order. No
    /// budget check: the balance may go negative.
    pub fn add_to_lot(&mut self, vehicles: impl IntoIterator<Item = Vehicle>) -> usize {
        let mut added = 0;
        for v in vehicles {
            self.balance -= v.cost_to_dealership;
            debug!(vin = %v.vin, vehicle = %v.description(), "parked on lot");
            self.car_lot.push(v);
            added += 1;
        }
        info!(added, balance = %self.balance.round_dp(2), "vehicles added to lot");
        added
    }

    /// Removes the first vehicle with `vin` from the lot and logs the sale.
    /// Returns the balance, which a sale leaves untouched.
    pub fn sell_vehicle(&mut self, vin: &str) -> Decimal {
        match self.position(vin) {
            Some(idx) => {
                let sold = self.car_lot.remove(idx);
                let record = SaleRecord::of(&sold, Utc::now());
                info!(
                    vin,
                    vehicle = %record.description,
                    net_profit = %record.net_profit.round_dp(2),
                    "vehicle sold"
                );
                self.sales_history.push(record);
            }
            None => warn!(vin, "no VIN match found"),
        }
        self.balance
    }

    pub fn check_insurance(&mut self) -> Vec<&Vehicle> {
        self.check_insurance_at(Utc::now())
    }

    /// Renews every policy whose age, counted against a reference date
    /// `insurance_days` before `now`, exceeds `insurance_days`.
    pub fn check_insurance_at(&mut self, now: DateTime<Utc>) -> Vec<&Vehicle> {
        self.renew_overdue(Renewal::Insurance, now)
    }

    pub fn check_maintenance(&mut self) -> Vec<&Vehicle> {
        self.check_maintenance_at(Utc::now())
    }

    /// Same rule as [`FleetManager::check_insurance_at`] with `service_days`.
    pub fn check_maintenance_at(&mut self, now: DateTime<Utc>) -> Vec<&Vehicle> {
        self.renew_overdue(Renewal::Service, now)
    }

    fn renew_overdue(&mut self, kind: Renewal, now: DateTime<Utc>) -> Vec<&Vehicle> {
        info!(check = kind.label(), vehicles = self.car_lot.len(), "checking all vehicles");
        let limit = kind.threshold(&self.policy);

        let mut renewed = Vec::new();
        for (i, v) in self.car_lot.iter_mut().enumerate() {
            // a reference date off the calendar never comes due
            let Some(elapsed) = dates::days_past_reference(kind.last(v), now, limit) else {
                debug!(vin = %v.vin, check = kind.label(), limit, "reference date out of range");
                continue;
            };
            if elapsed > limit {
                debug!(vin = %v.vin, check = kind.label(), elapsed, "overdue, renewing");
                kind.apply(v, now);
                renewed.push(i);
            }
        }

        if renewed.is_empty() {
            info!(check = kind.label(), "all vehicles up to date");
        } else {
            info!(check = kind.label(), renewed = renewed.len(), "vehicles renewed");
        }
        renewed.into_iter().map(|i| &self.car_lot[i]).collect()
    }

    pub fn renew_insurance(&mut self, vin: &str) -> Option<&Vehicle> {
        let v = self.find_mut(vin)?;
        v.renew_insurance(Utc::now());
        info!(vin, "insurance renewed");
        Some(&*v)
    }

    pub fn service_vehicle(&mut self, vin: &str) -> Option<&Vehicle> {
        let v = self.find_mut(vin)?;
        v.service(Utc::now());
        info!(vin, "vehicle serviced");
        Some(&*v)
    }

    pub fn refuel(&mut self, vin: &str) -> Option<&Vehicle> {
        let v = self.find_mut(vin)?;
        v.refuel();
        info!(vin, "vehicle refueled");
        Some(&*v)
    }

    pub fn wash(&mut self, vin: &str) -> Option<&Vehicle> {
        let v = self.find_mut(vin)?;
        v.wash();
        debug!(vin, "vehicle washed");
        Some(&*v)
    }

    pub fn sales_pitch(&self, v: &Vehicle) -> String {
        format!(
            "Come on down to {} and drive home a {} for a stupidly affordable ${}!",
            self.name,
            v.description(),
            v.price.round_dp(2)
        )
    }

    /// First vehicle on the lot matching year, make and model, topped up and
    /// washed if needed.
    pub fn select_for_test_drive(
        &mut self,
        year: i32,
        make: &str,
        model: &str,
    ) -> Option<&Vehicle> {
        let policy = self.policy;
        let Some(v) = self
            .car_lot
            .iter_mut()
            .find(|v| v.year == year && v.make == make && v.model == model)
        else {
            warn!(year, make, model, "not in stock");
            return None;
        };

        info!(vin = %v.vin, "vehicle selected for test drive");
        if !v.check_fuel(&policy) {
            v.refuel();
            info!(vin = %v.vin, "vehicle refueled");
        }
        if !v.is_clean {
            v.wash();
            debug!(vin = %v.vin, "vehicle washed");
        }
        Some(&*v)
    }
}
