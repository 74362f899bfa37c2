use dealerlib::{factory::Factory, model::Vehicle, traits::VehicleSource, FleetManager};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn unit(n: u32, cost: i64) -> Vehicle {
    Vehicle::new(
        format!("1FTFW1ET5DFC{n:05}"),
        2020,
        "Ford",
        "F-150",
        Decimal::new(cost, 0),
        Decimal::new(cost + 2_500, 0),
        26.0,
    )
    .expect("valid fixture")
}

fn factory_with(costs: &[i64]) -> Factory {
    let vehicles = costs
        .iter()
        .enumerate()
        .map(|(i, c)| unit(i as u32, *c))
        .collect();
    Factory::with_vehicles("test factory", vehicles)
}

#[test]
fn greedy_first_fit_skips_what_no_longer_fits() {
    let mut factory = factory_with(&[3000, 4000, 5000]);
    let mut dealer = FleetManager::new("Boulder Autos", Decimal::new(10_000, 0));

    let bought = dealer.acquire_vehicles(&mut factory, Decimal::new(8_000, 0));

    let costs: Vec<Decimal> = bought.iter().map(|v| v.cost_to_dealership).collect();
    assert_eq!(costs, vec![Decimal::new(3000, 0), Decimal::new(4000, 0)]);
    assert_eq!(dealer.balance(), Decimal::new(3_000, 0));
    // acquisition alone does not stock the lot
    assert!(dealer.car_lot().is_empty());
    // the skipped unit is still on offer
    assert_eq!(factory.ready_to_ship().len(), 1);
    assert_eq!(factory.ready_to_ship()[0].cost_to_dealership, Decimal::new(5000, 0));
}

#[test]
fn later_cheaper_unit_still_fits_after_a_skip() {
    let mut factory = factory_with(&[6000, 5000, 1000]);
    let mut dealer = FleetManager::new("Boulder Autos", Decimal::ZERO);

    let bought = dealer.acquire_vehicles(&mut factory, Decimal::new(8_000, 0));

    let costs: Vec<Decimal> = bought.iter().map(|v| v.cost_to_dealership).collect();
    assert_eq!(costs, vec![Decimal::new(6000, 0), Decimal::new(1000, 0)]);
    assert_eq!(dealer.balance(), Decimal::new(-7_000, 0));
}

#[test]
fn unit_costing_exactly_the_remaining_budget_is_not_bought() {
    let mut factory = factory_with(&[5000, 3000]);
    let mut dealer = FleetManager::new("Boulder Autos", Decimal::new(10_000, 0));

    let bought = dealer.acquire_vehicles(&mut factory, Decimal::new(8_000, 0));

    assert_eq!(bought.len(), 1);
    assert_eq!(bought[0].cost_to_dealership, Decimal::new(5000, 0));
    assert_eq!(dealer.balance(), Decimal::new(5_000, 0));
}

#[test]
fn add_to_lot_appends_in_order_and_charges_each_cost() {
    let mut dealer = FleetManager::new("Boulder Autos", Decimal::new(10_000, 0));
    let batch = vec![unit(1, 2500), unit(2, 4000), unit(3, 6000)];
    let vins: Vec<String> = batch.iter().map(|v| v.vin.clone()).collect();

    let added = dealer.add_to_lot(batch);

    assert_eq!(added, 3);
    let on_lot: Vec<&str> = dealer.car_lot().iter().map(|v| v.vin.as_str()).collect();
    assert_eq!(on_lot, vins);
    // no budget check here: 12_500 spent from 10_000
    assert_eq!(dealer.balance(), Decimal::new(-2_500, 0));
}

#[test]
fn acquire_then_stock_charges_twice() {
    let mut factory = factory_with(&[3000, 4000, 5000]);
    let mut dealer = FleetManager::new("Boulder Autos", Decimal::new(20_000, 0));

    let bought = dealer.acquire_vehicles(&mut factory, Decimal::new(8_000, 0));
    dealer.add_to_lot(bought);

    assert_eq!(dealer.car_lot().len(), 2);
    assert_eq!(dealer.balance(), Decimal::new(6_000, 0));
}

proptest! {
    #[test]
    fn selection_never_exceeds_budget(
        costs in prop::collection::vec(1i64..20_000, 0..12),
        budget in 0i64..60_000,
    ) {
        let mut factory = factory_with(&costs);
        let start = Decimal::new(100_000, 0);
        let mut dealer = FleetManager::new("Prop Motors", start);
        let budget = Decimal::new(budget, 0);

        let bought = dealer.acquire_vehicles(&mut factory, budget);

        let spent: Decimal = bought.iter().map(|v| v.cost_to_dealership).sum();
        prop_assert!(spent <= budget);
        prop_assert_eq!(dealer.balance(), start - spent);
        prop_assert_eq!(bought.len() + factory.ready_to_ship().len(), costs.len());

        // replay the walk: every unit was bought iff it cost strictly less than what was left
        let mut remaining = budget;
        let mut expected = Vec::new();
        for c in &costs {
            let c = Decimal::new(*c, 0);
            if c < remaining {
                remaining -= c;
                expected.push(c);
            }
        }
        let got: Vec<Decimal> = bought.iter().map(|v| v.cost_to_dealership).collect();
        prop_assert_eq!(got, expected);
    }
}
