use dealerlib::{error::DealerError, model::Vehicle, FleetManager};
use rand::{rngs::StdRng, SeedableRng};
use rust_decimal::Decimal;
use std::collections::HashSet;

#[test]
fn empty_lot_reports_empty_inventory() {
    let dealer = FleetManager::new("Empty Lot", Decimal::ZERO);

    assert!(matches!(dealer.pick_random_vehicle(), Err(DealerError::EmptyInventory)));
}

#[test]
fn picks_come_from_the_lot_and_cover_it() {
    let mut dealer = FleetManager::new("Boulder Autos", Decimal::new(90_000, 0));
    let vins = ["1HGCM82633A004352", "5YJ3E1EA7KF317000", "4S4BTGPD0N3100001"];
    dealer.add_to_lot(vins.iter().map(|vin| {
        let (cost, price) = (Decimal::new(10_000, 0), Decimal::new(12_000, 0));
        Vehicle::new(*vin, 2020, "Make", "Model", cost, price, 15.0).unwrap()
    }));

    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = HashSet::new();
    for _ in 0..200 {
        let v = dealer.pick_random_vehicle_with(&mut rng).unwrap();
        assert!(vins.contains(&v.vin.as_str()));
        seen.insert(v.vin.clone());
    }
    assert_eq!(seen.len(), vins.len());

    // picking never takes a vehicle off the lot
    assert_eq!(dealer.car_lot().len(), 3);
    assert!(dealer.pick_random_vehicle().is_ok());
}
