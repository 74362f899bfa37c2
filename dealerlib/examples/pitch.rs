use dealerlib::{
    factory::Factory,
    formats::csv::Csv,
    traits::ReadFormat,
    FleetManager,
};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: stock a lot from a CSV manifest on stdin, then pitch a random unit
    let stock = Csv::read(std::io::BufReader::new(std::io::stdin()))?;
    let mut factory = Factory::with_vehicles("stdin", stock);

    let mut dealer = FleetManager::new("Autowars Motors", Decimal::new(100_000, 0));
    let bought = dealer.acquire_vehicles(&mut factory, Decimal::new(60_000, 0));
    dealer.add_to_lot(bought);

    let v = dealer.pick_random_vehicle()?;
    println!("{}", dealer.sales_pitch(v));
    Ok(())
}
