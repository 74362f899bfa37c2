//! Vehicle manifest as a JSON array of records. Amounts travel as strings,
//! timestamps as RFC 3339.

use crate::{dates::parse_timestamp, error::Result, model::Vehicle};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::{BufRead, Write};

// Timestamps stay raw here so a bad one surfaces as CorruptTimestamp
// instead of a generic JSON error.
#[derive(Deserialize)]
struct JsonVehicle {
    vin: String,
    year: i32,
    make: String,
    model: String,
    cost_to_dealership: Decimal,
    price: Decimal,
    fuel_level: f64,
    fuel_capacity: f64,
    is_clean: bool,
    last_insured: String,
    last_serviced: String,
}

pub struct Json;

impl crate::traits::ReadFormat for Json {
    fn read<R: BufRead>(r: R) -> Result<Vec<Vehicle>> {
        let rows: Vec<JsonVehicle> = serde_json::from_reader(r)?;
        rows.into_iter()
            .map(|row| -> Result<Vehicle> {
                let v = Vehicle {
                    last_insured: parse_timestamp(&row.last_insured)?,
                    last_serviced: parse_timestamp(&row.last_serviced)?,
                    vin: row.vin,
                    year: row.year,
                    make: row.make,
                    model: row.model,
                    cost_to_dealership: row.cost_to_dealership,
                    price: row.price,
                    fuel_level: row.fuel_level,
                    fuel_capacity: row.fuel_capacity,
                    is_clean: row.is_clean,
                };
                v.validate()?;
                Ok(v)
            })
            .collect()
    }
}

impl crate::traits::WriteFormat for Json {
    fn write<W: Write>(mut w: W, vehicles: &[Vehicle]) -> Result<()> {
        serde_json::to_writer_pretty(&mut w, vehicles)?;
        writeln!(w)?;
        Ok(())
    }
}
