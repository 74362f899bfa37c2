//! Vehicle manifest as CSV, header:
//! vin,year,make,model,cost_to_dealership,price,fuel_level,fuel_capacity,is_clean,last_insured,last_serviced

use crate::{
    dates::{format_timestamp, parse_timestamp},
    error::{DealerError, Result},
    model::Vehicle,
};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

#[derive(serde::Deserialize)]
struct CsvRow {
    vin: String,
    year: String,
    make: String,
    model: String,
    cost_to_dealership: String,
    price: String,
    fuel_level: String,
    fuel_capacity: String,
    is_clean: String,
    last_insured: String,
    last_serviced: String,
}

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    vin: &'a str,
    year: i32,
    make: &'a str,
    model: &'a str,
    cost_to_dealership: String,
    price: String,
    fuel_level: f64,
    fuel_capacity: f64,
    is_clean: bool,
    last_insured: String,
    last_serviced: String,
}

pub struct Csv;

impl crate::traits::ReadFormat for Csv {
    fn read<R: BufRead>(r: R) -> Result<Vec<Vehicle>> {
        let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(r);
        let mut vehicles = Vec::new();

        for rec in rdr.deserialize::<CsvRow>() {
            let row = rec?;
            let v = Vehicle {
                year: row
                    .year
                    .parse()
                    .map_err(|e| DealerError::Parse(format!("{}: year: {e}", row.vin)))?,
                cost_to_dealership: row
                    .cost_to_dealership
                    .parse::<Decimal>()
                    .map_err(|e| {
                        DealerError::Parse(format!("{}: cost_to_dealership: {e}", row.vin))
                    })?,
                price: row
                    .price
                    .parse::<Decimal>()
                    .map_err(|e| DealerError::Parse(format!("{}: price: {e}", row.vin)))?,
                fuel_level: row
                    .fuel_level
                    .parse()
                    .map_err(|e| DealerError::Parse(format!("{}: fuel_level: {e}", row.vin)))?,
                fuel_capacity: row
                    .fuel_capacity
                    .parse()
                    .map_err(|e| DealerError::Parse(format!("{}: fuel_capacity: {e}", row.vin)))?,
                is_clean: parse_flag(&row.is_clean)?,
                last_insured: parse_timestamp(&row.last_insured)?,
                last_serviced: parse_timestamp(&row.last_serviced)?,
                make: row.make,
                model: row.model,
                vin: row.vin,
            };
            v.validate()?;
            vehicles.push(v);
        }

        Ok(vehicles)
    }
}

impl crate::traits::WriteFormat for Csv {
    fn write<W: Write>(mut w: W, vehicles: &[Vehicle]) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for v in vehicles {
            let out = CsvOutRow {
                vin: &v.vin,
                year: v.year,
                make: &v.make,
                model: &v.model,
                cost_to_dealership: v.cost_to_dealership.to_string(),
                price: v.price.to_string(),
                fuel_level: v.fuel_level,
                fuel_capacity: v.fuel_capacity,
                is_clean: v.is_clean,
                last_insured: format_timestamp(&v.last_insured),
                last_serviced: format_timestamp(&v.last_serviced),
            };
            wrt.serialize(out)?;
        }
        wrt.flush()?;
        Ok(())
    }
}

fn parse_flag(s: &str) -> Result<bool> {
    match s {
        "true" | "TRUE" | "yes" | "y" | "1" => Ok(true),
        "false" | "FALSE" | "no" | "n" | "0" => Ok(false),
        other => Err(DealerError::Parse(format!("is_clean: {other:?}"))),
    }
}
