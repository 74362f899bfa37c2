//! Manifest I/O over std::io::{BufRead, Write} and the supply side of acquisition.

use crate::{error::Result, model::Vehicle};
use std::io::{BufRead, Write};

pub trait ReadFormat {
    fn read<R: BufRead>(r: R) -> Result<Vec<Vehicle>>;
}

pub trait WriteFormat {
    fn write<W: Write>(w: W, vehicles: &[Vehicle]) -> Result<()>;
}

pub trait Format: ReadFormat + WriteFormat {}
impl<T: ReadFormat + WriteFormat> Format for T {}

/// Anything that offers vehicles for purchase.
pub trait VehicleSource {
    /// Units on offer, in the order they should be considered.
    fn ready_to_ship(&self) -> &[Vehicle];

    /// Hands over the units at `picks` (ascending indexes into
    /// `ready_to_ship`) and stops offering them.
    fn ship(&mut self, picks: &[usize]) -> Vec<Vehicle>;
}
