use crate::batch::{process_rows, BatchOutcome};
use crate::errors::LoadError;
use crate::model::{Aircraft, AircraftTable, Airport, AirportTable, OriginMap};
use crate::table::{read_records, read_table};
use log::info;
use std::path::Path;

/// A ProfitEngine holds the airport and aircraft reference tables and
/// evaluates batches of flight bookings against them.
pub struct ProfitEngine {
    airports: AirportTable,
    aircraft: AircraftTable,
    delimiter: u8,
}

impl ProfitEngine {
    pub fn new(airports: AirportTable, aircraft: AircraftTable, delimiter: u8) -> Self {
        Self {
            airports,
            aircraft,
            delimiter,
        }
    }

    /// Loads both reference tables from disk.
    ///
    /// Any read failure or malformed row is fatal: there is no meaningful
    /// report to produce against a partial table.
    pub fn load(
        airports_path: &Path,
        aircraft_path: &Path,
        delimiter: u8,
        origins: OriginMap,
    ) -> Result<Self, LoadError> {
        let airports = AirportTable::new(
            read_records::<Airport>(airports_path, delimiter)?,
            origins,
        );
        info!(
            "loaded {} airports from {}",
            airports.len(),
            airports_path.display()
        );

        let aircraft = AircraftTable::new(read_records::<Aircraft>(aircraft_path, delimiter)?);
        info!(
            "loaded {} aircraft types from {}",
            aircraft.len(),
            aircraft_path.display()
        );

        Ok(Self::new(airports, aircraft, delimiter))
    }

    pub fn airports(&self) -> &AirportTable {
        &self.airports
    }

    pub fn aircraft(&self) -> &AircraftTable {
        &self.aircraft
    }

    /// Reads a bookings file and evaluates every row in it.
    ///
    /// Only failing to read the file is an error; bad rows end up in the
    /// outcome's failures.
    pub fn process_file(&self, path: &Path) -> Result<BatchOutcome, LoadError> {
        let rows = read_table(path, self.delimiter)?;
        let outcome = process_rows(rows, &self.airports, &self.aircraft);

        info!(
            "processed {} flights from {}: {} succeeded, {} failed",
            outcome.len(),
            path.display(),
            outcome.successes.len(),
            outcome.failures.len()
        );

        Ok(outcome)
    }
}
