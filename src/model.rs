use crate::parse;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fmt::Formatter;
use std::ops::Index;

/// The three cabins every aircraft is configured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeatClass {
    Economy,
    Business,
    First,
}

impl SeatClass {
    /// All classes, in the order overbooking is checked.
    pub const ALL: [SeatClass; 3] = [SeatClass::Economy, SeatClass::Business, SeatClass::First];
}

impl fmt::Display for SeatClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SeatClass::Economy => write!(f, "economy"),
            SeatClass::Business => write!(f, "business"),
            SeatClass::First => write!(f, "first class"),
        }
    }
}

/// One value per seat class, e.g. capacities, bookings or fares.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PerClass<T> {
    pub economy: T,
    pub business: T,
    pub first: T,
}

impl<T> Index<SeatClass> for PerClass<T> {
    type Output = T;

    fn index(&self, class: SeatClass) -> &T {
        match class {
            SeatClass::Economy => &self.economy,
            SeatClass::Business => &self.business,
            SeatClass::First => &self.first,
        }
    }
}

impl PerClass<u32> {
    pub fn total(&self) -> u64 {
        SeatClass::ALL.iter().map(|&c| u64::from(self[c])).sum()
    }
}

/// Which of the two precomputed distance columns an origin uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceColumn {
    Primary,
    Alternate,
}

/// Origin whose distances are stored in the first distance column.
pub const DEFAULT_PRIMARY_ORIGIN: &str = "MAN";
/// Origin whose distances are stored in the second distance column.
pub const DEFAULT_ALTERNATE_ORIGIN: &str = "LGW";

/// Maps origin airport codes to the distance column measured from them.
///
/// Origins that have not been mapped fall back to the alternate column.
#[derive(Clone, Debug, PartialEq)]
pub struct OriginMap {
    columns: HashMap<String, DistanceColumn>,
}

impl OriginMap {
    pub fn new(primary: &str, alternate: &str) -> Self {
        let mut origins = Self {
            columns: HashMap::new(),
        };
        origins.insert(alternate, DistanceColumn::Alternate);
        origins.insert(primary, DistanceColumn::Primary);
        origins
    }

    pub fn insert(&mut self, origin: &str, column: DistanceColumn) {
        self.columns.insert(origin.to_string(), column);
    }

    pub fn column_for(&self, origin: &str) -> DistanceColumn {
        self.columns
            .get(origin)
            .copied()
            .unwrap_or(DistanceColumn::Alternate)
    }
}

impl Default for OriginMap {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY_ORIGIN, DEFAULT_ALTERNATE_ORIGIN)
    }
}

/// A row of the airports table.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Airport {
    pub code: String,
    pub name: String,
    #[serde(deserialize_with = "parse::distance")]
    pub primary_distance: f64,
    #[serde(deserialize_with = "parse::distance")]
    pub alternate_distance: f64,
}

impl Airport {
    pub fn distance(&self, column: DistanceColumn) -> f64 {
        match column {
            DistanceColumn::Primary => self.primary_distance,
            DistanceColumn::Alternate => self.alternate_distance,
        }
    }
}

/// A row of the aircraft table, as it is laid out on disk.
#[derive(Deserialize)]
struct AircraftRow {
    kind: String,
    #[serde(deserialize_with = "parse::running_cost")]
    running_cost: f64,
    #[serde(deserialize_with = "parse::distance")]
    max_range: f64,
    economy_capacity: u32,
    business_capacity: u32,
    first_capacity: u32,
}

/// An aircraft type with its range, seating and running cost.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(from = "AircraftRow")]
pub struct Aircraft {
    pub kind: String,

    /// Cost per seat per single unit of distance.
    pub running_cost: f64,

    pub max_range: f64,

    pub capacity: PerClass<u32>,
}

impl From<AircraftRow> for Aircraft {
    fn from(row: AircraftRow) -> Self {
        Self {
            kind: row.kind,
            running_cost: row.running_cost,
            max_range: row.max_range,
            capacity: PerClass {
                economy: row.economy_capacity,
                business: row.business_capacity,
                first: row.first_capacity,
            },
        }
    }
}

/// A row of a flight bookings table, as it is laid out on disk.
#[derive(Deserialize)]
struct BookingRow {
    origin: String,
    destination: String,
    aircraft: String,
    economy_booked: u32,
    business_booked: u32,
    first_booked: u32,
    #[serde(deserialize_with = "parse::currency")]
    economy_price: f64,
    #[serde(deserialize_with = "parse::currency")]
    business_price: f64,
    #[serde(deserialize_with = "parse::currency")]
    first_price: f64,
}

/// A single booked flight awaiting evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct FlightRequest {
    /// The fields exactly as they appeared in the input, used when reporting.
    pub fields: Vec<String>,
    pub origin: String,
    pub destination: String,
    pub aircraft: String,
    pub booked: PerClass<u32>,
    pub prices: PerClass<f64>,
}

impl FlightRequest {
    /// Converts the raw fields of a bookings row into a typed request.
    pub fn from_fields(fields: Vec<String>) -> Result<Self, csv::Error> {
        let row: BookingRow = fields
            .iter()
            .collect::<csv::StringRecord>()
            .deserialize(None)?;

        Ok(Self {
            origin: row.origin,
            destination: row.destination,
            aircraft: row.aircraft,
            booked: PerClass {
                economy: row.economy_booked,
                business: row.business_booked,
                first: row.first_booked,
            },
            prices: PerClass {
                economy: row.economy_price,
                business: row.business_price,
                first: row.first_price,
            },
            fields,
        })
    }
}

/// The outcome of evaluating a flight that passed every validation check.
#[derive(Clone, Debug, PartialEq)]
pub struct FlightResult {
    pub request: FlightRequest,
    pub income: f64,
    pub cost: f64,
    pub profit: f64,
}

impl FlightResult {
    pub fn new(request: FlightRequest, income: f64, cost: f64) -> Self {
        Self {
            request,
            income,
            cost,
            profit: income - cost,
        }
    }
}

/// Airports keyed by code, together with the origin mapping used to pick a
/// distance column.
#[derive(Clone, Debug, Default)]
pub struct AirportTable {
    airports: HashMap<String, Airport>,
    origins: OriginMap,
}

impl AirportTable {
    /// Builds the table. When a code appears more than once the first row
    /// wins.
    pub fn new(airports: Vec<Airport>, origins: OriginMap) -> Self {
        let mut table = HashMap::with_capacity(airports.len());
        for airport in airports {
            table.entry(airport.code.clone()).or_insert(airport);
        }

        Self {
            airports: table,
            origins,
        }
    }

    pub fn get(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    /// The distance from `origin` to `destination`, or None if the
    /// destination is unknown.
    pub fn distance(&self, origin: &str, destination: &str) -> Option<f64> {
        let column = self.origins.column_for(origin);
        self.get(destination)
            .map(|airport| airport.distance(column))
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

/// Aircraft keyed by type name.
#[derive(Clone, Debug, Default)]
pub struct AircraftTable {
    aircraft: HashMap<String, Aircraft>,
}

impl AircraftTable {
    /// Builds the table. When a type appears more than once the first row
    /// wins.
    pub fn new(aircraft: Vec<Aircraft>) -> Self {
        let mut table = HashMap::with_capacity(aircraft.len());
        for plane in aircraft {
            table.entry(plane.kind.clone()).or_insert(plane);
        }

        Self { aircraft: table }
    }

    pub fn get(&self, kind: &str) -> Option<&Aircraft> {
        self.aircraft.get(kind)
    }

    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(raw: &str) -> Vec<String> {
        raw.split(',').map(String::from).collect()
    }

    fn record(raw: &str) -> csv::StringRecord {
        raw.split(',').collect()
    }

    #[test]
    fn should_select_distance_column_by_origin() {
        let origins = OriginMap::new("MAN", "LGW");

        assert_eq!(origins.column_for("MAN"), DistanceColumn::Primary);
        assert_eq!(origins.column_for("LGW"), DistanceColumn::Alternate);

        // Anything that was never mapped uses the alternate column.
        assert_eq!(origins.column_for("BHX"), DistanceColumn::Alternate);
    }

    #[test]
    fn should_allow_extra_origins() {
        let mut origins = OriginMap::default();
        origins.insert("LPL", DistanceColumn::Primary);

        assert_eq!(origins.column_for("LPL"), DistanceColumn::Primary);
        assert_eq!(origins.column_for("MAN"), DistanceColumn::Primary);
    }

    #[test]
    fn should_deserialize_airport_row() {
        let airport: Airport = record("JFK,John F Kennedy International,5376,5583")
            .deserialize(None)
            .unwrap();

        assert_eq!(
            airport,
            Airport {
                code: String::from("JFK"),
                name: String::from("John F Kennedy International"),
                primary_distance: 5376.0,
                alternate_distance: 5583.0,
            }
        );
        assert_eq!(airport.distance(DistanceColumn::Primary), 5376.0);
        assert_eq!(airport.distance(DistanceColumn::Alternate), 5583.0);
    }

    #[test]
    fn should_deserialize_aircraft_row() {
        let aircraft: Aircraft = record("Large narrow body,£7,5600,180,20,4")
            .deserialize(None)
            .unwrap();

        assert_eq!(aircraft.kind, "Large narrow body");
        assert!((aircraft.running_cost - 0.07).abs() < 1e-12);
        assert_eq!(aircraft.max_range, 5600.0);
        assert_eq!(
            aircraft.capacity,
            PerClass {
                economy: 180,
                business: 20,
                first: 4
            }
        );
        assert_eq!(aircraft.capacity.total(), 204);
    }

    #[test]
    fn should_fail_to_deserialize_aircraft_with_bad_cost() {
        let result: Result<Aircraft, _> = record("Large narrow body,seven,5600,180,20,4")
            .deserialize(None);
        assert!(result.is_err());
    }

    #[test]
    fn should_build_flight_request_from_fields() {
        let raw = fields("MAN,JFK,Large narrow body,150,12,2,399,999,1899");
        let request = FlightRequest::from_fields(raw.clone()).unwrap();

        assert_eq!(request.fields, raw);
        assert_eq!(request.origin, "MAN");
        assert_eq!(request.destination, "JFK");
        assert_eq!(request.aircraft, "Large narrow body");
        assert_eq!(request.booked.total(), 164);
        assert_eq!(request.booked[SeatClass::Business], 12);
        assert_eq!(request.prices[SeatClass::First], 1899.0);
    }

    #[test]
    fn should_fail_to_build_flight_request_with_missing_columns() {
        assert!(FlightRequest::from_fields(fields("MAN,JFK,Large narrow body,150")).is_err());
    }

    #[test]
    fn should_reject_airport_with_invalid_distance() {
        // Distances that are not finite or are negative would let a flight
        // slip past the range check, so the row itself is rejected.
        for raw in [
            "JFK,Kennedy,NaN,5583",
            "JFK,Kennedy,5376,inf",
            "JFK,Kennedy,-5376,5583",
        ] {
            let result: Result<Airport, _> = record(raw).deserialize(None);
            assert!(result.is_err(), "accepted {}", raw);
        }
    }

    #[test]
    fn should_reject_aircraft_with_invalid_range() {
        let result: Result<Aircraft, _> = record("Large narrow body,£7,NaN,180,20,4")
            .deserialize(None);
        assert!(result.is_err());
    }

    #[test]
    fn should_fail_to_build_flight_request_with_text_before_price() {
        let raw = fields("MAN,JFK,Large narrow body,150,12,2,N/A399,abc999,x1899");
        assert!(FlightRequest::from_fields(raw).is_err());
    }

    #[test]
    fn should_fail_to_build_flight_request_with_bad_seat_count() {
        let raw = fields("MAN,JFK,Large narrow body,lots,12,2,399,999,1899");
        assert!(FlightRequest::from_fields(raw).is_err());
    }

    #[test]
    fn should_keep_first_of_duplicate_airports() {
        let first = Airport {
            code: String::from("JFK"),
            name: String::from("First"),
            primary_distance: 1.0,
            alternate_distance: 2.0,
        };
        let second = Airport {
            name: String::from("Second"),
            ..first.clone()
        };

        let table = AirportTable::new(vec![first, second], OriginMap::default());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("JFK").unwrap().name, "First");
    }

    #[test]
    fn should_return_no_distance_for_unknown_destination() {
        let table = AirportTable::new(Vec::new(), OriginMap::default());
        assert!(table.is_empty());
        assert_eq!(table.distance("MAN", "JFK"), None);
    }
}
