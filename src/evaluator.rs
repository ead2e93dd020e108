use crate::errors::ValidationError;
use crate::model::{AircraftTable, AirportTable, FlightRequest, FlightResult, SeatClass};

/// Validates a flight request against the reference tables and computes its
/// income, cost and profit.
///
/// Checks run in a fixed order and the first failure is returned:
/// destination, aircraft, range, total seats, then each class in turn.
/// Figures are kept at full precision; rounding is left to the report.
pub fn evaluate(
    request: &FlightRequest,
    airports: &AirportTable,
    aircraft: &AircraftTable,
) -> Result<FlightResult, ValidationError> {
    let distance = airports
        .distance(&request.origin, &request.destination)
        .ok_or_else(|| ValidationError::UnknownDestination(request.destination.clone()))?;

    let plane = aircraft
        .get(&request.aircraft)
        .ok_or_else(|| ValidationError::UnknownAircraft(request.aircraft.clone()))?;

    if distance > plane.max_range {
        return Err(ValidationError::InsufficientRange {
            aircraft: plane.kind.clone(),
            destination: request.destination.clone(),
            distance,
            max_range: plane.max_range,
        });
    }

    let booked = request.booked.total();
    let capacity = plane.capacity.total();
    if booked > capacity {
        return Err(ValidationError::TotalOverbooking { booked, capacity });
    }

    for class in SeatClass::ALL {
        if request.booked[class] > plane.capacity[class] {
            return Err(ValidationError::ClassOverbooking {
                class,
                booked: request.booked[class],
                capacity: plane.capacity[class],
            });
        }
    }

    let income: f64 = SeatClass::ALL
        .iter()
        .map(|&class| f64::from(request.booked[class]) * request.prices[class])
        .sum();
    let cost = plane.running_cost * distance * booked as f64;

    Ok(FlightResult::new(request.clone(), income, cost))
}
