use crate::errors::RecordError;
use crate::evaluator::evaluate;
use crate::model::{AircraftTable, AirportTable, FlightRequest, FlightResult};
use log::{debug, warn};
use std::fmt;
use std::fmt::Formatter;

/// A booking that could not be turned into a [`FlightResult`], kept with the
/// fields it was read from.
#[derive(Clone, Debug, PartialEq)]
pub struct FailedFlight {
    pub fields: Vec<String>,
    pub reason: String,
}

impl FailedFlight {
    fn new(fields: Vec<String>, err: &RecordError) -> Self {
        Self {
            fields,
            reason: err.to_string(),
        }
    }
}

impl fmt::Display for FailedFlight {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight Data: {} - Error: {}",
            self.fields.join(","),
            self.reason
        )
    }
}

/// The result of running a batch of bookings, split into flights that were
/// evaluated and flights that were rejected. Both lists keep input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchOutcome {
    pub successes: Vec<FlightResult>,
    pub failures: Vec<FailedFlight>,
}

impl BatchOutcome {
    fn record(&mut self, fields: Vec<String>, outcome: Result<FlightResult, RecordError>) {
        match outcome {
            Ok(result) => {
                debug!(
                    "evaluated flight {}: income={:.2} cost={:.2} profit={:.2}",
                    fields.join(","),
                    result.income,
                    result.cost,
                    result.profit
                );
                self.successes.push(result);
            }
            Err(err) => {
                warn!("rejected flight {}: {}", fields.join(","), err);
                self.failures.push(FailedFlight::new(fields, &err));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Evaluates every request independently. A failing request is recorded
/// with its reason and never affects the requests after it.
pub fn process_all(
    requests: &[FlightRequest],
    airports: &AirportTable,
    aircraft: &AircraftTable,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for request in requests {
        let result = evaluate(request, airports, aircraft).map_err(RecordError::from);
        outcome.record(request.fields.clone(), result);
    }

    outcome
}

/// Like [`process_all`], but starts from raw bookings rows. Rows that cannot
/// be converted into a request are recorded as failures alongside the ones
/// that fail validation.
pub fn process_rows(
    rows: Vec<Vec<String>>,
    airports: &AirportTable,
    aircraft: &AircraftTable,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for fields in rows {
        let result = FlightRequest::from_fields(fields.clone())
            .map_err(RecordError::from)
            .and_then(|request| {
                evaluate(&request, airports, aircraft).map_err(RecordError::from)
            });
        outcome.record(fields, result);
    }

    outcome
}
