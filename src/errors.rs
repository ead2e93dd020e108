use crate::model::SeatClass;
use std::error::Error;
use std::fmt;
use std::fmt::Formatter;
use std::io;
use std::path::PathBuf;

/// Errors that abort a run while the input tables are being loaded.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read at all.
    Read { path: PathBuf, source: io::Error },

    /// The file was read but could not be split into rows.
    Parse { path: PathBuf, source: csv::Error },

    /// A row of a reference table is missing a column or holds a value that
    /// cannot be converted. `row` is the 1-based data row, header excluded.
    InvalidRow {
        path: PathBuf,
        row: usize,
        source: csv::Error,
    },
}

/// Errors raised while writing the profit report.
#[derive(Debug)]
pub enum ReportError {
    Write { path: PathBuf, source: io::Error },
}

/// Reasons a single flight request fails validation. Evaluation stops at the
/// first failing check.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    UnknownDestination(String),
    UnknownAircraft(String),
    InsufficientRange {
        aircraft: String,
        destination: String,
        distance: f64,
        max_range: f64,
    },
    TotalOverbooking {
        booked: u64,
        capacity: u64,
    },
    ClassOverbooking {
        class: SeatClass,
        booked: u32,
        capacity: u32,
    },
}

/// Everything that can go wrong with one booking row. These are collected
/// per record and never stop the batch.
#[derive(Debug)]
pub enum RecordError {
    Malformed(csv::Error),
    Invalid(ValidationError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Read { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Parse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
            LoadError::InvalidRow { path, row, source } => write!(
                f,
                "invalid data in {} at row {}: {}",
                path.display(),
                row,
                source
            ),
        }
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Write { path, source } => {
                write!(f, "failed to write report to {}: {}", path.display(), source)
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownDestination(code) => {
                write!(f, "destination airport code {} is not recognised", code)
            }
            ValidationError::UnknownAircraft(kind) => {
                write!(f, "aircraft type {} is not recognised", kind)
            }
            ValidationError::InsufficientRange {
                aircraft,
                destination,
                distance,
                max_range,
            } => write!(
                f,
                "{} cannot reach {}: distance {} exceeds maximum range {}",
                aircraft, destination, distance, max_range
            ),
            ValidationError::TotalOverbooking { booked, capacity } => write!(
                f,
                "too many seats booked: booked={} capacity={}",
                booked, capacity
            ),
            ValidationError::ClassOverbooking {
                class,
                booked,
                capacity,
            } => write!(
                f,
                "too many {} seats booked: booked={} capacity={}",
                class, booked, capacity
            ),
        }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Malformed(err) => write!(f, "malformed booking record: {}", err),
            RecordError::Invalid(err) => write!(f, "{}", err),
        }
    }
}

impl From<ValidationError> for RecordError {
    fn from(err: ValidationError) -> Self {
        RecordError::Invalid(err)
    }
}

impl From<csv::Error> for RecordError {
    fn from(err: csv::Error) -> Self {
        RecordError::Malformed(err)
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Read { source, .. } => Some(source),
            LoadError::Parse { source, .. } | LoadError::InvalidRow { source, .. } => Some(source),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReportError::Write { source, .. } => Some(source),
        }
    }
}

impl Error for ValidationError {}
impl Error for RecordError {}
