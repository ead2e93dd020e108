use crate::batch::FailedFlight;
use crate::errors::ReportError;
use crate::model::FlightResult;
use std::fmt;
use std::fmt::Formatter;
use std::fs;
use std::path::Path;

pub const DEFAULT_REPORT_PATH: &str = "report.txt";

impl fmt::Display for FlightResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight: {} | Income: £{:.2} | Cost: £{:.2} | Profit: £{:.2}",
            self.request.fields.join(","),
            self.income,
            self.cost,
            self.profit
        )
    }
}

/// Renders one line per flight, without a trailing newline.
pub fn render_report(results: &[FlightResult]) -> String {
    results
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders rejected flights for the console, one per line.
pub fn render_failures(failures: &[FailedFlight]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the report for `results` to `path`, replacing any existing file.
pub fn write_report(path: &Path, results: &[FlightResult]) -> Result<(), ReportError> {
    fs::write(path, render_report(results)).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
