use crate::errors::LoadError;
use csv::Trim;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const DEFAULT_DELIMITER: u8 = b',';

/// Strips a trailing `#` comment and surrounding whitespace from a line,
/// returning None if nothing is left.
fn strip_comment(line: &str) -> Option<&str> {
    let line = match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    };

    let line = line.trim();
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

/// Splits delimiter-separated text into rows of string fields.
///
/// The first line is always treated as a header and dropped. Comments are
/// removed from the remaining lines and blank lines are skipped. Quote
/// characters have no special meaning and fields are never coerced.
pub fn parse_table(content: &str, delimiter: u8) -> Result<Vec<Vec<String>>, csv::Error> {
    let cleaned = content
        .lines()
        .skip(1)
        .filter_map(strip_comment)
        .collect::<Vec<_>>()
        .join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .delimiter(delimiter)
        .from_reader(cleaned.as_bytes());

    reader
        .records()
        .map(|record| {
            record.map(|record| record.iter().map(String::from).collect::<Vec<_>>())
        })
        .collect()
}

/// Reads the file at `path` and splits it into rows; see [`parse_table`].
pub fn read_table(path: &Path, delimiter: u8) -> Result<Vec<Vec<String>>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_table(&content, delimiter).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a reference table and converts every row into `T`.
///
/// Any row that cannot be converted aborts the load, since the evaluator
/// cannot run against a partial reference table.
pub fn read_records<T>(path: &Path, delimiter: u8) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
{
    read_table(path, delimiter)?
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            row.iter()
                .collect::<csv::StringRecord>()
                .deserialize::<T>(None)
                .map_err(|source| LoadError::InvalidRow {
                    path: path.to_path_buf(),
                    row: idx + 1,
                    source,
                })
        })
        .collect()
}
