use crate::model::{OriginMap, DEFAULT_ALTERNATE_ORIGIN, DEFAULT_PRIMARY_ORIGIN};
use crate::report::DEFAULT_REPORT_PATH;
use clap::{App, Arg, ArgMatches};
use simplelog::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;

pub struct Args {
    pub airports: PathBuf,
    pub aircraft: PathBuf,
    pub flights: Vec<PathBuf>,
    pub report: PathBuf,
    pub delimiter: u8,
    pub primary_origin: String,
    pub alternate_origin: String,
    pub log_level: LevelFilter,
}

fn validate_delimiter(value: String) -> Result<(), String> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(()),
        _ => Err(format!(
            "delimiter must be a single ASCII character, got {:?}",
            value
        )),
    }
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("flight-profits")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Calculates the profit of booked flights and reports invalid bookings")
        .arg(Arg::with_name("airports")
            .takes_value(true).required(true).help("path of the airports table"))
        .arg(Arg::with_name("aircraft")
            .takes_value(true).required(true).help("path of the aircraft table"))
        .arg(Arg::with_name("flights")
            .takes_value(true).required(true).multiple(true)
            .help("paths of flight booking tables, each processed as a separate batch"))
        .arg(Arg::with_name("report")
            .long("report").takes_value(true).default_value(DEFAULT_REPORT_PATH)
            .help("path the profit report is written to"))
        .arg(Arg::with_name("delimiter")
            .short("d").long("delimiter").takes_value(true).default_value(",")
            .validator(validate_delimiter)
            .help("field delimiter used by every input table"))
        .arg(Arg::with_name("primary_origin")
            .long("primary-origin").takes_value(true).default_value(DEFAULT_PRIMARY_ORIGIN)
            .help("origin airport whose distances are in the first distance column"))
        .arg(Arg::with_name("alternate_origin")
            .long("alternate-origin").takes_value(true).default_value(DEFAULT_ALTERNATE_ORIGIN)
            .help("origin airport whose distances are in the second distance column"))
        .arg(Arg::with_name("verbose")
            .short("v").long("verbose").multiple(true).conflicts_with("quiet")
            .help("log more detail; repeat for trace output"))
        .arg(Arg::with_name("quiet")
            .short("q").long("quiet")
            .help("only log warnings and errors"))
}

impl Args {
    pub fn parse() -> Self {
        Self::from_matches(&app().get_matches())
    }

    /// Parses arguments from an explicit list, returning clap's error rather
    /// than exiting.
    pub fn parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::from_matches(&app().get_matches_from_safe(args)?))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let log_level = if matches.is_present("quiet") {
            LevelFilter::Warn
        } else {
            match matches.occurrences_of("verbose") {
                0 => LevelFilter::Info,
                1 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };

        Self {
            airports: PathBuf::from(matches.value_of_os("airports").unwrap_or_default()),
            aircraft: PathBuf::from(matches.value_of_os("aircraft").unwrap_or_default()),
            flights: matches
                .values_of_os("flights")
                .map(|values| values.map(PathBuf::from).collect())
                .unwrap_or_default(),
            report: PathBuf::from(
                matches
                    .value_of_os("report")
                    .unwrap_or_else(|| DEFAULT_REPORT_PATH.as_ref()),
            ),
            delimiter: matches
                .value_of("delimiter")
                .and_then(|value| value.bytes().next())
                .unwrap_or(b','),
            primary_origin: matches
                .value_of("primary_origin")
                .unwrap_or(DEFAULT_PRIMARY_ORIGIN)
                .to_string(),
            alternate_origin: matches
                .value_of("alternate_origin")
                .unwrap_or(DEFAULT_ALTERNATE_ORIGIN)
                .to_string(),
            log_level,
        }
    }

    pub fn origins(&self) -> OriginMap {
        OriginMap::new(&self.primary_origin, &self.alternate_origin)
    }
}
