use flight_profits::args::Args;
use flight_profits::engine::ProfitEngine;
use flight_profits::report::{render_failures, write_report};
use log::info;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::process;

fn main() {
    let args = Args::parse();

    if let Err(err) = TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to initialise logging: {}", err);
    }

    let engine = match ProfitEngine::load(
        &args.airports,
        &args.aircraft,
        args.delimiter,
        args.origins(),
    ) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("failed to load reference tables: {}", err);
            process::exit(1);
        }
    };

    // Every bookings file is its own batch. Failures are listed per batch
    // while successes from all batches go into the one report.
    let mut successes = Vec::new();
    for path in &args.flights {
        let outcome = match engine.process_file(path) {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!("failed to process bookings file: {}", err);
                process::exit(1);
            }
        };

        if !outcome.failures.is_empty() {
            println!("Errors in {}:", path.display());
            println!("{}", render_failures(&outcome.failures));
        }
        successes.extend(outcome.successes);
    }

    if let Err(err) = write_report(&args.report, &successes) {
        eprintln!("failed to generate output report: {}", err);
        process::exit(1);
    }
    info!(
        "wrote {} flights to {}",
        successes.len(),
        args.report.display()
    );
}
