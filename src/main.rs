use std::process::ExitCode;

use divider_lut::opts::Opts;
use divider_lut::{backend, Config, Error, Table};

fn run(opts: &Opts) -> Result<(), Error> {
    let config = Config {
        degree: opts.degree,
        intervals: opts.intervals,
        ..Default::default()
    };

    let table = Table::build(&config)?;

    backend::write(&table, &opts.output)?;

    Ok(())
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    env_logger::Builder::new()
        .filter_level(opts.log_level)
        .init();

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");

            ExitCode::FAILURE
        }
    }
}
