use std::{
    env,
    io::{self, Write},
    process::ExitCode,
};

use monkey::{
    config::Config,
    errors::errors::{Error, ErrorTip},
    init_tracing, repl,
};

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Error> {
    let config = Config::from_args(env::args().skip(1))?;
    let mut stdout = io::stdout().lock();

    match &config.source_file {
        Some(path) => repl::run_file(path, &mut stdout),
        None => repl::start(io::stdin().lock(), &mut stdout, &config),
    }
}

fn display_error(error: &Error) {
    let mut stderr = io::stderr();

    let _ = if let ErrorTip::None = error.get_tip() {
        writeln!(stderr, "Error: {} ({})", error.get_error_name(), error)
    } else {
        writeln!(stderr, "Error: {} ({})", error.get_error_name(), error.get_tip())
    };
}
