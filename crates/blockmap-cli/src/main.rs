//! `blockmap` command-line entry point

use blockmap_cli::tracing_setup::{init_tracing, TracingConfig};
use blockmap_cli::{cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = cli::command().get_matches();

    let tracing_config = TracingConfig {
        debug: matches.get_flag("debug"),
    };
    if let Err(err) = init_tracing(tracing_config) {
        eprintln!("warning: tracing disabled: {err}");
    }

    let stdout = std::io::stdout();
    match run(&matches, &mut stdout.lock()) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            tracing::error!("{:#}", err);
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
