use std::io::{self, Write};
use std::process::ExitCode;

use buffalo_plugin_template::args::HELP_TEXT;
use buffalo_plugin_template::logging::init_tracing;
use buffalo_plugin_template::{Dispatcher, Outcome, ScaffoldError};

fn main() -> ExitCode {
    init_tracing();

    let argv: Vec<String> = std::env::args().collect();
    match run(&argv) {
        Ok(outcome) => {
            tracing::debug!(?outcome, "Done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(kind = err.kind(), "Fatal error");
            let mut stderr = io::stderr().lock();
            let _ = writeln!(stderr, "Error: {err}");
            if err.shows_help() {
                let _ = writeln!(stderr, "See help:\n{HELP_TEXT}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(argv: &[String]) -> Result<Outcome, ScaffoldError> {
    let mut stdout = io::stdout().lock();
    Dispatcher::from_env().run(argv, &mut stdout)
}
