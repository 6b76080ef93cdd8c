use std::io::IsTerminal;
use std::process::ExitCode;

use candy_remainder::io::{stdin_at_once, stdin_buf, stdout_buf};
use tracing_subscriber::EnvFilter;

fn setup_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    setup_logger();

    let mut output = stdout_buf();
    // piped judge input is read whole; a terminal gets answers line by line
    let result = if std::io::stdin().is_terminal() {
        candy_remainder::run(&mut stdin_buf(), &mut output)
    } else {
        stdin_at_once().and_then(|mut input| candy_remainder::run(&mut input, &mut output))
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
