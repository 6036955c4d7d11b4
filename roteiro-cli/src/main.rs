//! Entry point for the `roteiro` command-line interface.
#![forbid(unsafe_code)]

use env_logger::Env;
use roteiro_cli::CliError;

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));
    match roteiro_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors with its own exit codes.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            report(&err);
            std::process::exit(1);
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn report(err: &CliError) {
    eprintln!("roteiro: {err}");
}
