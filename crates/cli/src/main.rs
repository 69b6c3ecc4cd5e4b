use ccwc_cli::args::Args;
use ccwc_cli::presentation::PROGRAM;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    // Usage errors exit here with status 2; --help and --version with 0.
    let args = Args::parse();

    match ccwc_cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{PROGRAM}: {e}");
            ExitCode::FAILURE
        }
    }
}
