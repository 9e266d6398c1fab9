use std::io;
use std::process::ExitCode;

use clap::Parser;
use pwd_analyzer::{run_console, ConsoleOptions};
use tracing_subscriber::EnvFilter;

/// Interactive password strength checker with a bounded brute-force demo.
#[derive(Parser, Debug)]
#[command(name = "pwd-analyzer", version, about)]
struct Args {
    /// Hide brute-force progress lines
    #[arg(short, long, env = "PWD_ANALYZER_QUIET")]
    quiet: bool,

    /// Log filter, e.g. "pwd_analyzer=debug"
    #[arg(long, env = "PWD_ANALYZER_LOG", default_value = "warn")]
    log: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let options = ConsoleOptions { quiet: args.quiet };
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match run_console(stdin.lock(), &mut stdout, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
