mod args;
mod output;
#[cfg(feature = "with-http")]
mod serve;

use std::io::{self, BufRead};

use anyhow::{Context, Result};

use crate::args::{Cli, Commands};
use crate::output::{any_invalid, write_reports};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let validator = cli
        .settings()
        .build()
        .context("load configuration")?;

    let inputs: Vec<String> = if cli.stdin {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<_, _>>()
            .context("read stdin")?
    } else {
        match &cli.cmd {
            Some(Commands::Validate { emails }) => emails.clone(),
            #[cfg(feature = "with-http")]
            Some(Commands::Serve { bind }) => return serve::run(validator, *bind),
            None => {
                Cli::clap_command().print_help()?;
                println!();
                return Ok(());
            }
        }
    };

    let rows: Vec<_> = inputs.iter().map(|email| validator.validate(email)).collect();
    write_reports(&rows, &cli)?;

    // exit codes: 0 OK, 2 invalid addresses, 1 fatal
    if any_invalid(&rows) {
        std::process::exit(2);
    }
    Ok(())
}

#[cfg(feature = "with-tracing")]
fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(not(feature = "with-tracing"))]
fn init_logging(verbose: u8) {
    if verbose > 0 {
        eprintln!("logging requires the 'with-tracing' feature");
    }
}
