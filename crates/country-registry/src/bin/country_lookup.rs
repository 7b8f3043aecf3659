//! Country lookup CLI.
//!
//! This binary delegates to `country_registry::lookup_cli` for parsing and
//! lookups, keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use country_registry::lookup_cli::{
    CliError, LookupOutcome, ParseOutcome, format_outcome, load_registry, parse_args,
    resolve_keys,
};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(code) => code,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(err) = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        drop(err);
    }
}

fn run() -> Result<ExitCode, CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(ExitCode::SUCCESS)
        }
        ParseOutcome::Options(options) => {
            let registry = load_registry(&options)?;
            let outcomes = resolve_keys(&registry, &options)?;
            let mut out = io::stdout().lock();
            for outcome in &outcomes {
                let line = format_outcome(outcome, options.json())?;
                if let Err(err) = writeln!(out, "{line}") {
                    drop(err);
                }
            }
            if outcomes.iter().all(LookupOutcome::is_found) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: country-lookup [options] <key>...\n",
        "\n",
        "Keys are two-letter codes, three-letter codes, or numeric codes.\n",
        "\n",
        "Options:\n",
        "  --mask <mask>    Categories to match: any, regular, old, region,\n",
        "                   or a comma-separated union (defaults to any)\n",
        "  --data <path>    Load the dataset from a JSON file\n",
        "  --json           Print each result as a JSON line\n",
        "  --               Treat remaining arguments as keys\n",
        "  -h, --help       Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}
