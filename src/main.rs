use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use functions_example::{Report, plus, plus_plus};

/// Call a couple of functions and print what they return
#[derive(Parser, Debug, Clone)]
#[clap(version)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = main_internal(args) {
        eprintln!("Error: {:?}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn main_internal(args: Cli) -> anyhow::Result<()> {
    log::debug!("parsed arguments: {args:#?}");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // call a function just as you'd expect, with `name(args)`
    let res = plus(1, 2);
    log::trace!("plus(1, 2) returned {res}");
    writeln!(out, "{}", Report::new([1, 2], res)).context("failed to write sum of two")?;

    let res = plus_plus(1, 2, 3);
    log::trace!("plus_plus(1, 2, 3) returned {res}");
    writeln!(out, "{}", Report::new([1, 2, 3], res)).context("failed to write sum of three")?;

    out.flush().context("failed to flush stdout")?;
    log::debug!("done");
    Ok(())
}
