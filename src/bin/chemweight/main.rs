use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chemweight::{analyze, ElementTable};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod display;

fn main() -> ExitCode {
    init_tracing();
    let cli = cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chemweight=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Returns `Ok(false)` when at least one formula was rejected.
fn run(cli: &cli::Cli) -> Result<bool> {
    let table = match &cli.table {
        Some(path) => ElementTable::load(path)
            .with_context(|| format!("cannot load element table '{}'", path.display()))?,
        None => ElementTable::builtin(),
    };
    tracing::info!(elements = table.len(), "element table loaded");

    let formulas = if cli.formulas.is_empty() {
        read_formulas(io::stdin().lock()).context("cannot read formulas from stdin")?
    } else {
        cli.formulas.clone()
    };

    let output = display::Output::select(cli.theme, cli.json);
    let mut out = io::stdout().lock();
    let mut all_valid = true;

    for formula in &formulas {
        match analyze(formula, &table) {
            Ok(analysis) => {
                if !cli.quiet {
                    output.write(&mut out, &analysis)?;
                }
            }
            Err(e) => {
                all_valid = false;
                display::print_rejection(formula, &e);
            }
        }
    }

    Ok(all_valid)
}

/// One formula per line, validated exactly as written. `lines` already
/// strips the `\n` or `\r\n` terminator; whitespace-only lines are skipped.
fn read_formulas(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut formulas = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            formulas.push(line);
        }
    }
    Ok(formulas)
}
