use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use log::debug;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use ctl::{parse_ctl, parse_kripke, satisfies};

fn main() -> ExitCode {
    let level = std::env::var("CTL_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);

    match run() {
        Ok(true) => {
            println!("true");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("false");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<bool> {
    let path = std::env::args().nth(1).context("No input file provided")?;
    let input = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;

    let (ts, formula) = parse_kripke(&input).context("Failed to parse input file")?;
    let formula = parse_ctl(&formula).context("Failed to parse formula")?;

    let now = Instant::now();
    let verdict = satisfies(&ts, &formula);
    debug!("check took {:?}", now.elapsed());

    Ok(verdict)
}
