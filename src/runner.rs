//! Shared `main` plumbing for the drill binaries.

use std::io::{self, BufRead, StdinLock, StdoutLock, Write};
use std::process::ExitCode;

use colored::Colorize;
use tracing::{debug, info_span};

use crate::config::Settings;
use crate::error::DrillResult;
use crate::input::Scanner;
use crate::logging;

/// Runs one drill against stdin/stdout and turns a failure into exit status 1.
pub fn run<F>(drill: &str, body: F) -> ExitCode
where
    F: FnOnce(&mut Scanner<StdinLock<'static>>, &Settings, &mut StdoutLock<'static>) -> DrillResult<()>,
{
    logging::init();

    let result = Settings::load().and_then(|settings| {
        let stdin = io::stdin().lock();
        let mut stdout = io::stdout().lock();
        run_with(drill, stdin, &mut stdout, &settings, body)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}: {}", "error".red().bold(), drill, err);
            ExitCode::FAILURE
        }
    }
}

pub fn run_with<R, W, F>(
    drill: &str,
    reader: R,
    writer: &mut W,
    settings: &Settings,
    body: F,
) -> DrillResult<()>
where
    R: BufRead,
    W: Write,
    F: FnOnce(&mut Scanner<R>, &Settings, &mut W) -> DrillResult<()>,
{
    let _span = info_span!("drill", name = drill).entered();
    let mut scanner = Scanner::new(reader);
    body(&mut scanner, settings, writer)?;
    writer.flush()?;
    debug!("drill finished");
    Ok(())
}

/// Runs a drill body over in-memory input and returns everything it printed.
pub fn run_on_str<'a, F>(
    drill: &str,
    input: &'a str,
    settings: &Settings,
    body: F,
) -> DrillResult<String>
where
    F: FnOnce(&mut Scanner<&'a [u8]>, &Settings, &mut Vec<u8>) -> DrillResult<()>,
{
    let mut out = Vec::new();
    run_with(drill, input.as_bytes(), &mut out, settings, body)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
