use std::io::{self, Write};
use std::process::exit;

use crate::cmdline::Cli;
use crate::error::ReportError;
use crate::machine;
use crate::platform::HOST;
use crate::report::Report;

/// Writes `report` to `out` in the requested format. Diagnostics go to `diag` when verbose.
///
/// Only errors from `out` are returned; a failing `diag` never affects the report.
pub fn run<W: Write, D: Write>(
    report: &Report,
    cli: &Cli,
    out: &mut W,
    diag: &mut D,
) -> Result<(), ReportError> {
    if cli.verbose {
        let _ = print_diagnostics(diag);
    }
    report.write_to(out, cli.format)
}

pub fn print_diagnostics<D: Write>(diag: &mut D) -> Result<(), ReportError> {
    writeln!(
        diag,
        "target: {}-{} ({})",
        std::env::consts::ARCH,
        std::env::consts::OS,
        std::env::consts::FAMILY
    )?;
    writeln!(diag, "platform indicator: {}", HOST.indicator())?;
    writeln!(diag, "pointer width: {} bytes", machine::PTR_SIZE)?;
    writeln!(
        diag,
        "char is {}",
        if machine::CHAR_SIGNED {
            "signed"
        } else {
            "unsigned"
        }
    )?;
    Ok(())
}

/// Entry point shared by the binaries.
pub fn main(about: &str, report: Report) {
    let cli = Cli::parse(about);
    let stdout = io::stdout();
    let stderr = io::stderr();
    let result = run(&report, &cli, &mut stdout.lock(), &mut stderr.lock());
    match result {
        Ok(()) => (),
        Err(e) if e.is_broken_pipe() => (),
        Err(e) => {
            let _ = writeln!(io::stderr(), "{}", e);
            exit(1);
        }
    }
}
