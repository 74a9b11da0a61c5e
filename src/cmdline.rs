use std::env;
use std::io::{self, Write};
use std::process::exit;

use crate::error::ReportError;
use crate::report::Format;

#[derive(Debug, PartialEq, Eq)]
pub struct Cli {
    /// Print target diagnostics to stderr
    pub verbose: bool,

    /// Output format
    pub format: Format,

    /// Print usage and exit
    pub help: bool,
}

impl Cli {
    /// Parses the process arguments, printing help or an error and exiting when needed.
    pub fn parse(about: &str) -> Self {
        let mut args = env::args();
        let prog_name = args.next().unwrap_or_else(|| "ctype-report".to_string());

        match Self::parse_from(args) {
            Ok(cli) if cli.help => {
                let written = print_help(&mut io::stdout().lock(), &prog_name, about);
                match written {
                    Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
                        let _ = writeln!(io::stderr(), "cannot write to standard output: {}", e);
                        exit(1);
                    }
                    _ => exit(0),
                }
            }
            Ok(cli) => cli,
            Err(e) => die(&e.to_string()),
        }
    }

    /// Parses arguments without the program name.
    pub fn parse_from<I>(args: I) -> Result<Self, ReportError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut result = Self::new();
        for arg in args {
            match arg.as_str() {
                "-h" | "-help" | "--help" => result.help = true,

                "-v" => result.verbose = true,

                "-json" => result.format = Format::Json,

                _ => return Err(ReportError::UnrecognizedParameter(arg)),
            }
        }
        Ok(result)
    }

    fn new() -> Self {
        Self {
            verbose: false,
            format: Format::Text,
            help: false,
        }
    }
}

pub fn die(msg: &str) -> ! {
    let _ = writeln!(io::stdout().lock(), "{}", msg);
    exit(1);
}

pub fn print_help<W: Write>(w: &mut W, prog_name: &str, about: &str) -> io::Result<()> {
    write!(
        w,
        "{}

Usage: {} [OPTIONS]

Options:
  -v                       Print target diagnostics to stderr
  -json                    Print the report as a JSON object
  -h, --help               Print help
",
        about, prog_name
    )?;
    w.flush()
}
