use std::fmt::Formatter;
use std::io;

#[derive(Debug)]
pub enum ReportError {
    UnrecognizedParameter(String),
    Output(io::Error),
    Serialize(serde_json::Error),
}

impl ReportError {
    /// Reader went away before the output was complete, e.g. `| head -1`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ReportError::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ReportError::UnrecognizedParameter(s) => write!(f, "Unrecognized parameter: {}", s),
            ReportError::Output(e) => write!(f, "cannot write to standard output: {}", e),
            ReportError::Serialize(e) => write!(f, "cannot serialize report: {}", e),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::UnrecognizedParameter(_) => None,
            ReportError::Output(e) => Some(e),
            ReportError::Serialize(e) => Some(e),
        }
    }
}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        ReportError::Output(e)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        ReportError::Serialize(e)
    }
}
