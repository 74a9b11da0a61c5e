use std::fmt::Formatter;
use std::io::Write;

use serde::Serialize;

use crate::ctype::{FundamentalType, ALL_TYPES, PLATFORM_TYPES};
use crate::error::ReportError;
use crate::platform::{self, Platform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeLine {
    pub name: &'static str,
    pub size: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    pub types: Vec<SizeLine>,
}

impl SizeLine {
    pub fn new(t: FundamentalType) -> Self {
        Self {
            name: t.name(),
            size: t.sizeof(),
        }
    }

    pub fn unit(&self) -> &'static str {
        if self.size == 1 {
            "byte"
        } else {
            "bytes"
        }
    }
}

impl std::fmt::Display for SizeLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "Size of {}: {} {}", self.name, self.size, self.unit())
    }
}

impl Report {
    pub fn new(platform: Option<Platform>, types: &[FundamentalType]) -> Self {
        Self {
            platform,
            types: types.iter().copied().map(SizeLine::new).collect(),
        }
    }

    /// Host platform followed by the integer sizes.
    pub fn platform_specific() -> Self {
        Self::new(Some(platform::HOST), &PLATFORM_TYPES)
    }

    /// Sizes of every fundamental type.
    pub fn size_of_types() -> Self {
        Self::new(None, &ALL_TYPES)
    }

    pub fn write_to<W: Write>(&self, w: &mut W, format: Format) -> Result<(), ReportError> {
        match format {
            Format::Text => self.write_text(w),
            Format::Json => self.write_json(w),
        }
    }

    pub fn write_text<W: Write>(&self, w: &mut W) -> Result<(), ReportError> {
        write!(w, "{}", self)?;
        w.flush()?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, w: &mut W) -> Result<(), ReportError> {
        let json = serde_json::to_string(self)?;
        writeln!(w, "{}", json)?;
        w.flush()?;
        Ok(())
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        if let Some(p) = self.platform {
            writeln!(f, "{}", p)?;
        }
        for line in &self.types {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
