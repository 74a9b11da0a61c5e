use serde::Serialize;
use std::fmt::Formatter;

/// Operating system family the crate was compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Unknown,
}

// Checked in the order Windows, Apple, Linux. Apple covers every Apple
// target and Linux includes Android, the same families the usual C
// preprocessor macros name.
#[cfg(target_os = "windows")]
pub const HOST: Platform = Platform::Windows;

#[cfg(all(not(target_os = "windows"), target_vendor = "apple"))]
pub const HOST: Platform = Platform::MacOs;

#[cfg(all(
    not(target_os = "windows"),
    not(target_vendor = "apple"),
    any(target_os = "linux", target_os = "android")
))]
pub const HOST: Platform = Platform::Linux;

#[cfg(not(any(
    target_os = "windows",
    target_vendor = "apple",
    target_os = "linux",
    target_os = "android"
)))]
pub const HOST: Platform = Platform::Unknown;

impl Platform {
    /// Line printed by the platform reporter.
    pub fn label(self) -> &'static str {
        match self {
            Platform::Windows => "Running on Windows",
            Platform::MacOs => "Running on macOS",
            Platform::Linux => "Running on Linux",
            Platform::Unknown => "Unknown platform",
        }
    }

    /// Compile-time predicate that selects this platform.
    pub fn indicator(self) -> &'static str {
        match self {
            Platform::Windows => "target_os = \"windows\"",
            Platform::MacOs => "target_vendor = \"apple\"",
            Platform::Linux => "target_os = \"linux\" | \"android\"",
            Platform::Unknown => "none",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.write_str(self.label())
    }
}
