//! Compile-time reports about the host C toolchain: the operating system
//! family the crate was built for and the sizes of the C fundamental types.

pub mod cmdline;
pub mod ctype;
pub mod driver;
pub mod error;
pub mod machine;
pub mod platform;
pub mod report;

#[cfg(test)]
mod test;

#[macro_use]
extern crate static_assertions;

pub use crate::ctype::FundamentalType;
pub use crate::error::ReportError;
pub use crate::platform::Platform;
pub use crate::report::{Format, Report, SizeLine};
