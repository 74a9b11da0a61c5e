use crate::machine::*;
use std::fmt::Formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundamentalType {
    Char,
    Short,
    Int,
    Long,
    LongLong,
    Float,
    Double,
}

/// Integer types reported next to the platform name.
pub const PLATFORM_TYPES: [FundamentalType; 3] = [
    FundamentalType::Int,
    FundamentalType::Long,
    FundamentalType::LongLong,
];

/// Every type the size reporter covers, in output order.
pub const ALL_TYPES: [FundamentalType; 7] = [
    FundamentalType::Char,
    FundamentalType::Short,
    FundamentalType::Int,
    FundamentalType::Long,
    FundamentalType::LongLong,
    FundamentalType::Float,
    FundamentalType::Double,
];

impl FundamentalType {
    /// C spelling of the type.
    pub fn name(self) -> &'static str {
        use FundamentalType::*;
        match self {
            Char => "char",
            Short => "short",
            Int => "int",
            Long => "long",
            LongLong => "long long",
            Float => "float",
            Double => "double",
        }
    }

    pub fn sizeof(self) -> u8 {
        use FundamentalType::*;
        match self {
            Char => CHAR_SIZE,
            Short => SHORT_SIZE,
            Int => INT_SIZE,
            Long => LONG_SIZE,
            LongLong => LLONG_SIZE,
            Float => FLOAT_SIZE,
            Double => DOUBLE_SIZE,
        }
    }
}

impl std::fmt::Display for FundamentalType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.write_str(self.name())
    }
}
