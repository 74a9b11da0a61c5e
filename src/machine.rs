use core::ffi::{c_char, c_double, c_float, c_int, c_long, c_longlong, c_short};
use core::mem::size_of;

pub const CHAR_SIGNED: bool = c_char::MIN != 0;
pub const CHAR_SIZE: u8 = size_of::<c_char>() as u8;
pub const SHORT_SIZE: u8 = size_of::<c_short>() as u8;
pub const INT_SIZE: u8 = size_of::<c_int>() as u8;
pub const LONG_SIZE: u8 = size_of::<c_long>() as u8;
pub const LLONG_SIZE: u8 = size_of::<c_longlong>() as u8;
pub const FLOAT_SIZE: u8 = size_of::<c_float>() as u8;
pub const DOUBLE_SIZE: u8 = size_of::<c_double>() as u8;
pub const PTR_SIZE: u8 = size_of::<*const ()>() as u8;

const_assert!(CHAR_SIZE == 1);
const_assert!(SHORT_SIZE >= 2);
const_assert!(INT_SIZE >= 2);
const_assert!(LONG_SIZE >= 4);
const_assert!(LLONG_SIZE >= 8);

const_assert!(SHORT_SIZE <= INT_SIZE);
const_assert!(INT_SIZE <= LONG_SIZE);
const_assert!(LONG_SIZE <= LLONG_SIZE);
const_assert!(FLOAT_SIZE <= DOUBLE_SIZE);
