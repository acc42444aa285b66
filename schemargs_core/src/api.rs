mod core;
mod marshaler;
mod operands;

pub use self::core::*;
pub(crate) use marshaler::*;
pub(crate) use operands::*;
