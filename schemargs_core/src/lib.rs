//! Core module for `schemargs`.
//! See [documentation root](https://docs.rs/schemargs/latest/schemargs/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;

pub use model::*;
pub use api::CommandLine;
pub use parser::{Args, ArgsError, ArgsParser};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
