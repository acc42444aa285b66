mod args;
mod error;
mod interface;
mod middleware;
mod printer;
mod scanner;
mod schema;

pub use args::*;
pub use error::*;
pub(crate) use interface::*;
pub use middleware::*;
pub(crate) use printer::*;
pub(crate) use scanner::*;
pub(crate) use schema::*;
