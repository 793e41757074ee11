//! Error types

mod config;
mod query;
mod selection;
mod validation;

pub use config::*;
pub use query::*;
pub use selection::*;
pub use validation::*;
