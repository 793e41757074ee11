//! Row, value and column models

mod column;
mod row;
mod row_serde;
mod value;

pub use column::*;
pub use row::*;
pub use value::*;
