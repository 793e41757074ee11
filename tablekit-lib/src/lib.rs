//! Table query engine library
//!
//! In-memory filtering, global search, multi-column sorting, pagination and
//! row selection for data tables.

pub mod error;
pub mod model;
pub mod query;
pub mod view;

pub use query::Page;
pub use query::evaluate;
pub use view::TableView;
