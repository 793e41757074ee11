//! Table query engine.
//!
//! Evaluation runs rows through a fixed pipeline:
//! rows → filtering → sorting → pagination → selection view.
//!
//! # Types
//!
//! - [`TableFilter`] - Filter conditions and global search
//! - [`TableSort`] - Active and default sort keys
//! - [`PaginationConfig`] - Current page and page size
//! - [`RowSelection`] - Selected row keys
//! - [`Page`] - A page of query results with counts
//!
//! [`evaluate`] is the pipeline itself; [`TableView`](crate::view::TableView)
//! bundles the state of one table and mutates it through checked operations.

mod engine;
mod filter;
mod page;
mod scalar;
mod selection;
mod sort;

pub use engine::evaluate;
pub use filter::FilterCondition;
pub use filter::FilterOperator;
pub use filter::GlobalSearch;
pub use filter::LogicalOperator;
pub use filter::TableFilter;
pub use page::Page;
pub use page::PaginationConfig;
pub use page::total_pages;
pub use selection::RowSelection;
pub use selection::SelectionMode;
pub use selection::SelectionState;
pub use sort::Direction;
pub use sort::SortConfig;
pub use sort::TableSort;
pub(crate) use sort::sortable_column;
