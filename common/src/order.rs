//! Line items and the tabular view of an order.

pub mod item;
pub mod table;

pub use item::LineItem;
pub use table::{Row, Table};
