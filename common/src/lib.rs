//! Types shared by every member of the `kasir` workspace.
//!
//! * [`order`]: line items and the tabular snapshot returned by every operation.
//! * [`confirmation`]: the port through which an operator confirms an order.
//! * [`error`]: the single domain error type.
//! * [`config`]: runtime switches collected by the CLI.

pub mod config;
pub mod confirmation;
pub mod error;
pub mod order;

pub use error::{Error, Result};
