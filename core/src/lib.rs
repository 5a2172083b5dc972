//! # Kasir Core
//!
//! The order aggregate ([`transaction::Transaction`]) and the discount rules
//! used to price it ([`pricing`]).

pub mod pricing;
pub mod transaction;

pub use pricing::{Amount, DiscountTier, PricedSummary};
pub use transaction::{CheckOutcome, RESET_MESSAGE, Transaction};
