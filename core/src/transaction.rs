//! # Order Transaction
//!
//! The aggregate a cashier works on: an ordered list of line items plus a
//! confirmation flag that gates pricing.
//!
//! Every mutating operation validates its input before touching the list and
//! answers with a fresh [`Table`] of the resulting order. Lookups by name
//! always act on the *first* matching item; names are not required to be
//! unique, so a second `add_item` with the same name creates a second row.

use std::fmt;

use kasir_common::confirmation::{CONFIRM_PROMPT, ConfirmationChannel};
use kasir_common::order::item::validate_name;
use kasir_common::order::{LineItem, Table};
use kasir_common::{Error, Result};
use tracing::{debug, info, warn};

use crate::pricing::PricedSummary;

pub const RESET_MESSAGE: &str = "All items have been successfully deleted!";

/// What [`Transaction::check_order`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The operator accepted the order; carries the confirmed items.
    Confirmed(Table),
    /// The operator answered `n`. Nothing changed.
    Declined,
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Confirmed(table) => write!(f, "{} items confirmed", table.len()),
            CheckOutcome::Declined => f.write_str("\n"),
        }
    }
}

pub struct Transaction {
    items: Vec<LineItem>,
    confirmed: bool,
    confirmation: Box<dyn ConfirmationChannel>,
}

impl Transaction {
    /// Creates an empty, unconfirmed order that asks `confirmation` when
    /// [`check_order`](Self::check_order) runs.
    pub fn new(confirmation: Box<dyn ConfirmationChannel>) -> Self {
        Self {
            items: Vec::new(),
            confirmed: false,
            confirmation,
        }
    }

    pub fn view(&self) -> Table {
        Table::from_items(&self.items)
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add_item(&mut self, name: &str, quantity: u64, unit_price: u64) -> Result<Table> {
        let item = LineItem::new(name, quantity, unit_price)?;
        debug!(item = name, quantity, unit_price, "item added");
        self.items.push(item);
        Ok(self.view())
    }

    pub fn update_item_name(&mut self, name: &str, new_name: &str) -> Result<Table> {
        validate_name(name)?;
        validate_name(new_name)?;

        match self.find_mut(name) {
            Some(item) => {
                item.rename(new_name)?;
                debug!(item = name, new_name, "item renamed");
            }
            None => debug!(item = name, "rename skipped: no such item"),
        }
        Ok(self.view())
    }

    pub fn update_item_qty(&mut self, name: &str, new_quantity: u64) -> Result<Table> {
        validate_name(name)?;

        match self.find_mut(name) {
            Some(item) => {
                item.set_quantity(new_quantity)?;
                debug!(item = name, new_quantity, "item quantity updated");
            }
            None => debug!(item = name, "quantity update skipped: no such item"),
        }
        Ok(self.view())
    }

    pub fn update_item_price(&mut self, name: &str, new_unit_price: u64) -> Result<Table> {
        validate_name(name)?;

        match self.find_mut(name) {
            Some(item) => {
                item.set_unit_price(new_unit_price)?;
                debug!(item = name, new_unit_price, "item price updated");
            }
            None => debug!(item = name, "price update skipped: no such item"),
        }
        Ok(self.view())
    }

    /// Removes the first item called `name`. Later items with the same name stay.
    pub fn delete_item(&mut self, name: &str) -> Result<Table> {
        validate_name(name)?;

        match self.items.iter().position(|item| item.name() == name) {
            Some(idx) => {
                self.items.remove(idx);
                debug!(item = name, "item deleted");
            }
            None => debug!(item = name, "delete skipped: no such item"),
        }
        Ok(self.view())
    }

    /// Empties the order and withdraws any earlier confirmation.
    pub fn reset_transaction(&mut self) -> &'static str {
        self.items.clear();
        self.confirmed = false;
        info!("transaction reset");
        RESET_MESSAGE
    }

    /// Asks the confirmation channel whether the order is correct.
    ///
    /// `y` confirms a non-empty order, `n` leaves everything as it was. Any
    /// other answer, or `y` on an empty order, is [`Error::InvalidInput`].
    pub fn check_order(&mut self) -> Result<CheckOutcome> {
        let answer = self.confirmation.ask(CONFIRM_PROMPT)?;
        let answer = answer.trim_end_matches(&['\r', '\n'][..]);

        match answer {
            "n" => {
                info!("order not confirmed");
                Ok(CheckOutcome::Declined)
            }
            "y" if self.items.is_empty() => {
                warn!("cannot confirm an empty order");
                Err(Error::InvalidInput)
            }
            "y" => {
                self.confirmed = true;
                info!(items = self.items.len(), "order confirmed");
                Ok(CheckOutcome::Confirmed(self.view()))
            }
            other => {
                warn!(answer = other, "confirmation answer must be 'y' or 'n'");
                Err(Error::InvalidInput)
            }
        }
    }

    /// Prices the order. Only valid once [`check_order`](Self::check_order)
    /// has confirmed it.
    pub fn get_total_price(&self) -> Result<PricedSummary> {
        if !self.confirmed {
            warn!("total requested before the order was confirmed");
            return Err(Error::InvalidInput);
        }

        let subtotal = self
            .items
            .iter()
            .try_fold(0u64, |acc, item| acc.checked_add(item.line_total()))
            .ok_or_else(|| {
                warn!("order subtotal overflows");
                Error::InvalidInput
            })?;

        let summary = PricedSummary::from_subtotal(subtotal);
        info!(subtotal, discount = summary.tier.percent(), "order priced");
        Ok(summary)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.name() == name)
    }
}

impl fmt::Debug for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transaction")
            .field("items", &self.items)
            .field("confirmed", &self.confirmed)
            .finish_non_exhaustive()
    }
}
