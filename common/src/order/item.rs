use tracing::warn;

use crate::error::{Error, Result};

/// One entry of an order.
///
/// `line_total` is always `quantity * unit_price`; the setters recompute it and
/// refuse values whose product does not fit in a `u64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    name: String,
    quantity: u64,
    unit_price: u64,
    line_total: u64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: u64, unit_price: u64) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        let line_total = checked_total(quantity, unit_price)?;

        Ok(Self {
            name,
            quantity,
            unit_price,
            line_total,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    pub fn line_total(&self) -> u64 {
        self.line_total
    }

    pub fn rename(&mut self, new_name: impl Into<String>) -> Result<()> {
        let new_name = new_name.into();
        validate_name(&new_name)?;
        self.name = new_name;
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: u64) -> Result<()> {
        self.line_total = checked_total(quantity, self.unit_price)?;
        self.quantity = quantity;
        Ok(())
    }

    pub fn set_unit_price(&mut self, unit_price: u64) -> Result<()> {
        self.line_total = checked_total(self.quantity, unit_price)?;
        self.unit_price = unit_price;
        Ok(())
    }
}

/// Rejects names that are empty or only whitespace.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        warn!("rejected item name: empty");
        return Err(Error::InvalidInput);
    }
    Ok(())
}

fn checked_total(quantity: u64, unit_price: u64) -> Result<u64> {
    quantity.checked_mul(unit_price).ok_or_else(|| {
        warn!(quantity, unit_price, "rejected line item: total overflows");
        Error::InvalidInput
    })
}
