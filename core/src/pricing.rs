//! Discount tiers and the priced summary of a confirmed order.

use std::fmt;

/// Currency prefix used when a total is shown to the operator.
pub const CURRENCY: &str = "Rp.";

/// One of the four mutually exclusive discount bands.
///
/// Upper bounds are inclusive: a subtotal of exactly 200000 is not discounted,
/// 200001 is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountTier {
    Zero,
    Five,
    Eight,
    Ten,
}

impl DiscountTier {
    pub fn for_subtotal(subtotal: u64) -> Self {
        match subtotal {
            0..=200_000 => DiscountTier::Zero,
            200_001..=300_000 => DiscountTier::Five,
            300_001..=500_000 => DiscountTier::Eight,
            _ => DiscountTier::Ten,
        }
    }

    pub fn percent(self) -> u8 {
        match self {
            DiscountTier::Zero => 0,
            DiscountTier::Five => 5,
            DiscountTier::Eight => 8,
            DiscountTier::Ten => 10,
        }
    }

    pub fn rate(self) -> f64 {
        f64::from(self.percent()) / 100.0
    }

    /// Applies this tier to `subtotal`.
    ///
    /// Undiscounted totals stay integral; discounted ones are computed as
    /// `T - rate * T` in floating point.
    pub fn apply(self, subtotal: u64) -> Amount {
        match self {
            DiscountTier::Zero => Amount::Whole(subtotal),
            tier => {
                let total = subtotal as f64;
                Amount::Discounted(total - tier.rate() * total)
            }
        }
    }
}

/// An amount to be paid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    Whole(u64),
    Discounted(f64),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Amount::Whole(value) => write!(f, "{value}"),
            Amount::Discounted(value) => write_discounted(f, value),
        }
    }
}

// Discounted amounts always show a fractional part ("199500.0") and switch to
// exponent form with an explicit sign at 1e16 ("1.8e+16").
fn write_discounted(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.abs() >= 1e16 {
        let exp = format!("{value:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{mantissa}e+{power}")
            }
            _ => f.write_str(&exp),
        };
    }

    if value.fract() == 0.0 {
        write!(f, "{value:.1}")
    } else {
        write!(f, "{value}")
    }
}

/// Result of pricing a confirmed order.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedSummary {
    pub subtotal: u64,
    pub tier: DiscountTier,
    pub total: Amount,
}

impl PricedSummary {
    pub fn from_subtotal(subtotal: u64) -> Self {
        let tier = DiscountTier::for_subtotal(subtotal);
        Self {
            subtotal,
            tier,
            total: tier.apply(subtotal),
        }
    }
}

impl fmt::Display for PricedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the total amount to be paid is {} {}", CURRENCY, self.total)
    }
}
