//! An amount split into whole bills and a leftover.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ExchangeError, ExchangeResult};
use crate::exchange;

/// Result of splitting an amount into bills of one denomination.
///
/// A breakdown built with [`BillBreakdown::of`] satisfies
/// `value() + leftover == total`.
///
/// # Example
///
/// ```rust
/// use coinop_exchange::BillBreakdown;
/// use rust_decimal::Decimal;
///
/// let split = BillBreakdown::of(Decimal::from(47), Decimal::from(10)).unwrap();
/// assert_eq!(split.bills, 4);
/// assert_eq!(split.leftover, Decimal::from(7));
/// assert_eq!(split.value().unwrap(), Decimal::from(40));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillBreakdown {
    /// Value of a single bill.
    pub denomination: Decimal,
    /// Number of whole bills.
    pub bills: i64,
    /// Amount that does not make up a whole bill.
    pub leftover: Decimal,
}

impl BillBreakdown {
    /// Splits `total` into bills of `denomination`.
    ///
    /// Fails with `Overflow` when the whole bills are worth more than a
    /// `Decimal` can hold, which floored division allows for totals near
    /// `Decimal::MIN`.
    pub fn of(total: Decimal, denomination: Decimal) -> ExchangeResult<Self> {
        let split = Self {
            denomination,
            bills: exchange::get_number_of_bills(total, denomination)?,
            leftover: exchange::get_leftover_of_bills(total, denomination)?,
        };
        split.value()?;
        Ok(split)
    }

    /// Returns the value of the whole bills.
    pub fn value(&self) -> ExchangeResult<Decimal> {
        exchange::get_value_of_bills(self.denomination, self.bills)
    }

    /// Returns the amount this breakdown was built from.
    pub fn total(&self) -> ExchangeResult<Decimal> {
        self.value()?
            .checked_add(self.leftover)
            .ok_or_else(|| ExchangeError::overflow("BillBreakdown::total"))
    }

    /// Returns true if the amount splits into bills exactly.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.leftover.is_zero()
    }
}
