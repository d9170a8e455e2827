//! Currency exchange arithmetic.
//!
//! Each function is independent. [`exchangeable_value`] computes its whole
//! pipeline inline instead of chaining the other helpers.
//!
//! Division-like operations reject a zero divisor with
//! [`ExchangeError::DivisionByZero`]. Floor division and remainder follow
//! floored semantics: `get_number_of_bills(-47, 10) == -5` and
//! `get_leftover_of_bills(-47, 10) == 3`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{ExchangeError, ExchangeResult};

fn ensure_nonzero(divisor: Decimal, operation: &str) -> ExchangeResult<()> {
    if divisor.is_zero() {
        log::debug!("{operation}: rejected zero divisor");
        return Err(ExchangeError::division_by_zero(operation));
    }
    Ok(())
}

fn floor_div(dividend: Decimal, divisor: Decimal, operation: &str) -> ExchangeResult<Decimal> {
    ensure_nonzero(divisor, operation)?;
    dividend
        .checked_div(divisor)
        .map(|q| q.floor())
        .ok_or_else(|| ExchangeError::overflow(operation))
}

fn to_count(value: Decimal, operation: &str) -> ExchangeResult<i64> {
    value.to_i64().ok_or_else(|| ExchangeError::overflow(operation))
}

/// Converts a budget into foreign currency at `exchange_rate`.
///
/// # Example
///
/// ```rust
/// use coinop_exchange::exchange::exchange_money;
/// use rust_decimal::Decimal;
///
/// let foreign = exchange_money(Decimal::from(100), Decimal::from(5)).unwrap();
/// assert_eq!(foreign, Decimal::from(20));
/// ```
pub fn exchange_money(budget_amount: Decimal, exchange_rate: Decimal) -> ExchangeResult<Decimal> {
    const OP: &str = "exchange_money";
    ensure_nonzero(exchange_rate, OP)?;
    budget_amount
        .checked_div(exchange_rate)
        .ok_or_else(|| ExchangeError::overflow(OP))
}

/// Returns what is left of the budget after exchanging `exchanged_value`.
///
/// The result is negative when more was exchanged than budgeted.
pub fn get_change(budget_amount: Decimal, exchanged_value: Decimal) -> ExchangeResult<Decimal> {
    budget_amount
        .checked_sub(exchanged_value)
        .ok_or_else(|| ExchangeError::overflow("get_change"))
}

/// Returns the total value of `total_bills` bills of `bill_denomination`.
pub fn get_value_of_bills(bill_denomination: Decimal, total_bills: i64) -> ExchangeResult<Decimal> {
    Decimal::from(total_bills)
        .checked_mul(bill_denomination)
        .ok_or_else(|| ExchangeError::overflow("get_value_of_bills"))
}

/// Returns how many whole bills of `bill_denomination` fit in `total_amount`.
///
/// The quotient is floored, so a negative amount yields one bill more in
/// magnitude than plain truncation would.
pub fn get_number_of_bills(
    total_amount: Decimal,
    bill_denomination: Decimal,
) -> ExchangeResult<i64> {
    const OP: &str = "get_number_of_bills";
    let bills = floor_div(total_amount, bill_denomination, OP)?;
    to_count(bills, OP)
}

/// Returns the amount left over after taking out whole bills.
///
/// This is the floored remainder: the result has the sign of
/// `bill_denomination` and `|result| < |bill_denomination|`.
pub fn get_leftover_of_bills(
    total_amount: Decimal,
    bill_denomination: Decimal,
) -> ExchangeResult<Decimal> {
    const OP: &str = "get_leftover_of_bills";
    ensure_nonzero(bill_denomination, OP)?;
    let remainder = total_amount
        .checked_rem(bill_denomination)
        .ok_or_else(|| ExchangeError::overflow(OP))?;

    // Decimal's `%` truncates; shift into the divisor's sign.
    if !remainder.is_zero()
        && remainder.is_sign_negative() != bill_denomination.is_sign_negative()
    {
        return Ok(remainder + bill_denomination);
    }
    Ok(remainder)
}

/// Returns the largest amount of foreign currency obtainable in whole bills.
///
/// The spread is a percentage markup on the rate:
/// `effective = exchange_rate * (1 + spread_percentage / 100)`. The budget is
/// converted at the effective rate, floored to whole bills of
/// `bill_denomination`, and the value of those bills is returned truncated
/// to an integer.
///
/// # Errors
///
/// `DivisionByZero` when the effective rate or the denomination is zero,
/// `Overflow` when an intermediate value leaves the representable range.
///
/// # Example
///
/// ```rust
/// use coinop_exchange::exchange::exchangeable_value;
/// use rust_decimal::Decimal;
///
/// let budget = Decimal::new(1275, 1); // 127.5
/// let rate = Decimal::new(12, 1); // 1.2
/// let value = exchangeable_value(budget, rate, Decimal::from(10), Decimal::from(5)).unwrap();
/// assert_eq!(value, 95);
/// ```
pub fn exchangeable_value(
    budget_amount: Decimal,
    exchange_rate: Decimal,
    spread_percentage: Decimal,
    bill_denomination: Decimal,
) -> ExchangeResult<i64> {
    const OP: &str = "exchangeable_value";
    let overflow = || ExchangeError::overflow(OP);

    // |spread / 100| <= Decimal::MAX / 100, so adding one cannot overflow.
    let markup = spread_percentage / Decimal::ONE_HUNDRED + Decimal::ONE;
    let effective_rate = exchange_rate.checked_mul(markup).ok_or_else(overflow)?;
    ensure_nonzero(effective_rate, OP)?;

    let exchanged = budget_amount
        .checked_div(effective_rate)
        .ok_or_else(overflow)?;
    let bills = floor_div(exchanged, bill_denomination, OP)?;
    let max_value = bills.checked_mul(bill_denomination).ok_or_else(overflow)?;

    log::trace!("{OP}: rate={effective_rate} exchanged={exchanged} bills={bills} value={max_value}");

    to_count(max_value.trunc(), OP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_exchange_money() {
        assert_eq!(exchange_money(dec!(100), dec!(5)).unwrap(), dec!(20));
        assert_eq!(exchange_money(dec!(127.5), dec!(1.2)).unwrap(), dec!(106.25));
    }

    #[test]
    fn test_exchange_money_zero_rate() {
        let err = exchange_money(dec!(100), Decimal::ZERO).unwrap_err();
        assert_eq!(err, ExchangeError::division_by_zero("exchange_money"));
    }

    #[test]
    fn test_get_change() {
        assert_eq!(get_change(dec!(100), dec!(20)).unwrap(), dec!(80));
        assert_eq!(get_change(dec!(463000), dec!(5000)).unwrap(), dec!(458000));
        assert_eq!(get_change(dec!(20), dec!(100)).unwrap(), dec!(-80));
    }

    #[test]
    fn test_get_value_of_bills() {
        assert_eq!(get_value_of_bills(dec!(10), 5).unwrap(), dec!(50));
        assert_eq!(get_value_of_bills(dec!(5), 128).unwrap(), dec!(640));
        assert_eq!(get_value_of_bills(dec!(20), 0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_get_value_of_bills_overflow() {
        let err = get_value_of_bills(Decimal::MAX, 2).unwrap_err();
        assert!(matches!(err, ExchangeError::Overflow { .. }));
    }

    #[test]
    fn test_exchange_money_overflow() {
        let err = exchange_money(Decimal::MAX, dec!(0.1)).unwrap_err();
        assert_eq!(err, ExchangeError::overflow("exchange_money"));
    }

    #[test]
    fn test_get_change_overflow() {
        let err = get_change(Decimal::MIN, Decimal::ONE).unwrap_err();
        assert_eq!(err, ExchangeError::overflow("get_change"));
    }

    #[test]
    fn test_get_number_of_bills() {
        assert_eq!(get_number_of_bills(dec!(47), dec!(10)).unwrap(), 4);
        assert_eq!(get_number_of_bills(dec!(163270), dec!(50000)).unwrap(), 3);
        assert_eq!(get_number_of_bills(dec!(9.99), dec!(10)).unwrap(), 0);
    }

    #[test]
    fn test_get_number_of_bills_floors_negative() {
        assert_eq!(get_number_of_bills(dec!(-47), dec!(10)).unwrap(), -5);
        assert_eq!(get_number_of_bills(dec!(47), dec!(-10)).unwrap(), -5);
        assert_eq!(get_number_of_bills(dec!(-40), dec!(10)).unwrap(), -4);
    }

    #[test]
    fn test_get_number_of_bills_zero_denomination() {
        let err = get_number_of_bills(dec!(47), Decimal::ZERO).unwrap_err();
        assert!(matches!(err, ExchangeError::DivisionByZero { .. }));
    }

    #[test]
    fn test_get_number_of_bills_quotient_overflow() {
        let err = get_number_of_bills(Decimal::MAX, dec!(0.5)).unwrap_err();
        assert_eq!(err, ExchangeError::overflow("get_number_of_bills"));
    }

    #[test]
    fn test_get_number_of_bills_count_beyond_i64() {
        let err = get_number_of_bills(dec!(100000000000000000000), Decimal::ONE).unwrap_err();
        assert_eq!(err, ExchangeError::overflow("get_number_of_bills"));

        assert_eq!(get_number_of_bills(Decimal::from(i64::MAX), Decimal::ONE).unwrap(), i64::MAX);
    }

    #[test]
    fn test_get_leftover_of_bills() {
        assert_eq!(get_leftover_of_bills(dec!(47), dec!(10)).unwrap(), dec!(7));
        assert_eq!(get_leftover_of_bills(dec!(310.5), dec!(20)).unwrap(), dec!(10.5));
        assert_eq!(get_leftover_of_bills(dec!(40), dec!(10)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_get_leftover_of_bills_follows_divisor_sign() {
        assert_eq!(get_leftover_of_bills(dec!(-47), dec!(10)).unwrap(), dec!(3));
        assert_eq!(get_leftover_of_bills(dec!(47), dec!(-10)).unwrap(), dec!(-3));
        assert_eq!(get_leftover_of_bills(dec!(-47), dec!(-10)).unwrap(), dec!(-7));
    }

    #[test]
    fn test_get_leftover_of_bills_zero_denomination() {
        let err = get_leftover_of_bills(dec!(47), Decimal::ZERO).unwrap_err();
        assert_eq!(err, ExchangeError::division_by_zero("get_leftover_of_bills"));
    }

    #[test]
    fn test_exchangeable_value() {
        assert_eq!(exchangeable_value(dec!(127.5), dec!(1.2), dec!(10), dec!(5)).unwrap(), 95);
        assert_eq!(exchangeable_value(dec!(100000), dec!(10.61), dec!(10), dec!(1)).unwrap(), 8568);
        assert_eq!(exchangeable_value(dec!(1500), dec!(0.84), dec!(25), dec!(40)).unwrap(), 1400);
        assert_eq!(
            exchangeable_value(dec!(470000), dec!(1050), dec!(30), dec!(10000000000)).unwrap(),
            0
        );
    }

    #[test]
    fn test_exchangeable_value_zero_spread() {
        assert_eq!(exchangeable_value(dec!(100), dec!(1), Decimal::ZERO, dec!(20)).unwrap(), 100);
    }

    #[test]
    fn test_exchangeable_value_negative_budget_floors_away_from_zero() {
        // -100 / 1 = -100 foreign, -100 / 30 = -3.33.. floors to -4 bills.
        assert_eq!(exchangeable_value(dec!(-100), dec!(1), Decimal::ZERO, dec!(30)).unwrap(), -120);
    }

    #[test]
    fn test_exchangeable_value_zero_effective_rate() {
        // A -100% spread cancels the rate entirely.
        let err = exchangeable_value(dec!(100), dec!(1.2), dec!(-100), dec!(5)).unwrap_err();
        assert!(matches!(err, ExchangeError::DivisionByZero { .. }));

        let err = exchangeable_value(dec!(100), Decimal::ZERO, dec!(10), dec!(5)).unwrap_err();
        assert!(matches!(err, ExchangeError::DivisionByZero { .. }));
    }

    #[test]
    fn test_exchangeable_value_total_beyond_i64() {
        let err = exchangeable_value(
            dec!(100000000000000000000),
            Decimal::ONE,
            Decimal::ZERO,
            Decimal::ONE,
        )
        .unwrap_err();
        assert_eq!(err, ExchangeError::overflow("exchangeable_value"));
    }

    #[test]
    fn test_exchangeable_value_conversion_overflow() {
        let err =
            exchangeable_value(Decimal::MAX, dec!(0.1), Decimal::ZERO, Decimal::ONE).unwrap_err();
        assert_eq!(err, ExchangeError::overflow("exchangeable_value"));
    }

    #[test]
    fn test_exchangeable_value_huge_spread() {
        // The markup itself stays representable; the budget just buys nothing.
        assert_eq!(
            exchangeable_value(dec!(100), Decimal::ONE, Decimal::MAX, Decimal::ONE).unwrap(),
            0
        );
    }

    #[test]
    fn test_exchangeable_value_zero_denomination() {
        let err = exchangeable_value(dec!(100), dec!(1.2), dec!(10), Decimal::ZERO).unwrap_err();
        assert_eq!(err, ExchangeError::division_by_zero("exchangeable_value"));
    }
}
