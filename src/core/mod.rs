//! Core business logic - framework-agnostic wager resolution, attempt
//! tracking, wallet ledger operations, and settlement.
//!
//! Nothing in this module knows about HTTP or any presentation layer; the
//! functions take a database connection (or transaction) and plain values,
//! and return structured data for a caller to render.

/// Attempt tracking and the wheel guarantee schedule
pub mod attempts;
/// Gambling, order, and unified history reads
pub mod history;
/// Restaurant and menu read interface
pub mod menu;
/// Settlement engine - atomic order + wallet + ledger application
pub mod settlement;
/// Wager evaluator - prize selection for wheel, matching, and slots
pub mod wager;
/// Wallet ledger store - balance reads and credit/debit operations
pub mod wallet;

/// Rounds a dollar amount to two decimal places.
///
/// All computed amounts (wallet credits, order totals) pass through this
/// before being persisted or compared, so values stay exact to the cent.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::round_cents;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(10.0 - 8.99), 1.01);
        assert_eq!(round_cents(12.0 - 8.0), 4.0);
        assert_eq!(round_cents(4.0), 4.0);
        assert_eq!(round_cents(0.0), 0.0);
        assert_eq!(round_cents(2.999_999_999), 3.0);
    }
}
