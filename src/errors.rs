//! Unified error types for the wager and settlement core.
//!
//! Validation errors and insufficient-funds rejections are always raised
//! before any database mutation, so callers can distinguish "your request is
//! bad" and "you don't have enough money" from "we failed to save". Database
//! errors abort the enclosing transaction, leaving no partial settlement
//! behind.

use thiserror::Error;

/// All errors the crate can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or validation failure
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Stake is non-positive, NaN, or infinite
    #[error("Invalid stake amount: {amount}")]
    InvalidStake {
        /// The rejected stake
        amount: f64,
    },

    /// Monetary amount is non-positive, NaN, or infinite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// Wallet-discount amount is negative or exceeds the stake
    #[error("Invalid discount amount: {amount}")]
    InvalidDiscount {
        /// The rejected discount
        amount: f64,
    },

    /// Payment method string is not one of wallet / credit_card / wallet_discount
    #[error("Unknown payment method: {value}")]
    InvalidPaymentMethod {
        /// The rejected value
        value: String,
    },

    /// Game type string is not one of wheel / matching / slots
    #[error("Unknown game type: {value}")]
    InvalidGameType {
        /// The rejected value
        value: String,
    },

    /// The candidate menu-item pool is empty
    #[error("No candidate menu items to play against")]
    EmptyCandidates,

    /// The candidate pool is too small for the requested game
    #[error("Need at least {needed} candidate menu items, got {got}")]
    NotEnoughCandidates {
        /// Minimum pool size for the game
        needed: usize,
        /// Actual pool size supplied
        got: usize,
    },

    /// A reported prize is not part of the candidate pool
    #[error("Menu item {menu_item_id} is not among the candidates")]
    PrizeNotInMenu {
        /// The reported menu item id
        menu_item_id: i64,
    },

    /// No user row with the given id
    #[error("User {id} not found")]
    UserNotFound {
        /// The missing user id
        id: i64,
    },

    /// The user exists but is deactivated
    #[error("User {id} is inactive")]
    UserInactive {
        /// The inactive user id
        id: i64,
    },

    /// No restaurant row with the given id
    #[error("Restaurant {id} not found")]
    RestaurantNotFound {
        /// The missing restaurant id
        id: i64,
    },

    /// Wallet balance is below the amount a settlement would charge
    #[error("Insufficient wallet balance: have {current:.2}, need {required:.2}")]
    InsufficientFunds {
        /// Balance at the time of the check
        current: f64,
        /// Amount the settlement would charge
        required: f64,
    },

    /// Persistence layer failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
