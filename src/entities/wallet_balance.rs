//! Wallet balance entity - One row per user, created lazily on first credit.
//!
//! Invariant: `balance` always equals the sum of signed ledger amounts for
//! the user (credits positive, debits negative) and never goes negative.
//! The balance is only mutated through the credit/debit pair in
//! [`crate::core::wallet`], which appends the matching ledger row in the
//! same atomic unit.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Wallet balance database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wallet_balances")]
pub struct Model {
    /// Unique identifier for the wallet row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user, one wallet per user
    #[sea_orm(unique)]
    pub user_id: i64,
    /// Current balance in dollars, never negative
    pub balance: f64,
    /// When the wallet row was created
    pub created_at: DateTimeUtc,
    /// When the balance last changed
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between WalletBalance and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each wallet belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
