//! User entity - Represents an account in the ordering system.
//!
//! Users own exactly one wallet balance (created lazily on first credit)
//! and any number of wallet transactions, gambling plays, and orders.
//! Identity fields are immutable once created; only `is_active` changes.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address, unique per account
    #[sea_orm(unique)]
    pub email: String,
    /// Account role: `"customer"`, `"owner"`, or `"driver"`
    pub role: String,
    /// Whether the account may place plays and orders
    pub is_active: bool,
    /// When the account was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each user has at most one wallet balance row
    #[sea_orm(has_one = "super::wallet_balance::Entity")]
    WalletBalance,
    /// One user has many wallet ledger entries
    #[sea_orm(has_many = "super::wallet_transaction::Entity")]
    WalletTransactions,
    /// One user has many gambling plays
    #[sea_orm(has_many = "super::gambling_transaction::Entity")]
    GamblingTransactions,
    /// One user has many orders
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
}

impl Related<super::wallet_balance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WalletBalance.def()
    }
}

impl Related<super::wallet_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WalletTransactions.def()
    }
}

impl Related<super::gambling_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GamblingTransactions.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
