//! Wallet transaction entity - Append-only ledger of wallet mutations.
//!
//! Each row records a positive magnitude with an explicit type
//! (`"credit"`/`"debit"`), the balance snapshot immediately after the
//! mutation, and an optional back-reference to the gambling play that
//! caused it. Rows are never mutated or deleted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Wallet transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wallet_transactions")]
pub struct Model {
    /// Unique identifier for the ledger entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// User whose wallet was mutated
    pub user_id: i64,
    /// Gambling play that produced this entry, if any
    pub gambling_transaction_id: Option<i64>,
    /// Positive magnitude in dollars; direction comes from `transaction_type`
    pub amount: f64,
    /// Direction of the mutation: `"credit"` or `"debit"`
    pub transaction_type: String,
    /// Human-readable description of the mutation
    pub description: String,
    /// Wallet balance immediately after this mutation was applied
    pub balance_after: f64,
    /// When the entry was appended
    pub created_at: DateTimeUtc,
}

/// Defines relationships between WalletTransaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each ledger entry belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// Optional back-reference to the gambling play that caused the entry
    #[sea_orm(
        belongs_to = "super::gambling_transaction::Entity",
        from = "Column::GamblingTransactionId",
        to = "super::gambling_transaction::Column::Id"
    )]
    GamblingTransaction,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::gambling_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GamblingTransaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
