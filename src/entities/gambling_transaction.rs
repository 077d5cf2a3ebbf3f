//! Gambling transaction entity - One append-only row per play.
//!
//! The nullable won-item fields record the prize; all three are null only
//! for a slots loss. `order_id` links the play to the order created by its
//! settlement (null for losses), replacing the source system's fragile
//! timestamp-window correlation. The wheel guarantee schedule is derived by
//! counting these rows, so a play exists only once its settlement committed.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Gambling transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gambling_transactions")]
pub struct Model {
    /// Unique identifier for the play
    #[sea_orm(primary_key)]
    pub id: i64,
    /// User who played
    pub user_id: i64,
    /// Restaurant whose menu was played against
    pub restaurant_id: i64,
    /// Order created by this play's settlement, null for losses
    pub order_id: Option<i64>,
    /// Game mechanic: `"wheel"`, `"matching"`, or `"slots"`
    pub game_type: String,
    /// Stake the user committed, in dollars
    pub bet_amount: f64,
    /// Winning menu item id, null for a loss
    pub won_item_id: Option<i64>,
    /// Winning menu item name at play time, null for a loss
    pub won_item_name: Option<String>,
    /// Winning menu item price at play time, null for a loss
    pub won_item_price: Option<f64>,
    /// Amount credited back to the wallet, zero when none
    pub wallet_credit: f64,
    /// Transaction subtype, always `"bet"`
    pub transaction_type: String,
    /// When the play was settled
    pub created_at: DateTimeUtc,
}

/// Defines relationships between GamblingTransaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each play belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// Each play targets one restaurant
    #[sea_orm(
        belongs_to = "super::restaurant::Entity",
        from = "Column::RestaurantId",
        to = "super::restaurant::Column::Id"
    )]
    Restaurant,
    /// Winning plays link to the order their settlement created
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
    /// One play may produce wallet ledger entries
    #[sea_orm(has_many = "super::wallet_transaction::Entity")]
    WalletTransactions,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::wallet_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WalletTransactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
