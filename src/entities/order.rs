//! Order entity - The financial consequence of a winning play.
//!
//! Settlement creates exactly one order per non-loss play, already marked
//! `payment_status = "paid"`. The delivery-status state machine is out of
//! scope for this core; orders stay at the initial `"pending"` status.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// User the order belongs to
    pub customer_id: i64,
    /// Restaurant fulfilling the order
    pub restaurant_id: i64,
    /// Human-facing unique order number (`ORD-{millis}-{suffix}`)
    #[sea_orm(unique)]
    pub order_number: String,
    /// Delivery status, `"pending"` at creation
    pub status: String,
    /// Stake amount the play was priced at, in dollars
    pub subtotal: f64,
    /// Restaurant delivery fee applied to this order
    pub delivery_fee: f64,
    /// Subtotal plus delivery fee
    pub total_amount: f64,
    /// Whether payment ran through a card rather than the wallet
    pub is_credit_card: bool,
    /// Payment status, `"paid"` for all gambling-originated orders
    pub payment_status: String,
    /// Where to deliver
    pub delivery_address: String,
    /// Free-text delivery instructions
    pub special_instructions: String,
    /// When the order was created
    pub created_at: DateTimeUtc,
    /// When the order was last updated
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each order belongs to one customer
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CustomerId",
        to = "super::user::Column::Id"
    )]
    Customer,
    /// Each order is fulfilled by one restaurant
    #[sea_orm(
        belongs_to = "super::restaurant::Entity",
        from = "Column::RestaurantId",
        to = "super::restaurant::Column::Id"
    )]
    Restaurant,
    /// One order has line items
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
    /// Winning plays reference the order they settled into
    #[sea_orm(has_many = "super::gambling_transaction::Entity")]
    GamblingTransactions,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl Related<super::gambling_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GamblingTransactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
