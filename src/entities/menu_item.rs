//! Menu item entity - A dish on a restaurant's menu.
//!
//! Menu items are the read-only candidate pool for wagers: the evaluator
//! weighs their prices against the stake and the settlement engine records
//! the winning item on the order. Prices carry two decimal places.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Menu item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu_items")]
pub struct Model {
    /// Unique identifier for the menu item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Restaurant this item belongs to
    pub restaurant_id: i64,
    /// Display name (e.g., "Margherita Pizza")
    pub name: String,
    /// Menu category (e.g., "pizza", "dessert")
    pub category: String,
    /// Price in dollars with two decimal places
    pub price: f64,
    /// Whether the dish is vegetarian
    pub is_vegetarian: bool,
    /// Whether the item can currently be won and ordered
    pub is_available: bool,
}

/// Defines relationships between MenuItem and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each menu item belongs to one restaurant
    #[sea_orm(
        belongs_to = "super::restaurant::Entity",
        from = "Column::RestaurantId",
        to = "super::restaurant::Column::Id"
    )]
    Restaurant,
    /// One menu item appears on many order lines
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
