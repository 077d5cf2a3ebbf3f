//! Restaurant entity - A venue whose menu items form the candidate pool.
//!
//! The settlement engine reads `delivery_fee` when pricing an order.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Restaurant database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    /// Unique identifier for the restaurant
    #[sea_orm(primary_key)]
    pub id: i64,
    /// User ID of the owning account
    pub owner_id: i64,
    /// Display name
    pub name: String,
    /// Cuisine category (e.g., "italian", "mexican")
    pub cuisine_type: String,
    /// Flat delivery fee in dollars added to every order total
    pub delivery_fee: f64,
    /// Whether the restaurant currently accepts orders
    pub is_open: bool,
    /// When the restaurant was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Restaurant and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each restaurant belongs to one owner account
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id"
    )]
    Owner,
    /// One restaurant has many menu items
    #[sea_orm(has_many = "super::menu_item::Entity")]
    MenuItems,
}

impl Related<super::menu_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
