//! Menu lookups backing the games: plays draw their candidate pools from
//! a restaurant's available items.

use crate::{
    entities::{
        MenuItem, MenuItemColumn, Restaurant, menu_item, restaurant,
    },
    errors::{Error, Result},
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

/// Fetches one restaurant by id.
pub async fn get_restaurant(
    db: &DatabaseConnection,
    restaurant_id: i64,
) -> Result<restaurant::Model> {
    Restaurant::find_by_id(restaurant_id)
        .one(db)
        .await?
        .ok_or(Error::RestaurantNotFound { id: restaurant_id })
}

/// Fetches one menu item by id, `None` if it does not exist.
pub async fn get_menu_item(
    db: &DatabaseConnection,
    menu_item_id: i64,
) -> Result<Option<menu_item::Model>> {
    MenuItem::find_by_id(menu_item_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Fetches the available items of a restaurant, cheapest first. Items
/// flagged unavailable never enter a candidate pool. Errors if the
/// restaurant itself does not exist; an existing restaurant with no
/// available items yields an empty list, which the games reject as
/// [`Error::EmptyCandidates`] at resolve time.
pub async fn get_active_menu_items(
    db: &DatabaseConnection,
    restaurant_id: i64,
) -> Result<Vec<menu_item::Model>> {
    // Existence check first so an unknown id is not mistaken for an
    // empty menu.
    get_restaurant(db, restaurant_id).await?;

    MenuItem::find()
        .filter(MenuItemColumn::RestaurantId.eq(restaurant_id))
        .filter(MenuItemColumn::IsAvailable.eq(true))
        .order_by_asc(MenuItemColumn::Price)
        .all(db)
        .await
        .map_err(Into::into)
}
