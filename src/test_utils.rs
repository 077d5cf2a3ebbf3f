//! Shared test utilities.
//!
//! Common helper functions for setting up test databases and creating
//! test entities with sensible defaults.

use crate::{
    entities::{self, gambling_transaction, menu_item, restaurant, user},
    errors::Result,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates an active test customer.
///
/// # Defaults
/// * `first_name`/`last_name`: "Test" / "Customer"
/// * `role`: "customer"
/// * `is_active`: true
pub async fn create_test_user(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entities::user::Model> {
    user::ActiveModel {
        first_name: Set("Test".to_string()),
        last_name: Set("Customer".to_string()),
        email: Set(email.to_string()),
        role: Set("customer".to_string()),
        is_active: Set(true),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a deactivated test user.
pub async fn create_inactive_user(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entities::user::Model> {
    user::ActiveModel {
        first_name: Set("Former".to_string()),
        last_name: Set("Customer".to_string()),
        email: Set(email.to_string()),
        role: Set("customer".to_string()),
        is_active: Set(false),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates an open test restaurant with no delivery fee. The restaurant's
/// owner account is created alongside it.
pub async fn create_test_restaurant(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::restaurant::Model> {
    create_custom_restaurant(db, name, 0.0).await
}

/// Creates an open test restaurant with a custom delivery fee.
pub async fn create_custom_restaurant(
    db: &DatabaseConnection,
    name: &str,
    delivery_fee: f64,
) -> Result<entities::restaurant::Model> {
    let owner = create_test_user(db, &format!("owner-of-{name}@example.com")).await?;
    restaurant::ActiveModel {
        owner_id: Set(owner.id),
        name: Set(name.to_string()),
        cuisine_type: Set("italian".to_string()),
        delivery_fee: Set(delivery_fee),
        is_open: Set(true),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates an available test menu item.
///
/// # Defaults
/// * `category`: "mains"
/// * `is_vegetarian`: false
/// * `is_available`: true
pub async fn create_test_menu_item(
    db: &DatabaseConnection,
    restaurant_id: i64,
    name: &str,
    price: f64,
) -> Result<entities::menu_item::Model> {
    menu_item::ActiveModel {
        restaurant_id: Set(restaurant_id),
        name: Set(name.to_string()),
        category: Set("mains".to_string()),
        price: Set(price),
        is_vegetarian: Set(false),
        is_available: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a menu item flagged unavailable, for menu-filtering tests.
pub async fn create_unavailable_menu_item(
    db: &DatabaseConnection,
    restaurant_id: i64,
    name: &str,
    price: f64,
) -> Result<entities::menu_item::Model> {
    menu_item::ActiveModel {
        restaurant_id: Set(restaurant_id),
        name: Set(name.to_string()),
        category: Set("mains".to_string()),
        price: Set(price),
        is_vegetarian: Set(false),
        is_available: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Records a bare gambling transaction for attempt-counting tests,
/// bypassing the settlement engine.
pub async fn record_test_play(
    db: &DatabaseConnection,
    user_id: i64,
    restaurant_id: i64,
    game_type: &str,
) -> Result<entities::gambling_transaction::Model> {
    gambling_transaction::ActiveModel {
        user_id: Set(user_id),
        restaurant_id: Set(restaurant_id),
        order_id: Set(None),
        game_type: Set(game_type.to_string()),
        bet_amount: Set(10.0),
        won_item_id: Set(None),
        won_item_name: Set(None),
        won_item_price: Set(None),
        wallet_credit: Set(0.0),
        transaction_type: Set("bet".to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Sets up a complete test environment with a user, restaurant, and a
/// three-item menu priced around a $10.00 stake.
/// Returns (db, user, restaurant, items).
pub async fn setup_with_menu() -> Result<(
    DatabaseConnection,
    entities::user::Model,
    entities::restaurant::Model,
    Vec<entities::menu_item::Model>,
)> {
    let db = setup_test_db().await?;
    let user = create_test_user(&db, "player@example.com").await?;
    let restaurant = create_test_restaurant(&db, "Testaurant").await?;
    let items = vec![
        create_test_menu_item(&db, restaurant.id, "Garlic Bread", 8.99).await?,
        create_test_menu_item(&db, restaurant.id, "Margherita Pizza", 10.00).await?,
        create_test_menu_item(&db, restaurant.id, "Seafood Platter", 14.99).await?,
    ];
    Ok((db, user, restaurant, items))
}
