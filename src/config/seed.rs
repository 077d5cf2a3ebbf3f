//! Demo data seeding from config.toml.
//!
//! Restaurants and their menus are defined in a TOML file and loaded into
//! the database on first run. Seeding is idempotent: if any restaurant
//! already exists the seed is skipped entirely, so restarting the service
//! never duplicates demo data.

use crate::entities::{Restaurant, menu_item, restaurant, user};
use crate::errors::{Error, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// The entire config.toml file.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Restaurants to seed, each with its menu
    pub restaurants: Vec<RestaurantConfig>,
}

/// One seeded restaurant.
#[derive(Debug, Deserialize, Clone)]
pub struct RestaurantConfig {
    /// Display name
    pub name: String,
    /// Cuisine label (e.g. "italian", "mexican")
    pub cuisine_type: String,
    /// Flat delivery fee added to every order total
    pub delivery_fee: f64,
    /// Menu items offered by this restaurant
    pub menu_items: Vec<MenuItemConfig>,
}

/// One seeded menu item.
#[derive(Debug, Deserialize, Clone)]
pub struct MenuItemConfig {
    /// Display name
    pub name: String,
    /// Menu category (e.g. "mains", "desserts")
    pub category: String,
    /// Price in dollars
    pub price: f64,
    /// Vegetarian flag for display
    #[serde(default)]
    pub is_vegetarian: bool,
}

/// Loads seed configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML syntax is invalid,
/// or required fields are missing.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads seed configuration from the default location (./config.toml).
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

/// Seeds restaurants and menus from the configuration. A single demo owner
/// account holds all seeded restaurants. No-op when restaurants already
/// exist.
pub async fn seed_database(db: &DatabaseConnection, config: &Config) -> Result<()> {
    if Restaurant::find().count(db).await? > 0 {
        info!("Restaurants already present, skipping seed");
        return Ok(());
    }

    let now = chrono::Utc::now();
    let owner = user::ActiveModel {
        first_name: Set("Demo".to_string()),
        last_name: Set("Owner".to_string()),
        email: Set("owner@luckybites.example".to_string()),
        role: Set("owner".to_string()),
        is_active: Set(true),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for restaurant_config in &config.restaurants {
        let restaurant = restaurant::ActiveModel {
            owner_id: Set(owner.id),
            name: Set(restaurant_config.name.clone()),
            cuisine_type: Set(restaurant_config.cuisine_type.clone()),
            delivery_fee: Set(restaurant_config.delivery_fee),
            is_open: Set(true),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        for item_config in &restaurant_config.menu_items {
            menu_item::ActiveModel {
                restaurant_id: Set(restaurant.id),
                name: Set(item_config.name.clone()),
                category: Set(item_config.category.clone()),
                price: Set(item_config.price),
                is_vegetarian: Set(item_config.is_vegetarian),
                is_available: Set(true),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        info!(
            "Seeded restaurant '{}' with {} menu items",
            restaurant_config.name,
            restaurant_config.menu_items.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{entities::MenuItem, test_utils::setup_test_db};

    const SAMPLE_TOML: &str = r#"
        [[restaurants]]
        name = "Mama Mia Pizzeria"
        cuisine_type = "italian"
        delivery_fee = 2.99

        [[restaurants.menu_items]]
        name = "Margherita Pizza"
        category = "mains"
        price = 10.00
        is_vegetarian = true

        [[restaurants.menu_items]]
        name = "Tiramisu"
        category = "desserts"
        price = 6.50

        [[restaurants]]
        name = "Taco Verde"
        cuisine_type = "mexican"
        delivery_fee = 1.99

        [[restaurants.menu_items]]
        name = "Carnitas Tacos"
        category = "mains"
        price = 8.75
    "#;

    #[test]
    fn test_parse_seed_config() {
        let config: Config = toml::from_str(SAMPLE_TOML).unwrap();
        assert_eq!(config.restaurants.len(), 2);
        assert_eq!(config.restaurants[0].name, "Mama Mia Pizzeria");
        assert_eq!(config.restaurants[0].delivery_fee, 2.99);
        assert_eq!(config.restaurants[0].menu_items.len(), 2);
        assert!(config.restaurants[0].menu_items[0].is_vegetarian);
        // is_vegetarian defaults to false when omitted.
        assert!(!config.restaurants[0].menu_items[1].is_vegetarian);
        assert_eq!(config.restaurants[1].menu_items[0].price, 8.75);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let config: Config = toml::from_str(SAMPLE_TOML).unwrap();

        seed_database(&db, &config).await?;
        assert_eq!(Restaurant::find().count(&db).await?, 2);
        assert_eq!(MenuItem::find().count(&db).await?, 3);

        // A second run changes nothing.
        seed_database(&db, &config).await?;
        assert_eq!(Restaurant::find().count(&db).await?, 2);
        assert_eq!(MenuItem::find().count(&db).await?, 3);
        Ok(())
    }
}
