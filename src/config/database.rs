//! Database configuration module.
//!
//! Handles `SQLite` connection and table creation using `SeaORM`. Tables are
//! generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust struct definitions without manual SQL.

use crate::entities::{
    GamblingTransaction, MenuItem, Order, OrderItem, Restaurant, User, WalletBalance,
    WalletTransaction,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the environment or returns the default
/// `SQLite` path.
pub fn get_database_url() -> Result<String> {
    Ok(std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/lucky_bites.sqlite".to_string()))
}

/// Establishes a connection to the `SQLite` database using the
/// `DATABASE_URL` environment variable, falling back to a local file.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url()?;
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates all database tables from the entity definitions.
///
/// Order matters: referenced tables are created before the tables whose
/// foreign keys point at them.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let user_table = schema.create_table_from_entity(User);
    let restaurant_table = schema.create_table_from_entity(Restaurant);
    let menu_item_table = schema.create_table_from_entity(MenuItem);
    let order_table = schema.create_table_from_entity(Order);
    let order_item_table = schema.create_table_from_entity(OrderItem);
    let gambling_transaction_table = schema.create_table_from_entity(GamblingTransaction);
    let wallet_balance_table = schema.create_table_from_entity(WalletBalance);
    let wallet_transaction_table = schema.create_table_from_entity(WalletTransaction);

    db.execute(builder.build(&user_table)).await?;
    db.execute(builder.build(&restaurant_table)).await?;
    db.execute(builder.build(&menu_item_table)).await?;
    db.execute(builder.build(&order_table)).await?;
    db.execute(builder.build(&order_item_table)).await?;
    db.execute(builder.build(&gambling_transaction_table)).await?;
    db.execute(builder.build(&wallet_balance_table)).await?;
    db.execute(builder.build(&wallet_transaction_table)).await?;

    Ok(())
}
