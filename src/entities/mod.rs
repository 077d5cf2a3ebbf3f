//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod gambling_transaction;
pub mod menu_item;
pub mod order;
pub mod order_item;
pub mod restaurant;
pub mod user;
pub mod wallet_balance;
pub mod wallet_transaction;

// Re-export specific types to avoid conflicts
pub use gambling_transaction::{
    Column as GamblingTransactionColumn, Entity as GamblingTransaction,
    Model as GamblingTransactionModel,
};
pub use menu_item::{Column as MenuItemColumn, Entity as MenuItem, Model as MenuItemModel};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel};
pub use order_item::{Column as OrderItemColumn, Entity as OrderItem, Model as OrderItemModel};
pub use restaurant::{Column as RestaurantColumn, Entity as Restaurant, Model as RestaurantModel};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
pub use wallet_balance::{
    Column as WalletBalanceColumn, Entity as WalletBalance, Model as WalletBalanceModel,
};
pub use wallet_transaction::{
    Column as WalletTransactionColumn, Entity as WalletTransaction,
    Model as WalletTransactionModel,
};
