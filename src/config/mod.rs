/// Database configuration and connection management
pub mod database;

/// Demo restaurant and menu seeding from config.toml
pub mod seed;
