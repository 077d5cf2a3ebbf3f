//! Play and order history queries, newest first.

use crate::{
    entities::{
        GamblingTransaction, GamblingTransactionColumn, Order, OrderColumn, gambling_transaction,
        order, order_item,
    },
    errors::Result,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

/// An order together with its line items.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderWithItems {
    /// The order row
    pub order: order::Model,
    /// Its line items
    pub items: Vec<order_item::Model>,
}

/// A user's gambling history, newest first, capped at `limit` entries.
pub async fn get_gambling_history(
    db: &DatabaseConnection,
    user_id: i64,
    limit: u64,
) -> Result<Vec<gambling_transaction::Model>> {
    GamblingTransaction::find()
        .filter(GamblingTransactionColumn::UserId.eq(user_id))
        .order_by_desc(GamblingTransactionColumn::CreatedAt)
        .order_by_desc(GamblingTransactionColumn::Id)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// A user's orders with their line items, newest first.
pub async fn get_order_history(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<OrderWithItems>> {
    let orders = Order::find()
        .filter(OrderColumn::CustomerId.eq(user_id))
        .order_by_desc(OrderColumn::CreatedAt)
        .order_by_desc(OrderColumn::Id)
        .find_with_related(order_item::Entity)
        .all(db)
        .await?;

    Ok(orders
        .into_iter()
        .map(|(order, items)| OrderWithItems { order, items })
        .collect())
}

/// One entry of the unified activity feed.
#[derive(Clone, Debug, PartialEq)]
pub enum HistoryEntry {
    /// A gambling play (win or loss)
    Play(gambling_transaction::Model),
    /// A delivery order
    Order(order::Model),
}

impl HistoryEntry {
    fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        match self {
            Self::Play(play) => play.created_at,
            Self::Order(order) => order.created_at,
        }
    }
}

/// Merges plays and orders into one feed, newest first. Orders created by
/// a settlement sit next to the play that produced them; the play's
/// `order_id` links the two.
pub async fn get_unified_history(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<HistoryEntry>> {
    let plays = GamblingTransaction::find()
        .filter(GamblingTransactionColumn::UserId.eq(user_id))
        .all(db)
        .await?;
    let orders = Order::find()
        .filter(OrderColumn::CustomerId.eq(user_id))
        .all(db)
        .await?;

    let mut entries: Vec<HistoryEntry> = plays
        .into_iter()
        .map(HistoryEntry::Play)
        .chain(orders.into_iter().map(HistoryEntry::Order))
        .collect();
    entries.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    Ok(entries)
}
