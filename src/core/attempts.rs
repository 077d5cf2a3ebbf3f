//! Attempt tracking and the wheel guarantee schedule.
//!
//! The wheel game guarantees the closest-priced item on every 4th play in a
//! repeating cycle. Rather than a separately mutated counter, the attempt
//! number is derived from the append-only log of settled plays: reading the
//! state never records an attempt, and an attempt only exists once its
//! settlement committed.

use crate::{
    core::wager::GameType,
    entities::{GamblingTransaction, gambling_transaction},
    errors::Result,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use serde::{Deserialize, Serialize};

/// Length of the guarantee cycle: three random attempts, then one guaranteed.
pub const CYCLE_LENGTH: u64 = 4;

/// Where a user currently sits in the wheel guarantee cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptState {
    /// Position of the *next* attempt within the cycle, 0..=3
    pub cycle_position: u64,
    /// Whether the next attempt is the guaranteed one (position 3)
    pub is_guaranteed: bool,
    /// Total settled wheel plays by this user
    pub total_attempts: u64,
}

/// Pure mapping from a prior-play count to the attempt state.
pub const fn attempt_state_from_count(total_attempts: u64) -> AttemptState {
    let cycle_position = total_attempts % CYCLE_LENGTH;
    AttemptState {
        cycle_position,
        is_guaranteed: cycle_position == CYCLE_LENGTH - 1,
        total_attempts,
    }
}

/// Reads a user's current attempt state by counting their settled wheel
/// plays. The guarantee schedule applies to the wheel game only; matching
/// and slots plays neither consult nor advance it.
pub async fn get_attempt_state(db: &DatabaseConnection, user_id: i64) -> Result<AttemptState> {
    let total_attempts = GamblingTransaction::find()
        .filter(gambling_transaction::Column::UserId.eq(user_id))
        .filter(gambling_transaction::Column::GameType.eq(GameType::Wheel.as_str()))
        .count(db)
        .await?;
    Ok(attempt_state_from_count(total_attempts))
}
