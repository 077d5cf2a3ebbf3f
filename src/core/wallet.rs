//! Wallet ledger store - balance reads and the credit/debit operation pair.
//!
//! The balance is only ever mutated through [`credit_wallet`] and
//! [`debit_wallet`], which apply an atomic database-level delta and append
//! the matching ledger row with a `balance_after` snapshot in the same unit
//! of work. Both are generic over [`ConnectionTrait`] so the settlement
//! engine can run them inside its transaction. Overdrafts are rejected
//! before any mutation.

use crate::{
    core::round_cents,
    entities::{WalletBalance, WalletTransaction, wallet_balance, wallet_transaction},
    errors::{Error, Result},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, sea_query::Expr,
};
use tracing::{debug, info};

/// Ledger entry type for money entering the wallet.
pub const TX_CREDIT: &str = "credit";
/// Ledger entry type for money leaving the wallet.
pub const TX_DEBIT: &str = "debit";

/// Returns the user's wallet row, if one has been created yet.
pub async fn get_wallet<C>(conn: &C, user_id: i64) -> Result<Option<wallet_balance::Model>>
where
    C: ConnectionTrait,
{
    WalletBalance::find()
        .filter(wallet_balance::Column::UserId.eq(user_id))
        .one(conn)
        .await
        .map_err(Into::into)
}

/// Returns the user's current balance, 0.00 when no wallet row exists.
pub async fn get_balance(db: &DatabaseConnection, user_id: i64) -> Result<f64> {
    Ok(get_wallet(db, user_id).await?.map_or(0.0, |w| w.balance))
}

/// Returns the user's ledger entries, newest first.
pub async fn get_wallet_transactions(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<wallet_transaction::Model>> {
    WalletTransaction::find()
        .filter(wallet_transaction::Column::UserId.eq(user_id))
        .order_by_desc(wallet_transaction::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Ensures a wallet row exists for the user, creating one at zero balance
/// if absent (wallets are created lazily on first credit).
pub async fn ensure_wallet<C>(conn: &C, user_id: i64) -> Result<wallet_balance::Model>
where
    C: ConnectionTrait,
{
    if let Some(wallet) = get_wallet(conn, user_id).await? {
        return Ok(wallet);
    }

    let now = chrono::Utc::now();
    let wallet = wallet_balance::ActiveModel {
        user_id: Set(user_id),
        balance: Set(0.0),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = wallet.insert(conn).await?;
    debug!("Created wallet for user {} at zero balance", user_id);
    Ok(created)
}

/// Applies `balance = balance + delta` as a single SQL UPDATE and returns
/// the updated row. A read-modify-write here could lose concurrent updates;
/// the database-level expression cannot.
async fn apply_balance_delta<C>(
    conn: &C,
    user_id: i64,
    delta: f64,
) -> Result<wallet_balance::Model>
where
    C: ConnectionTrait,
{
    WalletBalance::update_many()
        .col_expr(
            wallet_balance::Column::Balance,
            Expr::col(wallet_balance::Column::Balance).add(delta),
        )
        .col_expr(
            wallet_balance::Column::UpdatedAt,
            Expr::value(chrono::Utc::now()),
        )
        .filter(wallet_balance::Column::UserId.eq(user_id))
        .exec(conn)
        .await?;

    get_wallet(conn, user_id)
        .await?
        .ok_or(Error::UserNotFound { id: user_id })
}

/// Appends a ledger row recording a mutation that was just applied.
async fn append_ledger_entry<C>(
    conn: &C,
    user_id: i64,
    amount: f64,
    transaction_type: &str,
    description: &str,
    balance_after: f64,
    gambling_transaction_id: Option<i64>,
) -> Result<wallet_transaction::Model>
where
    C: ConnectionTrait,
{
    let entry = wallet_transaction::ActiveModel {
        user_id: Set(user_id),
        gambling_transaction_id: Set(gambling_transaction_id),
        amount: Set(round_cents(amount)),
        transaction_type: Set(transaction_type.to_string()),
        description: Set(description.to_string()),
        balance_after: Set(round_cents(balance_after)),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    entry.insert(conn).await.map_err(Into::into)
}

/// Credits the wallet and appends the matching `"credit"` ledger row.
///
/// Creates the wallet at zero first if the user has none. The optional
/// `gambling_transaction_id` back-references the play that produced the
/// credit.
pub async fn credit_wallet<C>(
    conn: &C,
    user_id: i64,
    amount: f64,
    description: &str,
    gambling_transaction_id: Option<i64>,
) -> Result<wallet_transaction::Model>
where
    C: ConnectionTrait,
{
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidAmount { amount });
    }

    ensure_wallet(conn, user_id).await?;
    let wallet = apply_balance_delta(conn, user_id, round_cents(amount)).await?;
    let entry = append_ledger_entry(
        conn,
        user_id,
        amount,
        TX_CREDIT,
        description,
        wallet.balance,
        gambling_transaction_id,
    )
    .await?;
    info!(
        "Credited {:.2} to user {} wallet, balance now {:.2}",
        amount, user_id, wallet.balance
    );
    Ok(entry)
}

/// Debits the wallet and appends the matching `"debit"` ledger row.
///
/// Rejects the debit with [`Error::InsufficientFunds`] before any mutation
/// when the balance (zero for a missing wallet) cannot cover the amount.
pub async fn debit_wallet<C>(
    conn: &C,
    user_id: i64,
    amount: f64,
    description: &str,
) -> Result<wallet_transaction::Model>
where
    C: ConnectionTrait,
{
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidAmount { amount });
    }

    let amount = round_cents(amount);
    let current = get_wallet(conn, user_id).await?.map_or(0.0, |w| w.balance);
    if current < amount {
        return Err(Error::InsufficientFunds {
            current,
            required: amount,
        });
    }

    let wallet = apply_balance_delta(conn, user_id, -amount).await?;
    let entry = append_ledger_entry(
        conn,
        user_id,
        amount,
        TX_DEBIT,
        description,
        wallet.balance,
        None,
    )
    .await?;
    info!(
        "Debited {:.2} from user {} wallet, balance now {:.2}",
        amount, user_id, wallet.balance
    );
    Ok(entry)
}
