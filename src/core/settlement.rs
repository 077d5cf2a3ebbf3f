//! Settlement engine - applies a play's financial consequences atomically.
//!
//! One database transaction wraps the whole settlement: order, order item,
//! wallet debit, gambling record, and wallet credit either all become
//! visible or none do. Insufficient balance is rejected inside the
//! transaction before any mutation, so concurrent plays against the same
//! wallet cannot both pass the check and overdraw. Outcome resolution
//! itself is pure ([`crate::core::wager`]) and safe to retry; nothing is
//! recorded until this module's commit succeeds.

use crate::{
    core::{
        round_cents,
        wager::{GameType, Outcome},
        wallet,
    },
    entities::{
        Restaurant, User, gambling_transaction, order, order_item,
    },
    errors::{Error, Result},
};
use rand::Rng;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// How a settlement is paid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Full order total debited from the wallet
    Wallet,
    /// Card payment, no wallet debit
    CreditCard,
    /// Card payment with a wallet-funded discount portion
    WalletDiscount,
}

impl PaymentMethod {
    /// The wire string for this payment method.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wallet => "wallet",
            Self::CreditCard => "credit_card",
            Self::WalletDiscount => "wallet_discount",
        }
    }

    /// Whether the order is flagged as card-paid.
    const fn is_credit_card(self) -> bool {
        matches!(self, Self::CreditCard | Self::WalletDiscount)
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "wallet" => Ok(Self::Wallet),
            "credit_card" => Ok(Self::CreditCard),
            "wallet_discount" => Ok(Self::WalletDiscount),
            other => Err(Error::InvalidPaymentMethod {
                value: other.to_string(),
            }),
        }
    }
}

/// Everything the settlement engine needs to settle one resolved play.
#[derive(Clone, Debug)]
pub struct SettlementRequest {
    /// User who played
    pub user_id: i64,
    /// Restaurant whose menu was played against
    pub restaurant_id: i64,
    /// Game mechanic that produced the outcome
    pub game_type: GameType,
    /// Stake the user committed
    pub stake: f64,
    /// Server-resolved outcome for this play
    pub outcome: Outcome,
    /// How the order is paid
    pub payment_method: PaymentMethod,
    /// Wallet-funded portion for [`PaymentMethod::WalletDiscount`], ignored otherwise
    pub discount_amount: f64,
    /// Where to deliver the won meal
    pub delivery_address: String,
    /// Free-text delivery instructions
    pub special_instructions: String,
}

/// What a completed settlement produced. `order_id`/`order_number` are
/// `None` for a slots loss, which records the play but creates no order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Created order id, if a prize was won
    pub order_id: Option<i64>,
    /// Human-facing order number, if a prize was won
    pub order_number: Option<String>,
    /// Id of the appended gambling transaction
    pub gambling_transaction_id: i64,
    /// Wallet credit applied (0.00 when none)
    pub wallet_credit: f64,
}

/// Characters used in the random order-number suffix.
const ORDER_SUFFIX_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates an order number of the form `ORD-{millis}-{9 char suffix}`:
/// monotonic enough to avoid collision, with a random suffix for plays
/// settled in the same millisecond.
fn generate_order_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: String = (0..9)
        .map(|_| {
            let index = rng.gen_range(0..ORDER_SUFFIX_CHARSET.len());
            ORDER_SUFFIX_CHARSET[index] as char
        })
        .collect();
    format!("ORD-{millis}-{suffix}")
}

/// Validates the request fields that need no database access.
fn validate_request(request: &SettlementRequest) -> Result<()> {
    if !request.stake.is_finite() || request.stake <= 0.0 {
        return Err(Error::InvalidStake {
            amount: request.stake,
        });
    }
    if request.payment_method == PaymentMethod::WalletDiscount
        && (!request.discount_amount.is_finite()
            || request.discount_amount < 0.0
            || request.discount_amount > request.stake)
    {
        return Err(Error::InvalidDiscount {
            amount: request.discount_amount,
        });
    }
    Ok(())
}

/// Appends the gambling transaction row for this play.
async fn record_play<C>(
    conn: &C,
    request: &SettlementRequest,
    order_id: Option<i64>,
) -> Result<gambling_transaction::Model>
where
    C: ConnectionTrait,
{
    let prize = request.outcome.item.as_ref();
    let play = gambling_transaction::ActiveModel {
        user_id: Set(request.user_id),
        restaurant_id: Set(request.restaurant_id),
        order_id: Set(order_id),
        game_type: Set(request.game_type.as_str().to_string()),
        bet_amount: Set(round_cents(request.stake)),
        won_item_id: Set(prize.map(|p| p.menu_item_id)),
        won_item_name: Set(prize.map(|p| p.name.clone())),
        won_item_price: Set(prize.map(|p| p.price)),
        wallet_credit: Set(request.outcome.wallet_credit),
        transaction_type: Set("bet".to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    play.insert(conn).await.map_err(Into::into)
}

/// Settles one resolved play: order, order item, wallet effect, gambling
/// record, and wallet credit as a single all-or-nothing unit.
#[instrument(skip(db, request), fields(user_id = request.user_id, game = request.game_type.as_str()))]
pub async fn settle(
    db: &DatabaseConnection,
    request: &SettlementRequest,
) -> Result<SettlementResult> {
    validate_request(request)?;

    let txn = db.begin().await?;

    let user = User::find_by_id(request.user_id)
        .one(&txn)
        .await?
        .ok_or(Error::UserNotFound {
            id: request.user_id,
        })?;
    if !user.is_active {
        return Err(Error::UserInactive { id: user.id });
    }

    // Slots loss: record the play, nothing else. No order, no wallet
    // mutation, no balance check.
    let Some(prize) = request.outcome.item.as_ref() else {
        let play = record_play(&txn, request, None).await?;
        txn.commit().await?;
        info!("Recorded losing play {}", play.id);
        return Ok(SettlementResult {
            order_id: None,
            order_number: None,
            gambling_transaction_id: play.id,
            wallet_credit: 0.0,
        });
    };

    let restaurant = Restaurant::find_by_id(request.restaurant_id)
        .one(&txn)
        .await?
        .ok_or(Error::RestaurantNotFound {
            id: request.restaurant_id,
        })?;

    let subtotal = round_cents(request.stake);
    let delivery_fee = restaurant.delivery_fee;
    let total_amount = round_cents(subtotal + delivery_fee);

    let order_number = generate_order_number(&mut rand::thread_rng());
    let now = chrono::Utc::now();
    let order = order::ActiveModel {
        customer_id: Set(request.user_id),
        restaurant_id: Set(request.restaurant_id),
        order_number: Set(order_number.clone()),
        status: Set("pending".to_string()),
        subtotal: Set(subtotal),
        delivery_fee: Set(delivery_fee),
        total_amount: Set(total_amount),
        is_credit_card: Set(request.payment_method.is_credit_card()),
        payment_status: Set("paid".to_string()),
        delivery_address: Set(request.delivery_address.clone()),
        special_instructions: Set(request.special_instructions.clone()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let line = order_item::ActiveModel {
        order_id: Set(order.id),
        menu_item_id: Set(prize.menu_item_id),
        quantity: Set(1),
        unit_price: Set(prize.price),
        total_price: Set(prize.price),
        ..Default::default()
    };
    line.insert(&txn).await?;

    // Payment-method-specific wallet effect. Insufficient balance aborts
    // the whole transaction before any wallet mutation.
    match request.payment_method {
        PaymentMethod::Wallet => {
            wallet::debit_wallet(
                &txn,
                request.user_id,
                total_amount,
                &format!("Full payment for order {order_number}"),
            )
            .await?;
        }
        PaymentMethod::WalletDiscount => {
            if request.discount_amount > 0.0 {
                wallet::debit_wallet(
                    &txn,
                    request.user_id,
                    request.discount_amount,
                    &format!("Wallet discount for order {order_number}"),
                )
                .await?;
            }
        }
        PaymentMethod::CreditCard => {}
    }

    let play = record_play(&txn, request, Some(order.id)).await?;

    let wallet_credit = request.outcome.wallet_credit;
    if wallet_credit > 0.0 {
        wallet::credit_wallet(
            &txn,
            request.user_id,
            wallet_credit,
            "Refund from gambling game",
            Some(play.id),
        )
        .await?;
    }

    txn.commit().await?;
    info!(
        "Settled play {} into order {} (total {:.2}, credit {:.2})",
        play.id, order_number, total_amount, wallet_credit
    );
    Ok(SettlementResult {
        order_id: Some(order.id),
        order_number: Some(order_number),
        gambling_transaction_id: play.id,
        wallet_credit,
    })
}
