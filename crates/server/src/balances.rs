//! Balance and settle-up API endpoints
//!
//! Both endpoints recompute from the household's full expense set on every
//! request; nothing here is cached or persisted.

use api_types::{balance::BalancesResponse, settlement::SettlementView};
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, server::ServerState};

/// Returns the household's net balance map, user-id-keyed, as the direct
/// response body.
pub async fn get(
    State(state): State<ServerState>,
    Path(household_id): Path<String>,
) -> Result<Json<BalancesResponse>, ServerError> {
    let ledger = state.ledger.read().await;
    let balances: BalancesResponse = ledger
        .balances(&household_id)
        .into_iter()
        .map(|(user_id, balance)| (user_id, balance.cents()))
        .collect();

    Ok(Json(balances))
}

/// Returns the greedy settlement suggestions as the direct response body.
pub async fn settle_up(
    State(state): State<ServerState>,
    Path(household_id): Path<String>,
) -> Result<Json<Vec<SettlementView>>, ServerError> {
    let ledger = state.ledger.read().await;
    let transactions = ledger
        .settlement(&household_id)?
        .into_iter()
        .map(|tx| SettlementView {
            from: tx.from,
            to: tx.to,
            amount_cents: tx.amount.cents(),
        })
        .collect();

    Ok(Json(transactions))
}
