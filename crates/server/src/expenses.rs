//! Expense API endpoints

use api_types::expense::{
    ExpenseCreated, ExpenseListResponse, ExpenseNew, ExpenseView, ParticipantShare,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{FixedOffset, Utc};

use crate::{ServerError, server::ServerState};

fn map_participant(participant: &engine::Participant) -> ParticipantShare {
    ParticipantShare {
        user_id: participant.user_id.clone(),
        share: participant.share,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<ExpenseCreated>), ServerError> {
    if payload.household_id.is_empty() {
        return Err(ServerError::Generic("household_id is required".to_string()));
    }
    if payload.name.is_empty() {
        return Err(ServerError::Generic("name is required".to_string()));
    }
    if payload.payer.is_empty() {
        return Err(ServerError::Generic("payer is required".to_string()));
    }

    let participants = payload
        .participants
        .iter()
        .map(|p| engine::Participant::new(p.user_id.clone(), p.share))
        .collect();
    let date = payload
        .date
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    let mut ledger = state.ledger.write().await;
    let id = ledger.add_expense(
        &payload.household_id,
        &payload.name,
        engine::MoneyCents::new(payload.amount_cents),
        &payload.payer,
        participants,
        date,
    )?;

    Ok((StatusCode::CREATED, Json(ExpenseCreated { id })))
}

pub async fn list(
    State(state): State<ServerState>,
    Path(household_id): Path<String>,
) -> Result<Json<ExpenseListResponse>, ServerError> {
    let utc = FixedOffset::east_opt(0)
        .ok_or_else(|| ServerError::Generic("invalid UTC offset".to_string()))?;

    let ledger = state.ledger.read().await;
    let expenses = ledger
        .expenses(&household_id)
        .into_iter()
        .map(|record| ExpenseView {
            id: record.id,
            name: record.name.clone(),
            amount_cents: record.amount.cents(),
            payer: record.payer.clone(),
            participants: record.participants.iter().map(map_participant).collect(),
            date: record.date.with_timezone(&utc),
        })
        .collect();

    Ok(Json(ExpenseListResponse { expenses }))
}
