//! The module contains the `ExpenseRecord` type representing one shared
//! expense inside a household.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, MoneyCents, Participant, ResultEngine, shares};

/// A shared expense, immutable once created.
///
/// The only way to obtain an `ExpenseRecord` is [`ExpenseRecord::new`], which
/// runs the share validator, so an invalid record cannot exist. Records are
/// never edited or repaired after creation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub household_id: String,
    pub name: String,
    pub amount: MoneyCents,
    /// The user who fronted the full amount.
    pub payer: String,
    pub participants: Vec<Participant>,
    /// When the expense happened, independent of creation time.
    pub date: DateTime<Utc>,
}

impl ExpenseRecord {
    /// Creates a validated expense record.
    ///
    /// Rejects a non-positive amount, an amount above
    /// [`MoneyCents::MAX_AMOUNT`], and any participant list the share
    /// validator rejects.
    pub fn new(
        household_id: impl Into<String>,
        name: impl Into<String>,
        amount: MoneyCents,
        payer: impl Into<String>,
        participants: Vec<Participant>,
        date: DateTime<Utc>,
    ) -> ResultEngine<Self> {
        if !amount.is_positive() {
            return Err(EngineError::InvalidAmount(
                "amount must be positive".to_string(),
            ));
        }
        if amount > MoneyCents::MAX_AMOUNT {
            return Err(EngineError::InvalidAmount("amount too large".to_string()));
        }
        shares::validate_shares(&participants)?;

        Ok(Self {
            id: Uuid::new_v4(),
            household_id: household_id.into(),
            name: name.into(),
            amount,
            payer: payer.into(),
            participants,
            date,
        })
    }
}
