//! Participant shares and the share validator.
//!
//! Shares are fractions in `(0, 1]` entered by users, typically as rounded
//! percentages. The validator gates expense creation: a participant list is
//! accepted only if its shares sum to 1 within [`SHARE_SUM_TOLERANCE`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// Slack allowed on the share sum.
///
/// One percentage point of tolerance absorbs rounding when shares are entered
/// as rounded percentages (e.g. three participants at 33% each).
pub const SHARE_SUM_TOLERANCE: f64 = 0.01;

/// One participant's stake in an expense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: String,
    /// Fraction of the expense amount, in `(0, 1]`.
    pub share: f64,
}

impl Participant {
    pub fn new(user_id: impl Into<String>, share: f64) -> Self {
        Self {
            user_id: user_id.into(),
            share,
        }
    }
}

/// Validates a participant list for expense creation.
///
/// Rules:
/// - the list must be non-empty;
/// - each user may appear at most once;
/// - each share must be in `(0, 1]`;
/// - the shares must sum to 1 within [`SHARE_SUM_TOLERANCE`].
///
/// Pure predicate, no side effects. The caller must not create the expense
/// on rejection.
pub fn validate_shares(participants: &[Participant]) -> ResultEngine<()> {
    if participants.is_empty() {
        return Err(EngineError::InvalidShares(
            "at least one participant is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for participant in participants {
        if !seen.insert(participant.user_id.as_str()) {
            return Err(EngineError::InvalidShares(format!(
                "duplicate participant \"{}\"",
                participant.user_id
            )));
        }
        if !(participant.share > 0.0 && participant.share <= 1.0) {
            return Err(EngineError::InvalidShares(format!(
                "share for \"{}\" must be in (0, 1]",
                participant.user_id
            )));
        }
    }

    let total: f64 = participants.iter().map(|p| p.share).sum();
    if (total - 1.0).abs() > SHARE_SUM_TOLERANCE {
        return Err(EngineError::InvalidShares(
            "shares must sum to 100%".to_string(),
        ));
    }

    Ok(())
}
