//! The balance aggregator: folds a household's expenses into one net
//! balance per user.

use std::collections::HashMap;

use crate::{ExpenseRecord, MoneyCents};

/// Net balance per user id.
///
/// Positive = the household owes this user money (they overpaid);
/// negative = this user owes the household money. Users who never appear in
/// an expense are absent from the map; callers must treat "absent" as zero.
///
/// A balance map is derived, never stored: it is recomputed from the full
/// expense set on every request, so staleness is impossible.
pub type BalanceMap = HashMap<String, MoneyCents>;

/// Folds a set of expense records into a [`BalanceMap`].
///
/// For every participant of every expense, `owed = amount * share` (rounded
/// to the nearest cent) is subtracted from the participant and added to the
/// payer. A payer who is also a participant nets out with no special case.
///
/// The same rounded `owed` figure is applied on both sides, so the values of
/// the resulting map sum to **exactly** zero cents, even when the share sum
/// sits inside the validator's tolerance band (the payer absorbs the
/// undistributed remainder).
///
/// There is no failure mode: an already-validated expense list always
/// aggregates, and an empty list yields an empty map.
pub fn aggregate(expenses: &[ExpenseRecord]) -> BalanceMap {
    let mut balances = BalanceMap::new();

    for expense in expenses {
        for participant in &expense.participants {
            let owed = expense.amount.split(participant.share);

            *balances
                .entry(participant.user_id.clone())
                .or_insert(MoneyCents::ZERO) -= owed;
            *balances
                .entry(expense.payer.clone())
                .or_insert(MoneyCents::ZERO) += owed;
        }
    }

    balances
}
