//! The settlement planner: turns net balances into a greedy sequence of
//! payer-to-payee transactions that drives every balance to zero.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{BalanceMap, EngineError, MoneyCents, ResultEngine};

/// A suggested payment from one user to another.
///
/// Advisory and ephemeral: suggestions are recomputed on every request and
/// never persisted as paid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementTransaction {
    pub from: String,
    pub to: String,
    pub amount: MoneyCents,
}

struct Party {
    user_id: String,
    balance: MoneyCents,
}

/// Plans a settlement for a balance map using greedy debt-netting.
///
/// Debtors are paired with creditors largest-first: each step pays
/// `min(-debtor, creditor)` from the front debtor to the front creditor and
/// drops whichever side reached zero. The loop is bounded by
/// `debtors + creditors` steps and emits at most `debtors + creditors - 1`
/// transactions. Ties are broken by user id so the output is deterministic
/// regardless of map iteration order.
///
/// The greedy heuristic is not guaranteed to minimize the transaction count
/// globally (that problem is NP-hard); it is kept deliberately.
///
/// A map whose values do not sum to zero violates the input contract and is
/// rejected with [`EngineError::UnbalancedLedger`] rather than silently
/// dropping the unresolved remainder. A fully settled map yields an empty
/// list.
pub fn plan(balances: &BalanceMap) -> ResultEngine<Vec<SettlementTransaction>> {
    let mut total = MoneyCents::ZERO;
    for balance in balances.values() {
        total += *balance;
    }
    if !total.is_zero() {
        return Err(EngineError::UnbalancedLedger(format!(
            "balances sum to {total}, expected 0.00"
        )));
    }

    let mut debtors: Vec<Party> = Vec::new();
    let mut creditors: Vec<Party> = Vec::new();
    for (user_id, balance) in balances {
        let party = Party {
            user_id: user_id.clone(),
            balance: *balance,
        };
        if balance.is_negative() {
            debtors.push(party);
        } else if balance.is_positive() {
            creditors.push(party);
        }
        // Zero balances are already settled and excluded.
    }

    // Largest debt and largest credit first; user id breaks ties.
    debtors.sort_by(|a, b| {
        a.balance
            .cmp(&b.balance)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
    creditors.sort_by(|a, b| {
        b.balance
            .cmp(&a.balance)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    let mut debtors: VecDeque<Party> = debtors.into();
    let mut creditors: VecDeque<Party> = creditors.into();
    let mut transactions = Vec::new();

    // The queues keep their initial order; they are not re-sorted after a
    // partial payment.
    while let (Some(debtor), Some(creditor)) = (debtors.front_mut(), creditors.front_mut()) {
        let amount = std::cmp::min(-debtor.balance, creditor.balance);

        transactions.push(SettlementTransaction {
            from: debtor.user_id.clone(),
            to: creditor.user_id.clone(),
            amount,
        });

        debtor.balance += amount;
        creditor.balance -= amount;

        let debtor_settled = debtor.balance.is_zero();
        let creditor_settled = creditor.balance.is_zero();
        if debtor_settled {
            debtors.pop_front();
        }
        if creditor_settled {
            creditors.pop_front();
        }
    }

    Ok(transactions)
}
