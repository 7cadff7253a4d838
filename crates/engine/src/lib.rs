//! Expense-splitting and debt-settlement engine for households.
//!
//! The core is three pure computations over value data:
//!
//! - the share validator ([`validate_shares`]), gating expense creation;
//! - the balance aggregator ([`aggregate`]), folding expenses into one net
//!   balance per user;
//! - the settlement planner ([`plan`]), turning balances into a greedy
//!   sequence of payer-to-payee transactions.
//!
//! [`Ledger`] wraps them with the in-memory expense store the HTTP layer
//! works against. There is no I/O and no shared mutable state in this crate.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub use balance::{BalanceMap, aggregate};
pub use error::EngineError;
pub use expense::ExpenseRecord;
pub use money::MoneyCents;
pub use settlement::{SettlementTransaction, plan};
pub use shares::{Participant, SHARE_SUM_TOLERANCE, validate_shares};

mod balance;
mod error;
mod expense;
mod money;
mod settlement;
mod shares;

type ResultEngine<T> = Result<T, EngineError>;

/// In-memory expense ledger, keyed by household id.
///
/// All operations take the household context explicitly; the ledger holds no
/// ambient session state. Household membership and ids are managed by an
/// external layer, so an unknown household id simply behaves as an empty
/// household.
#[derive(Debug, Default)]
pub struct Ledger {
    expenses: HashMap<String, Vec<ExpenseRecord>>,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new expense after running the creation gate.
    ///
    /// A rejected expense is never stored. Returns the id of the stored
    /// record.
    pub fn add_expense(
        &mut self,
        household_id: &str,
        name: &str,
        amount: MoneyCents,
        payer: &str,
        participants: Vec<Participant>,
        date: DateTime<Utc>,
    ) -> ResultEngine<Uuid> {
        let record =
            ExpenseRecord::new(household_id, name, amount, payer, participants, date)?;
        let id = record.id;
        self.expenses
            .entry(household_id.to_string())
            .or_default()
            .push(record);
        Ok(id)
    }

    /// Returns a household's expenses, newest first by expense date.
    #[must_use]
    pub fn expenses(&self, household_id: &str) -> Vec<&ExpenseRecord> {
        let mut records: Vec<&ExpenseRecord> = self
            .expenses
            .get(household_id)
            .map(|records| records.iter().collect())
            .unwrap_or_default();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records
    }

    /// Recomputes the household's balance map from its full expense set.
    #[must_use]
    pub fn balances(&self, household_id: &str) -> BalanceMap {
        match self.expenses.get(household_id) {
            Some(records) => aggregate(records),
            None => BalanceMap::new(),
        }
    }

    /// Plans a settlement for the household's current balances.
    ///
    /// The aggregator guarantees a zero-sum map, so the planner's boundary
    /// check cannot fire for balances produced here; the error is still
    /// propagated rather than swallowed.
    pub fn settlement(&self, household_id: &str) -> ResultEngine<Vec<SettlementTransaction>> {
        plan(&self.balances(household_id))
    }
}
