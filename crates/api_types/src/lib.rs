use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod expense {
    use super::*;

    /// One participant's stake in an expense, as entered by a client.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ParticipantShare {
        pub user_id: String,
        /// Fraction of the amount in `(0, 1]`; the server rejects the
        /// expense if the shares do not sum to 1 within tolerance.
        pub share: f64,
    }

    /// Request body for creating an expense.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub household_id: String,
        pub name: String,
        /// Total cost in integer cents. Must be > 0.
        pub amount_cents: i64,
        /// User id of who fronted the full amount.
        pub payer: String,
        pub participants: Vec<ParticipantShare>,
        /// RFC3339 timestamp of when the expense happened.
        ///
        /// Optional: if absent, the server uses now().
        pub date: Option<DateTime<FixedOffset>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseCreated {
        pub id: Uuid,
    }

    /// One expense as returned by the list endpoint.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: Uuid,
        pub name: String,
        pub amount_cents: i64,
        pub payer: String,
        pub participants: Vec<ParticipantShare>,
        /// RFC3339 timestamp.
        pub date: DateTime<FixedOffset>,
    }

    /// Response body for listing a household's expenses, newest first.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseListResponse {
        pub expenses: Vec<ExpenseView>,
    }
}

pub mod balance {
    /// Balance endpoint response: net balance in cents per user id, as the
    /// direct response body.
    ///
    /// Positive = owed to the user, negative = the user owes. Users with no
    /// expense involvement are absent.
    pub type BalancesResponse = std::collections::BTreeMap<String, i64>;
}

pub mod settlement {
    use super::*;

    /// One suggested payment. Advisory only, never persisted as paid.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SettlementView {
        pub from: String,
        pub to: String,
        pub amount_cents: i64,
    }
}
