use chrono::Utc;

use engine::{
    BalanceMap, EngineError, Ledger, MoneyCents, Participant, aggregate, plan, validate_shares,
};

fn ledger_with(expenses: &[(i64, &str, &[(&str, f64)])]) -> Ledger {
    let mut ledger = Ledger::new();
    for (amount, payer, participants) in expenses {
        let participants = participants
            .iter()
            .map(|(user, share)| Participant::new(*user, *share))
            .collect();
        ledger
            .add_expense(
                "house",
                "Expense",
                MoneyCents::new(*amount),
                payer,
                participants,
                Utc::now(),
            )
            .unwrap();
    }
    ledger
}

/// Replays a settlement against a balance map and asserts every balance
/// reaches exactly zero.
fn assert_settles(balances: &BalanceMap) {
    let transactions = plan(balances).unwrap();
    let mut remaining = balances.clone();
    for tx in &transactions {
        *remaining
            .entry(tx.from.clone())
            .or_insert(MoneyCents::ZERO) += tx.amount;
        *remaining.entry(tx.to.clone()).or_insert(MoneyCents::ZERO) -= tx.amount;
    }
    for (user, balance) in &remaining {
        assert!(
            balance.is_zero(),
            "{user} left with {balance} after settlement"
        );
    }
}

#[test]
fn three_way_even_split() {
    // 90.00 paid by alice, split in thirds.
    let ledger = ledger_with(&[(
        9000,
        "alice",
        &[("alice", 1.0 / 3.0), ("bob", 1.0 / 3.0), ("carol", 1.0 / 3.0)],
    )]);

    let balances = ledger.balances("house");
    assert_eq!(balances["alice"], MoneyCents::new(6000));
    assert_eq!(balances["bob"], MoneyCents::new(-3000));
    assert_eq!(balances["carol"], MoneyCents::new(-3000));

    let transactions = ledger.settlement("house").unwrap();
    assert_eq!(transactions.len(), 2);
    for tx in &transactions {
        assert_eq!(tx.to, "alice");
        assert_eq!(tx.amount, MoneyCents::new(3000));
    }
}

#[test]
fn payer_is_also_participant() {
    // 100.00 paid by alice, split evenly with bob.
    let ledger = ledger_with(&[(10_000, "alice", &[("alice", 0.5), ("bob", 0.5)])]);

    let balances = ledger.balances("house");
    assert_eq!(balances["alice"], MoneyCents::new(5000));
    assert_eq!(balances["bob"], MoneyCents::new(-5000));

    let transactions = ledger.settlement("house").unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].from, "bob");
    assert_eq!(transactions[0].to, "alice");
    assert_eq!(transactions[0].amount, MoneyCents::new(5000));
}

#[test]
fn share_sum_tolerance_edges() {
    // 5% off: rejected.
    let off = vec![Participant::new("alice", 0.5), Participant::new("bob", 0.45)];
    assert_eq!(
        validate_shares(&off),
        Err(EngineError::InvalidShares(
            "shares must sum to 100%".to_string()
        ))
    );

    // 0.009 off: accepted.
    let close = vec![
        Participant::new("alice", 0.5),
        Participant::new("bob", 0.491),
    ];
    assert!(validate_shares(&close).is_ok());
}

#[test]
fn self_paid_expense_needs_no_settlement() {
    let ledger = ledger_with(&[(4200, "alice", &[("alice", 1.0)])]);

    let balances = ledger.balances("house");
    assert_eq!(balances["alice"], MoneyCents::ZERO);
    assert_eq!(ledger.settlement("house").unwrap(), vec![]);
}

#[test]
fn balances_always_sum_to_zero() {
    let ledger = ledger_with(&[
        (9000, "alice", &[("alice", 1.0 / 3.0), ("bob", 1.0 / 3.0), ("carol", 1.0 / 3.0)]),
        (1234, "bob", &[("alice", 0.25), ("bob", 0.25), ("carol", 0.5)]),
        (999, "carol", &[("alice", 0.33), ("bob", 0.33), ("carol", 0.33)]),
        (7755, "dave", &[("alice", 0.7), ("bob", 0.3)]),
    ]);

    let total: MoneyCents = ledger
        .balances("house")
        .values()
        .fold(MoneyCents::ZERO, |acc, b| acc + *b);
    assert!(total.is_zero());
}

#[test]
fn settlement_replay_reaches_zero() {
    let ledger = ledger_with(&[
        (9000, "alice", &[("alice", 1.0 / 3.0), ("bob", 1.0 / 3.0), ("carol", 1.0 / 3.0)]),
        (1234, "bob", &[("alice", 0.25), ("bob", 0.25), ("carol", 0.5)]),
        (7755, "dave", &[("alice", 0.7), ("bob", 0.3)]),
    ]);
    assert_settles(&ledger.balances("house"));
}

#[test]
fn transaction_count_is_bounded() {
    // Four debtors, one creditor: at most 4 + 1 - 1 transactions.
    let balances: BalanceMap = [
        ("alice", 10_000),
        ("bob", -2500),
        ("carol", -2500),
        ("dave", -2500),
        ("erin", -2500),
    ]
    .into_iter()
    .map(|(user, cents)| (user.to_string(), MoneyCents::new(cents)))
    .collect();

    let transactions = plan(&balances).unwrap();
    assert!(transactions.len() <= 4);
    assert_settles(&balances);
}

#[test]
fn aggregate_and_plan_are_idempotent() {
    let ledger = ledger_with(&[
        (9000, "alice", &[("alice", 1.0 / 3.0), ("bob", 1.0 / 3.0), ("carol", 1.0 / 3.0)]),
        (1234, "bob", &[("alice", 0.25), ("bob", 0.25), ("carol", 0.5)]),
    ]);

    let first = ledger.balances("house");
    let second = ledger.balances("house");
    assert_eq!(first, second);

    assert_eq!(plan(&first).unwrap(), plan(&second).unwrap());
}

#[test]
fn payer_absorbs_tolerated_share_remainder() {
    // Shares sum to 0.99: bob is charged 49.50 of 100.00 and alice keeps the
    // remainder, so the map still sums to exactly zero.
    let mut ledger = Ledger::new();
    ledger
        .add_expense(
            "house",
            "Dinner",
            MoneyCents::new(10_000),
            "alice",
            vec![
                Participant::new("alice", 0.495),
                Participant::new("bob", 0.495),
            ],
            Utc::now(),
        )
        .unwrap();

    let balances = ledger.balances("house");
    assert_eq!(balances["bob"], MoneyCents::new(-4950));
    assert_eq!(balances["alice"], MoneyCents::new(4950));
    assert_settles(&balances);
}

#[test]
fn aggregate_is_order_insensitive() {
    let records = ledger_with(&[
        (9000, "alice", &[("alice", 0.5), ("bob", 0.5)]),
        (5000, "bob", &[("alice", 0.5), ("bob", 0.5)]),
    ]);
    let reversed = ledger_with(&[
        (5000, "bob", &[("alice", 0.5), ("bob", 0.5)]),
        (9000, "alice", &[("alice", 0.5), ("bob", 0.5)]),
    ]);

    assert_eq!(records.balances("house"), reversed.balances("house"));
}

#[test]
fn oversized_amounts_cannot_reach_aggregation() {
    let mut ledger = Ledger::new();

    // Amounts near i64::MAX would wrap the payer's balance while folding;
    // the creation gate must reject them so aggregation stays in range.
    for _ in 0..2 {
        let result = ledger.add_expense(
            "house",
            "Bogus",
            MoneyCents::new(i64::MAX),
            "alice",
            vec![Participant::new("alice", 0.5), Participant::new("bob", 0.5)],
            Utc::now(),
        );
        assert_eq!(
            result,
            Err(EngineError::InvalidAmount("amount too large".to_string()))
        );
    }
    assert!(ledger.expenses("house").is_empty());
    assert!(ledger.balances("house").is_empty());

    // At the cap itself, repeated aggregation stays exact.
    for _ in 0..2 {
        ledger
            .add_expense(
                "house",
                "Big",
                MoneyCents::MAX_AMOUNT,
                "alice",
                vec![Participant::new("alice", 0.5), Participant::new("bob", 0.5)],
                Utc::now(),
            )
            .unwrap();
    }
    let balances = ledger.balances("house");
    assert_eq!(balances["alice"], MoneyCents::new(MoneyCents::MAX_AMOUNT.cents()));
    assert_eq!(balances["bob"], MoneyCents::new(-MoneyCents::MAX_AMOUNT.cents()));
    assert_settles(&balances);
}

#[test]
fn aggregating_nothing_yields_nothing() {
    assert!(aggregate(&[]).is_empty());
}
