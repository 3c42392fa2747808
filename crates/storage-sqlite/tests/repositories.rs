//! Integration tests against a real SQLite file: holding lifecycle through
//! transaction recording, and atomicity of rejected events.

use std::sync::Arc;

use rust_decimal_macros::dec;
use tempfile::tempdir;

use wealthtrack_core::errors::Error;
use wealthtrack_core::holdings::HoldingRepositoryTrait;
use wealthtrack_core::portfolio::ReconcileOutcome;
use wealthtrack_core::transactions::{NewTransaction, TransactionRepositoryTrait};
use wealthtrack_core::users::{NewUser, UserRepositoryTrait};
use wealthtrack_storage_sqlite::holdings::HoldingRepository;
use wealthtrack_storage_sqlite::transactions::TransactionRepository;
use wealthtrack_storage_sqlite::users::UserRepository;
use wealthtrack_storage_sqlite::{create_pool, run_migrations, spawn_writer};

struct Harness {
    _dir: tempfile::TempDir,
    users: UserRepository,
    holdings: HoldingRepository,
    transactions: TransactionRepository,
}

async fn harness() -> Harness {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let pool = create_pool(db_path.to_str().unwrap()).unwrap();
    run_migrations(&pool).unwrap();
    let writer = spawn_writer((*pool).clone());
    Harness {
        _dir: dir,
        users: UserRepository::new(pool.clone(), writer.clone()),
        holdings: HoldingRepository::new(pool.clone(), writer.clone()),
        transactions: TransactionRepository::new(pool, writer),
    }
}

async fn register_user(harness: &Harness) -> String {
    let user = harness
        .users
        .insert_new_user(NewUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "argon2-hash".to_string(),
            risk_profile: None,
        })
        .await
        .unwrap();
    user.id
}

fn buy(symbol: &str, quantity: &str, price: &str) -> NewTransaction {
    NewTransaction {
        symbol: symbol.to_string(),
        transaction_type: "buy".to_string(),
        quantity: quantity.parse().unwrap(),
        price: price.parse().unwrap(),
        fees: None,
        asset_type: Some("etf".to_string()),
        executed_at: None,
    }
}

fn sell(symbol: &str, quantity: &str, price: &str) -> NewTransaction {
    NewTransaction {
        transaction_type: "sell".to_string(),
        ..buy(symbol, quantity, price)
    }
}

#[tokio::test]
async fn recording_buys_and_sells_drives_the_holding_lifecycle() {
    let harness = harness().await;
    let user_id = register_user(&harness).await;

    // First buy creates the holding.
    let recorded = harness
        .transactions
        .record_reconciled(user_id.clone(), buy("VTI", "10", "100"))
        .await
        .unwrap();
    let holding = match recorded.outcome {
        ReconcileOutcome::Created { holding } => holding,
        other => panic!("expected Created, got {other:?}"),
    };
    assert_eq!(holding.units, dec!(10));
    assert_eq!(holding.cost_basis, dec!(1000.00));
    assert_eq!(holding.asset_type, "etf");

    // Second buy reweights the average.
    let recorded = harness
        .transactions
        .record_reconciled(user_id.clone(), buy("VTI", "5", "120"))
        .await
        .unwrap();
    let holding = match recorded.outcome {
        ReconcileOutcome::Updated { holding } => holding,
        other => panic!("expected Updated, got {other:?}"),
    };
    assert_eq!(holding.units, dec!(15));
    assert_eq!(holding.cost_basis, dec!(1600.00));
    assert_eq!(holding.avg_buy_price, dec!(106.6667));

    // Partial sell scales cost and keeps the average.
    let recorded = harness
        .transactions
        .record_reconciled(user_id.clone(), sell("VTI", "5", "150"))
        .await
        .unwrap();
    let holding = match recorded.outcome {
        ReconcileOutcome::Updated { holding } => holding,
        other => panic!("expected Updated, got {other:?}"),
    };
    assert_eq!(holding.units, dec!(10));
    assert_eq!(holding.cost_basis, dec!(1066.67));
    assert_eq!(holding.avg_buy_price, dec!(106.6667));
    assert_eq!(holding.last_price, Some(dec!(150)));

    // Selling the rest deletes the row.
    let recorded = harness
        .transactions
        .record_reconciled(user_id.clone(), sell("VTI", "10", "140"))
        .await
        .unwrap();
    assert!(matches!(
        recorded.outcome,
        ReconcileOutcome::Closed { .. }
    ));
    assert!(harness
        .holdings
        .find_holding_by_symbol(&user_id, "VTI")
        .unwrap()
        .is_none());

    // Every event above was recorded.
    let history = harness.transactions.load_transactions(&user_id).unwrap();
    assert_eq!(history.len(), 4);
}

#[tokio::test]
async fn rejected_events_persist_nothing() {
    let harness = harness().await;
    let user_id = register_user(&harness).await;

    harness
        .transactions
        .record_reconciled(user_id.clone(), buy("AAPL", "2", "200"))
        .await
        .unwrap();

    // Over-sell aborts: no transaction row, holding untouched.
    let err = harness
        .transactions
        .record_reconciled(user_id.clone(), sell("AAPL", "3", "210"))
        .await
        .unwrap_err();
    // The write actor stringifies core errors across the transaction
    // boundary; the ledger failure must still be visible.
    assert!(err.to_string().contains("Insufficient units"));

    let history = harness.transactions.load_transactions(&user_id).unwrap();
    assert_eq!(history.len(), 1);
    let holding = harness
        .holdings
        .find_holding_by_symbol(&user_id, "AAPL")
        .unwrap()
        .unwrap();
    assert_eq!(holding.units, dec!(2));

    // Selling a symbol that was never held is rejected the same way.
    let err = harness
        .transactions
        .record_reconciled(user_id.clone(), sell("MSFT", "1", "50"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("No holding found"));
    assert_eq!(harness.transactions.load_transactions(&user_id).unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_types_are_recorded_but_skip_reconciliation() {
    let harness = harness().await;
    let user_id = register_user(&harness).await;

    let mut event = buy("VTI", "1", "10");
    event.transaction_type = "dividend".to_string();
    let recorded = harness
        .transactions
        .record_reconciled(user_id.clone(), event)
        .await
        .unwrap();
    assert!(matches!(
        recorded.outcome,
        ReconcileOutcome::Skipped { ref transaction_type } if transaction_type == "dividend"
    ));

    assert!(harness
        .holdings
        .find_holding_by_symbol(&user_id, "VTI")
        .unwrap()
        .is_none());
    assert_eq!(harness.transactions.load_transactions(&user_id).unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_email_registration_is_a_unique_violation() {
    let harness = harness().await;
    register_user(&harness).await;

    let err = harness
        .users
        .insert_new_user(NewUser {
            name: "Another Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "argon2-hash".to_string(),
            risk_profile: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Database(_)));
    assert!(err.to_string().to_lowercase().contains("unique"));
}

#[tokio::test]
async fn direct_create_merges_into_an_existing_position() {
    let harness = harness().await;
    let user_id = register_user(&harness).await;

    harness
        .transactions
        .record_reconciled(user_id.clone(), buy("VTI", "10", "100"))
        .await
        .unwrap();

    let merged = harness
        .holdings
        .upsert_position(
            user_id.clone(),
            wealthtrack_core::holdings::NewHolding {
                asset_type: "etf".to_string(),
                symbol: "VTI".to_string(),
                units: dec!(10),
                avg_buy_price: dec!(110),
            },
        )
        .await
        .unwrap();
    assert_eq!(merged.units, dec!(20));
    assert_eq!(merged.cost_basis, dec!(2100.00));
    assert_eq!(merged.avg_buy_price, dec!(105));
    // Direct create resets the mark to the combined cost.
    assert_eq!(merged.current_value, dec!(2100.00));
}
