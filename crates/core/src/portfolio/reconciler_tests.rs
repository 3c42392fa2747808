#[cfg(test)]
mod tests {
    use crate::errors::{Error, LedgerError, ValidationError};
    use crate::holdings::Holding;
    use crate::portfolio::reconciler::{reconcile, ReconcileAction};
    use crate::transactions::NewTransaction;
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn event(transaction_type: &str, quantity: Decimal, price: Decimal) -> NewTransaction {
        NewTransaction {
            symbol: "VTI".to_string(),
            transaction_type: transaction_type.to_string(),
            quantity,
            price,
            fees: None,
            asset_type: Some("etf".to_string()),
            executed_at: None,
        }
    }

    fn held(units: Decimal, avg: Decimal, cost: Decimal) -> Holding {
        Holding {
            id: "h-1".to_string(),
            user_id: "u-1".to_string(),
            asset_type: "etf".to_string(),
            symbol: "VTI".to_string(),
            units,
            avg_buy_price: avg,
            cost_basis: cost,
            current_value: cost,
            last_price: None,
            last_price_at: None,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDateTime::default()
    }

    #[test]
    fn first_buy_creates_a_seeded_position() {
        let action = reconcile(None, &event("buy", dec!(10), dec!(100)), now()).unwrap();
        match action {
            ReconcileAction::Create(seed) => {
                assert_eq!(seed.symbol, "VTI");
                assert_eq!(seed.asset_type, "etf");
                assert_eq!(seed.figures.units, dec!(10));
                assert_eq!(seed.figures.cost_basis, dec!(1000.00));
                assert_eq!(seed.figures.current_value, dec!(1000.00));
                assert_eq!(seed.last_price, dec!(100));
            }
            other => panic!("expected Create, got {other:?}"),
        }
    }

    #[test]
    fn creating_a_position_requires_an_asset_class() {
        let mut buy = event("contribution", dec!(10), dec!(100));
        buy.asset_type = None;
        let err = reconcile(None, &buy, now()).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(field)) if field == "assetType"
        ));

        // Blank counts as missing too.
        let mut buy = event("buy", dec!(10), dec!(100));
        buy.asset_type = Some("  ".to_string());
        assert!(reconcile(None, &buy, now()).is_err());
    }

    #[test]
    fn buy_on_existing_holding_ignores_the_asset_type_field() {
        let holding = held(dec!(10), dec!(100), dec!(1000.00));
        let mut buy = event("buy", dec!(5), dec!(120));
        buy.asset_type = Some("crypto".to_string());
        match reconcile(Some(&holding), &buy, now()).unwrap() {
            ReconcileAction::Update(updated) => {
                assert_eq!(updated.asset_type, "etf");
                assert_eq!(updated.units, dec!(15));
                assert_eq!(updated.cost_basis, dec!(1600.00));
                assert_eq!(updated.avg_buy_price, dec!(106.6667));
                assert_eq!(updated.last_price, Some(dec!(120)));
                assert!(updated.last_price_at.is_some());
            }
            other => panic!("expected Update, got {other:?}"),
        }
    }

    #[test]
    fn selling_without_a_holding_is_an_error() {
        let err = reconcile(None, &event("sell", dec!(1), dec!(50)), now()).unwrap_err();
        assert!(matches!(
            err,
            Error::Ledger(LedgerError::PositionNotFound { symbol }) if symbol == "VTI"
        ));
    }

    #[test]
    fn selling_all_units_closes_the_holding() {
        let holding = held(dec!(10), dec!(100), dec!(1000.00));
        match reconcile(Some(&holding), &event("withdrawal", dec!(10), dec!(110)), now()).unwrap() {
            ReconcileAction::Close { holding_id } => assert_eq!(holding_id, "h-1"),
            other => panic!("expected Close, got {other:?}"),
        }
    }

    #[test]
    fn partial_sell_updates_and_marks_the_price() {
        let holding = held(dec!(15), dec!(106.6667), dec!(1600.00));
        match reconcile(Some(&holding), &event("sell", dec!(5), dec!(150)), now()).unwrap() {
            ReconcileAction::Update(updated) => {
                assert_eq!(updated.units, dec!(10));
                assert_eq!(updated.cost_basis, dec!(1066.67));
                assert_eq!(updated.current_value, dec!(1066.67));
                assert_eq!(updated.avg_buy_price, dec!(106.6667));
                assert_eq!(updated.last_price, Some(dec!(150)));
            }
            other => panic!("expected Update, got {other:?}"),
        }
    }

    #[test]
    fn overselling_aborts_reconciliation() {
        let holding = held(dec!(2), dec!(100), dec!(200.00));
        let err = reconcile(Some(&holding), &event("sell", dec!(3), dec!(90)), now()).unwrap_err();
        assert!(matches!(
            err,
            Error::Ledger(LedgerError::InsufficientUnits { .. })
        ));
    }

    #[test]
    fn unknown_type_skips_with_or_without_a_holding() {
        let dividend = event("dividend", dec!(1), dec!(2));
        match reconcile(None, &dividend, now()).unwrap() {
            ReconcileAction::Skip { transaction_type } => {
                assert_eq!(transaction_type, "dividend")
            }
            other => panic!("expected Skip, got {other:?}"),
        }
        let holding = held(dec!(10), dec!(100), dec!(1000.00));
        assert!(matches!(
            reconcile(Some(&holding), &dividend, now()).unwrap(),
            ReconcileAction::Skip { .. }
        ));
    }
}
