#[cfg(test)]
mod tests {
    use crate::errors::{Error, LedgerError};
    use crate::portfolio::ledger::{
        absorb_position, apply_buy, apply_sell, open_position, PositionFigures, SellOutcome,
    };
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn assert_invariant(figures: &PositionFigures) {
        // cost_basis == units * avg_buy_price within rounding tolerance.
        let implied = (figures.units * figures.avg_buy_price).round_dp(2);
        let drift = (implied - figures.cost_basis).abs();
        assert!(
            drift <= dec!(0.01),
            "cost basis {} drifted from units*avg {}",
            figures.cost_basis,
            implied
        );
    }

    #[test]
    fn open_position_sets_cost_and_mark_to_quantity_times_price() {
        let figures = open_position(dec!(10), dec!(100)).unwrap();
        assert_eq!(figures.units, dec!(10));
        assert_eq!(figures.avg_buy_price, dec!(100));
        assert_eq!(figures.cost_basis, dec!(1000.00));
        assert_eq!(figures.current_value, dec!(1000.00));
        assert_invariant(&figures);
    }

    #[test]
    fn open_position_with_zero_quantity_is_a_divide_by_zero() {
        let err = open_position(Decimal::ZERO, dec!(100)).unwrap_err();
        assert!(matches!(
            err,
            Error::Ledger(LedgerError::DivideByZero(_))
        ));
    }

    #[test]
    fn buy_recomputes_weighted_average() {
        let figures = open_position(dec!(10), dec!(100)).unwrap();
        let figures = apply_buy(&figures, dec!(5), dec!(120)).unwrap();
        assert_eq!(figures.units, dec!(15));
        assert_eq!(figures.cost_basis, dec!(1600.00));
        assert_eq!(figures.avg_buy_price, dec!(106.6667));
        assert_eq!(figures.current_value, dec!(1600.00));
        assert_invariant(&figures);
    }

    #[test]
    fn sell_scales_cost_and_mark_and_keeps_average() {
        // Scenario from the accounting contract: 10 @ 100, 5 @ 120, sell 5.
        let figures = open_position(dec!(10), dec!(100)).unwrap();
        let figures = apply_buy(&figures, dec!(5), dec!(120)).unwrap();
        let outcome = apply_sell(&figures, "VTI", dec!(5)).unwrap();
        let reduced = match outcome {
            SellOutcome::Reduced(f) => f,
            SellOutcome::Closed => panic!("partial sell must not close the position"),
        };
        assert_eq!(reduced.units, dec!(10));
        assert_eq!(reduced.cost_basis, dec!(1066.67));
        assert_eq!(reduced.current_value, dec!(1066.67));
        assert_eq!(reduced.avg_buy_price, dec!(106.6667));
        assert_invariant(&reduced);
    }

    #[test]
    fn selling_every_unit_closes_the_position() {
        let figures = open_position(dec!(2.5), dec!(40)).unwrap();
        let outcome = apply_sell(&figures, "VTI", dec!(2.5)).unwrap();
        assert_eq!(outcome, SellOutcome::Closed);
    }

    #[test]
    fn overselling_is_rejected_not_clamped() {
        let figures = open_position(dec!(3), dec!(50)).unwrap();
        let err = apply_sell(&figures, "VTI", dec!(3.000001)).unwrap_err();
        match err {
            Error::Ledger(LedgerError::InsufficientUnits {
                symbol,
                held,
                requested,
            }) => {
                assert_eq!(symbol, "VTI");
                assert_eq!(held, dec!(3));
                assert_eq!(requested, dec!(3.000001));
            }
            other => panic!("expected InsufficientUnits, got {other}"),
        }
    }

    #[test]
    fn fractional_units_stay_at_six_digits() {
        let figures = open_position(dec!(0.1234567), dec!(300)).unwrap();
        assert_eq!(figures.units, dec!(0.123457));
    }

    #[test]
    fn absorb_resets_mark_to_combined_cost() {
        let figures = open_position(dec!(10), dec!(100)).unwrap();
        // Mark drifts away from cost basis via a buy.
        let figures = apply_buy(&figures, dec!(5), dec!(120)).unwrap();
        let merged = absorb_position(&figures, dec!(5), dec!(80)).unwrap();
        assert_eq!(merged.units, dec!(20));
        assert_eq!(merged.cost_basis, dec!(2000.00));
        assert_eq!(merged.current_value, merged.cost_basis);
        assert_eq!(merged.avg_buy_price, dec!(100));
        assert_invariant(&merged);
    }

    proptest! {
        /// For any sequence of buys, cost basis equals the sum of
        /// quantity*price and the average equals cost/units, within
        /// rounding tolerance.
        #[test]
        fn buy_sequences_accumulate_cost(
            lots in proptest::collection::vec((1u32..10_000, 1u32..100_000), 1..12)
        ) {
            let mut figures: Option<PositionFigures> = None;
            let mut expected_cost = Decimal::ZERO;
            for (raw_quantity, raw_price) in lots {
                // Quantities in thousandths of a unit, prices in cents.
                let quantity = Decimal::new(raw_quantity as i64, 3);
                let price = Decimal::new(raw_price as i64, 2);
                expected_cost += (quantity * price).round_dp(2);
                figures = Some(match &figures {
                    None => open_position(quantity, price).unwrap(),
                    Some(current) => apply_buy(current, quantity, price).unwrap(),
                });
            }
            let figures = figures.unwrap();
            prop_assert_eq!(figures.cost_basis, expected_cost);
            let implied = (figures.units * figures.avg_buy_price).round_dp(2);
            prop_assert!((implied - figures.cost_basis).abs() <= dec!(0.01));
        }

        /// Selling a proportion r scales cost and mark by (1-r) and leaves
        /// the average untouched.
        #[test]
        fn partial_sell_scales_proportionally(
            held in 2u32..1_000_000,
            sold in 1u32..1_000_000,
            price in 1u32..100_000,
        ) {
            prop_assume!(sold < held);
            let held = Decimal::new(held as i64, 3);
            let sold = Decimal::new(sold as i64, 3);
            let price = Decimal::new(price as i64, 2);
            let figures = open_position(held, price).unwrap();
            match apply_sell(&figures, "XYZ", sold).unwrap() {
                SellOutcome::Reduced(reduced) => {
                    let remaining = Decimal::ONE - sold / held;
                    prop_assert_eq!(
                        reduced.cost_basis,
                        (figures.cost_basis * remaining).round_dp(2)
                    );
                    prop_assert_eq!(
                        reduced.current_value,
                        (figures.current_value * remaining).round_dp(2)
                    );
                    prop_assert_eq!(reduced.avg_buy_price, figures.avg_buy_price);
                }
                SellOutcome::Closed => prop_assert!(false, "sold < held must not close"),
            }
        }
    }
}
