#[cfg(test)]
mod tests {
    use crate::holdings::Holding;
    use crate::portfolio::summary::summary_service::summarize;
    use chrono::NaiveDateTime;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn holding(symbol: &str, asset_type: &str, cost: Decimal, value: Decimal) -> Holding {
        Holding {
            id: format!("h-{symbol}"),
            user_id: "u-1".to_string(),
            asset_type: asset_type.to_string(),
            symbol: symbol.to_string(),
            units: dec!(1),
            avg_buy_price: cost,
            cost_basis: cost,
            current_value: value,
            last_price: None,
            last_price_at: None,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn totals_and_profit_loss() {
        let holdings = vec![
            holding("VTI", "etf", dec!(1000.00), dec!(1200.00)),
            holding("AAPL", "stock", dec!(500.00), dec!(450.00)),
            holding("BND", "bond", dec!(300.00), dec!(350.00)),
        ];
        let summary = summarize(&holdings);
        assert_eq!(summary.total_invested, dec!(1800.00));
        assert_eq!(summary.total_current_value, dec!(2000.00));
        assert_eq!(summary.total_profit_loss, dec!(200.00));
    }

    #[test]
    fn allocation_groups_by_asset_class() {
        let holdings = vec![
            holding("VTI", "etf", dec!(100), dec!(600.00)),
            holding("VXUS", "etf", dec!(100), dec!(200.00)),
            holding("AAPL", "stock", dec!(100), dec!(200.00)),
        ];
        let summary = summarize(&holdings);
        assert_eq!(summary.asset_allocation.len(), 2);
        let etf = &summary.asset_allocation[0];
        assert_eq!(etf.asset_type, "etf");
        assert_eq!(etf.value, dec!(800.00));
        assert_eq!(etf.percentage, dec!(80.00));
        let stock = &summary.asset_allocation[1];
        assert_eq!(stock.percentage, dec!(20.00));
    }

    #[test]
    fn empty_portfolio_has_zero_percentages() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_invested, Decimal::ZERO);
        assert_eq!(summary.total_profit_loss, Decimal::ZERO);
        assert!(summary.asset_allocation.is_empty());

        // Holdings whose marks sum to zero must not divide by zero.
        let worthless = vec![holding("JUNK", "stock", dec!(100), dec!(0))];
        let summary = summarize(&worthless);
        assert_eq!(summary.asset_allocation[0].percentage, Decimal::ZERO);
    }

    #[test]
    fn summary_is_stable_under_reordering() {
        let mut holdings = vec![
            holding("VTI", "etf", dec!(100), dec!(500.00)),
            holding("AAPL", "stock", dec!(100), dec!(300.00)),
            holding("BTC", "crypto", dec!(100), dec!(200.00)),
        ];
        let forward = summarize(&holdings);
        holdings.reverse();
        let backward = summarize(&holdings);
        assert_eq!(forward, backward);
    }

    proptest! {
        /// Percentages across asset-class groups sum to 100 (within one
        /// cent of rounding slack per group) whenever total value is
        /// positive, and profit/loss is always the value/cost difference.
        #[test]
        fn percentages_sum_to_one_hundred(
            values in proptest::collection::vec((0u8..5, 1u32..10_000_000), 1..20)
        ) {
            let classes = ["stock", "etf", "bond", "crypto", "cash"];
            let holdings: Vec<_> = values
                .iter()
                .enumerate()
                .map(|(index, (class_index, cents))| {
                    let value = Decimal::new(*cents as i64, 2);
                    holding(
                        &format!("SYM{index}"),
                        classes[*class_index as usize],
                        dec!(1),
                        value,
                    )
                })
                .collect();
            let summary = summarize(&holdings);
            prop_assert_eq!(
                summary.total_profit_loss,
                summary.total_current_value - summary.total_invested
            );
            let percentage_sum: Decimal = summary
                .asset_allocation
                .iter()
                .map(|allocation| allocation.percentage)
                .sum();
            let slack = Decimal::new(summary.asset_allocation.len() as i64, 2);
            prop_assert!((percentage_sum - dec!(100)).abs() <= slack);
        }
    }
}
