//! Per-category spending breakdown.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tripsplit_shared::types::{ParticipantId, round_cents};

use super::types::CategorySpending;
use crate::expense::Expense;

/// Aggregates who paid how much in each spending category.
pub struct CategoryAggregator;

impl CategoryAggregator {
    /// Builds one record per normalized category, sorted by category name.
    ///
    /// Uncategorized (absent or blank) expenses are skipped. Both group and
    /// personal expenses count: the breakdown reports who spent money on what,
    /// independent of how it is split. The top spender is the participant with
    /// the largest total; ties go to the lowest participant id.
    #[must_use]
    pub fn aggregate(expenses: &[Expense]) -> Vec<CategorySpending> {
        let mut by_category: BTreeMap<String, BTreeMap<ParticipantId, Decimal>> = BTreeMap::new();

        for expense in expenses {
            let Some(category) = expense.normalized_category() else {
                continue;
            };
            *by_category
                .entry(category)
                .or_default()
                .entry(expense.payer)
                .or_insert(Decimal::ZERO) += expense.amount;
        }

        by_category
            .into_iter()
            .filter_map(|(category, spend)| Self::summarize(category, spend))
            .collect()
    }

    fn summarize(
        category: String,
        spend: BTreeMap<ParticipantId, Decimal>,
    ) -> Option<CategorySpending> {
        let (top_spender, top_spend) = spend
            .iter()
            .max_by(|(a_id, a_amt), (b_id, b_amt)| a_amt.cmp(b_amt).then_with(|| b_id.cmp(a_id)))
            .map(|(id, amount)| (*id, round_cents(*amount)))?;

        let total_spend = round_cents(spend.values().copied().sum());
        let per_participant_spend = spend
            .into_iter()
            .map(|(id, amount)| (id, round_cents(amount)))
            .collect();

        Some(CategorySpending {
            category,
            top_spender,
            top_spend,
            total_spend,
            per_participant_spend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn pid(n: u128) -> ParticipantId {
        ParticipantId::from_uuid(Uuid::from_u128(n))
    }

    #[test]
    fn test_top_spender_per_category() {
        let (a, b) = (pid(1), pid(2));
        let result = CategoryAggregator::aggregate(&[
            Expense::group(dec!(10), a).with_category("FOOD"),
            Expense::group(dec!(5), b).with_category("FOOD"),
            Expense::group(dec!(20), a).with_category("FUEL"),
        ]);

        assert_eq!(result.len(), 2);

        let food = &result[0];
        assert_eq!(food.category, "FOOD");
        assert_eq!(food.top_spender, a);
        assert_eq!(food.top_spend, dec!(10.00));
        assert_eq!(food.total_spend.to_string(), "15.00");
        assert_eq!(food.per_participant_spend.get(&b), Some(&dec!(5.00)));

        let fuel = &result[1];
        assert_eq!(fuel.category, "FUEL");
        assert_eq!(fuel.top_spender, a);
        assert_eq!(fuel.total_spend.to_string(), "20.00");
    }

    #[test]
    fn test_categories_are_normalized_before_grouping() {
        let (a, b) = (pid(1), pid(2));
        let result = CategoryAggregator::aggregate(&[
            Expense::group(dec!(4.00), a).with_category("food"),
            Expense::group(dec!(6.00), b).with_category("  Food "),
            Expense::personal(dec!(1.50), a).with_category("FOOD"),
        ]);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category, "FOOD");
        assert_eq!(result[0].total_spend, dec!(11.50));
        assert_eq!(result[0].top_spender, b);
        assert_eq!(result[0].per_participant_spend.get(&a), Some(&dec!(5.50)));
    }

    #[test]
    fn test_blank_categories_are_excluded() {
        let a = pid(1);
        let result = CategoryAggregator::aggregate(&[
            Expense::group(dec!(4.00), a).with_category("   "),
            Expense::group(dec!(4.00), a).with_category(""),
            Expense::group(dec!(4.00), a),
        ]);

        assert!(result.is_empty());
    }

    #[test]
    fn test_personal_expenses_are_included() {
        let a = pid(1);
        let result =
            CategoryAggregator::aggregate(&[Expense::personal(dec!(50.00), a).with_category("gifts")]);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category, "GIFTS");
        assert_eq!(result[0].total_spend, dec!(50.00));
    }

    #[test]
    fn test_tied_top_spender_is_lowest_id() {
        let result = CategoryAggregator::aggregate(&[
            Expense::group(dec!(8.00), pid(7)).with_category("fuel"),
            Expense::group(dec!(8.00), pid(3)).with_category("fuel"),
            Expense::group(dec!(8.00), pid(5)).with_category("fuel"),
        ]);

        assert_eq!(result[0].top_spender, pid(3));
    }

    #[test]
    fn test_output_sorted_by_category() {
        let a = pid(1);
        let names: Vec<String> = CategoryAggregator::aggregate(&[
            Expense::group(dec!(1), a).with_category("tolls"),
            Expense::group(dec!(1), a).with_category("fuel"),
            Expense::group(dec!(1), a).with_category("lodging"),
        ])
        .into_iter()
        .map(|c| c.category)
        .collect();

        assert_eq!(names, vec!["FUEL", "LODGING", "TOLLS"]);
    }
}
