//! Metrics Calculator Module
//! Derives the expense breakdown and summary metrics for one country.

use serde::{Deserialize, Serialize};

use crate::data::CountryRecord;

/// Expense categories in fixed presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Rent,
    Food,
    Utilities,
    Internet,
    Transport,
    Entertainment,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Rent,
        ExpenseCategory::Food,
        ExpenseCategory::Utilities,
        ExpenseCategory::Internet,
        ExpenseCategory::Transport,
        ExpenseCategory::Entertainment,
    ];

    /// Display label for charts and legends.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Rent => "Rent",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Internet => "Internet",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Entertainment => "Entertainment",
        }
    }
}

/// Six (category, amount) pairs in presentation order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseBreakdown {
    pub entries: Vec<(ExpenseCategory, f64)>,
}

impl ExpenseBreakdown {
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, amount)| amount).sum()
    }
}

/// Summary metrics for one country. `balance` may be negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryMetrics {
    pub total_expenses: f64,
    pub balance: f64,
}

/// Pure derivation of breakdown and metrics from a record. No I/O, no
/// failure path; rounding happens only at display time.
pub struct MetricsCalculator;

impl MetricsCalculator {
    pub fn compute(record: &CountryRecord) -> (ExpenseBreakdown, CountryMetrics) {
        let entries: Vec<(ExpenseCategory, f64)> = ExpenseCategory::ALL
            .iter()
            .map(|category| (*category, Self::amount(record, *category)))
            .collect();

        let breakdown = ExpenseBreakdown { entries };
        let total_expenses = breakdown.total();
        let metrics = CountryMetrics {
            total_expenses,
            balance: record.minimum_wage - total_expenses,
        };

        (breakdown, metrics)
    }

    fn amount(record: &CountryRecord, category: ExpenseCategory) -> f64 {
        match category {
            ExpenseCategory::Rent => record.rent,
            ExpenseCategory::Food => record.food,
            ExpenseCategory::Utilities => record.utilities,
            ExpenseCategory::Internet => record.internet,
            ExpenseCategory::Transport => record.transport,
            ExpenseCategory::Entertainment => record.entertainment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colombia() -> CountryRecord {
        CountryRecord {
            country: "Colombia".to_string(),
            region: "Sudamérica".to_string(),
            currency: "COP".to_string(),
            minimum_wage: 1_300_000.0,
            rent: 600_000.0,
            food: 400_000.0,
            utilities: 150_000.0,
            internet: 60_000.0,
            transport: 100_000.0,
            entertainment: 50_000.0,
        }
    }

    #[test]
    fn colombia_scenario_balances() {
        let (breakdown, metrics) = MetricsCalculator::compute(&colombia());

        assert_eq!(breakdown.entries.len(), 6);
        assert_eq!(metrics.total_expenses, 1_360_000.0);
        assert_eq!(metrics.balance, -60_000.0);
    }

    #[test]
    fn breakdown_follows_presentation_order() {
        let (breakdown, _) = MetricsCalculator::compute(&colombia());

        let labels: Vec<&str> = breakdown
            .entries
            .iter()
            .map(|(category, _)| category.label())
            .collect();
        assert_eq!(
            labels,
            ["Rent", "Food", "Utilities", "Internet", "Transport", "Entertainment"]
        );

        let amounts: Vec<f64> = breakdown.entries.iter().map(|(_, a)| *a).collect();
        assert_eq!(
            amounts,
            [600_000.0, 400_000.0, 150_000.0, 60_000.0, 100_000.0, 50_000.0]
        );
    }

    #[test]
    fn total_matches_field_sum_exactly() {
        let mut record = colombia();
        record.rent = 123.45;
        record.food = 0.1;
        record.utilities = 0.2;

        let (breakdown, metrics) = MetricsCalculator::compute(&record);

        let expected: f64 = breakdown.entries.iter().map(|(_, a)| a).sum();
        assert_eq!(metrics.total_expenses, expected);
        assert_eq!(metrics.balance, record.minimum_wage - expected);
    }

    #[test]
    fn balance_is_positive_when_wage_covers_expenses() {
        let mut record = colombia();
        record.minimum_wage = 2_000_000.0;

        let (_, metrics) = MetricsCalculator::compute(&record);
        assert_eq!(metrics.balance, 640_000.0);
    }
}
