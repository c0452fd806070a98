use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::TransactionType;
use crate::storage::TransactionStore;
use crate::types::{DateRange, Monetary};

const TOP_CATEGORIES: usize = 5;

/// An expense category's slice of the period's spending.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Monetary,
    /// Percentage of the listed categories' combined total, one decimal place.
    pub percentage: Decimal
}

/// Income and expense for one period compared with the period before it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PeriodReport {
    pub income: Monetary,
    pub expense: Monetary,
    pub previous_income: Monetary,
    pub previous_expense: Monetary,
    pub income_change: Decimal,
    pub expense_change: Decimal,
    pub net_income: Monetary,
    pub savings_rate: Decimal,
    /// Up to five expense categories of the current period, largest first.
    pub top_categories: Vec<CategoryShare>
}

impl PeriodReport {
    pub fn compute(store: &TransactionStore, current: &DateRange, previous: &DateRange) -> Self {
        let income = store.total_by_type(TransactionType::Income, Some(current));
        let expense = store.total_by_type(TransactionType::Expense, Some(current));
        let previous_income = store.total_by_type(TransactionType::Income, Some(previous));
        let previous_expense = store.total_by_type(TransactionType::Expense, Some(previous));

        let mut net_income = income;
        net_income -= expense;

        Self {
            income,
            expense,
            previous_income,
            previous_expense,
            income_change: change_percent(income, previous_income),
            expense_change: change_percent(expense, previous_expense),
            net_income,
            savings_rate: percentage(net_income.as_decimal(), income.as_decimal()),
            top_categories: top_categories(store, current)
        }
    }
}

/// Relative change from `previous` to `current` in percent; zero when there is no previous value.
pub fn change_percent(current: Monetary, previous: Monetary) -> Decimal {
    current.as_decimal()
        .checked_sub(previous.as_decimal())
        .map(|delta| percentage(delta, previous.as_decimal()))
        .unwrap_or(Decimal::ZERO)
}

fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|value| value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}

fn top_categories(store: &TransactionStore, range: &DateRange) -> Vec<CategoryShare> {
    let mut totals = HashMap::<&str, Monetary>::new();

    for transaction in store.filter_by_date_range(range) {
        if transaction.transaction_type == TransactionType::Expense {
            *totals.entry(transaction.category.as_str()).or_default() += transaction.amount;
        }
    }

    let mut ranked: Vec<(&str, Monetary)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(TOP_CATEGORIES);

    let listed_total: Monetary = ranked.iter().map(|(_, amount)| amount).sum();

    ranked
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            category: category.to_string(),
            amount,
            percentage: percentage(amount.as_decimal(), listed_total.as_decimal())
        })
        .collect()
}
