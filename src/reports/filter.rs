use crate::models::{Transaction, TransactionType};
use crate::storage::TransactionStore;
use crate::types::{DateRange, Monetary};

/// Criteria for the transaction list; unset criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive text looked up in the description and the category.
    pub query: Option<String>,
    pub category: Option<String>,
    pub transaction_type: Option<TransactionType>,
    pub date_range: Option<DateRange>
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let matches_query = self.query.as_deref().is_none_or(|query| {
            let query = query.to_lowercase();
            transaction.description.to_lowercase().contains(&query)
                || transaction.category.to_lowercase().contains(&query)
        });

        matches_query
            && self.category.as_deref().is_none_or(|category| transaction.category == category)
            && self.transaction_type.is_none_or(|transaction_type| transaction.transaction_type == transaction_type)
            && self.date_range.is_none_or(|range| range.contains(transaction.date))
    }

    /// Matching transactions in the store's read order.
    pub fn apply<'a>(&self, store: &'a TransactionStore) -> Vec<&'a Transaction> {
        store.iter().filter(|transaction| self.matches(transaction)).collect()
    }

    pub fn summary(&self, store: &TransactionStore) -> Summary {
        Summary::of(self.apply(store))
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Summary {
    pub total_income: Monetary,
    pub total_expense: Monetary,
    pub net_balance: Monetary
}

impl Summary {
    pub fn of<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut summary = Summary::default();

        for transaction in transactions {
            match transaction.transaction_type {
                TransactionType::Income => summary.total_income += transaction.amount,
                TransactionType::Expense => summary.total_expense += transaction.amount
            }
        }

        summary.net_balance = summary.total_income;
        summary.net_balance -= summary.total_expense;
        summary
    }
}
