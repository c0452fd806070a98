use std::str::FromStr;

use chrono::NaiveDate;

use crate::models::{Account, ExpenseCategory, NewTransaction, TransactionType, INCOME_CATEGORY};
use crate::reconciliation::errors::{Field, ValidationErrors};
use crate::storage::AccountStore;
use crate::types::{Monetary, MonetaryError};

/// Whether an expense may exceed the balance of its account.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum BalanceCheck {
    #[default]
    Enforce,
    Skip
}

/// Raw income form input, exactly as the user typed it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct IncomeForm {
    pub bank_name: String,
    pub amount: String,
    pub date: NaiveDate,
    pub description: String
}

/// Raw expense form input. `bank_name` must name an existing account.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ExpenseForm {
    pub bank_name: String,
    pub amount: String,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
    pub receipt_image: Option<String>
}

/// A submission that passed validation.
#[derive(Debug, Clone)]
pub(crate) struct Submission {
    pub bank_name: String,
    pub amount: Monetary,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub receipt_image: Option<String>
}

impl Submission {
    pub fn into_new_transaction(self, transaction_type: TransactionType) -> NewTransaction {
        NewTransaction {
            transaction_type,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
            bank_name: Some(self.bank_name),
            tags: Vec::new(),
            receipt_image: self.receipt_image
        }
    }
}

impl IncomeForm {
    pub(crate) fn validate(&self) -> Result<Submission, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let bank_name = self.bank_name.trim();

        if bank_name.is_empty() {
            errors.insert(Field::BankName, "Bank name is required");
        }

        let amount = validate_amount(&self.amount, &mut errors);
        let description = validate_description(&self.description, &mut errors);

        match amount {
            Some(amount) if errors.is_empty() => Ok(Submission {
                bank_name: bank_name.to_string(),
                amount,
                category: INCOME_CATEGORY.to_string(),
                description,
                date: self.date,
                receipt_image: None
            }),
            _ => Err(errors)
        }
    }
}

impl ExpenseForm {
    /// Validates against the current accounts and returns the account to charge.
    pub(crate) fn validate(&self, accounts: &AccountStore, balance_check: BalanceCheck) -> Result<(Account, Submission), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let bank_name = self.bank_name.trim();

        let account = if bank_name.is_empty() {
            errors.insert(Field::BankName, "Please select an income source");
            None
        } else {
            let account = accounts.find_by_name(bank_name);
            if account.is_none() {
                errors.insert(Field::BankName, format!("No account named '{bank_name}'"));
            }
            account
        };

        let amount = validate_amount(&self.amount, &mut errors);

        if let (Some(account), Some(amount), BalanceCheck::Enforce) = (&account, amount, balance_check) {
            if amount > account.balance {
                errors.insert(Field::Amount, format!("Amount exceeds available balance ({})", account.balance));
            }
        }

        let category = self.category.trim();

        if category.is_empty() {
            errors.insert(Field::Category, "Please select a category");
        } else if let Err(message) = ExpenseCategory::from_str(category) {
            errors.insert(Field::Category, message);
        }

        let description = validate_description(&self.description, &mut errors);

        match (account, amount) {
            (Some(account), Some(amount)) if errors.is_empty() => Ok((account, Submission {
                bank_name: bank_name.to_string(),
                amount,
                category: category.to_string(),
                description,
                date: self.date,
                receipt_image: self.receipt_image.clone()
            })),
            _ => Err(errors)
        }
    }
}

fn validate_amount(raw: &str, errors: &mut ValidationErrors) -> Option<Monetary> {
    let raw = raw.trim();

    if raw.is_empty() {
        errors.insert(Field::Amount, "Amount is required");
        return None;
    }

    match Monetary::from_str(raw) {
        Ok(amount) if amount.is_positive() => Some(amount),
        Err(MonetaryError::TooManyDecimalPlaces(places)) => {
            errors.insert(Field::Amount, format!("Amount can have at most {places} decimal places"));
            None
        }
        _ => {
            errors.insert(Field::Amount, "Amount must be greater than 0");
            None
        }
    }
}

fn validate_description(raw: &str, errors: &mut ValidationErrors) -> String {
    let description = raw.trim();

    if description.is_empty() {
        errors.insert(Field::Description, "Description is required");
    }

    description.to_string()
}
