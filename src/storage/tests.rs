use super::{AccountStore, MemoryStorage, Mutation, Storage, TransactionStore};
use crate::models::{Account, AccountError, NewTransaction, TransactionPatch, TransactionType};
use crate::types::{DateRange, Monetary};
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

fn create_new_transaction(transaction_type: TransactionType, amount: i64, category: &str, day: u32, bank_name: &str) -> NewTransaction {
    NewTransaction {
        transaction_type,
        amount: Monetary::from(amount),
        category: category.to_string(),
        description: format!("{category} on day {day}"),
        date: date(2024, 1, day),
        bank_name: Some(bank_name.to_string()),
        tags: Vec::new(),
        receipt_image: None
    }
}

#[test]
fn test_add_assigns_unique_ids_and_inserts_at_head() {
    let mut store = TransactionStore::new();

    let first = store.add(create_new_transaction(TransactionType::Income, 100, "Income", 20, "BCA"));
    let second = store.add(create_new_transaction(TransactionType::Expense, 50, "Shopping", 1, "BCA"));

    assert_ne!(first.id, second.id);
    assert_eq!(store.len(), 2);

    // Past-dated transaction still comes first because it was added last.
    let order: Vec<Uuid> = store.iter().map(|transaction| transaction.id).collect();
    assert_eq!(order, vec![second.id, first.id]);
}

#[test]
fn test_update_then_read_changes_only_the_patched_field() -> Result<()> {
    let mut store = TransactionStore::new();
    let created = store.add(create_new_transaction(TransactionType::Expense, 250_000, "Shopping", 14, "BCA"));

    let updated = store.update(created.id, TransactionPatch {
        description: Some("Weekly groceries".to_string()),
        ..Default::default()
    });

    assert!(updated.is_some());

    let stored = store.get(created.id).ok_or_else(|| anyhow!("Transaction missing after update"))?;
    let mut expected = created.clone();
    expected.description = "Weekly groceries".to_string();

    assert_eq!(stored, &expected);

    Ok(())
}

#[test]
fn test_update_can_detach_a_transaction_from_its_bank() -> Result<()> {
    let mut store = TransactionStore::new();
    let created = store.add(create_new_transaction(TransactionType::Expense, 40, "Others", 5, "BCA"));

    store.update(created.id, TransactionPatch {
        bank_name: Some(None),
        ..Default::default()
    }).ok_or_else(|| anyhow!("Transaction missing on update"))?;

    let stored = store.get(created.id).ok_or_else(|| anyhow!("Transaction missing after update"))?;

    assert_eq!(stored.bank_name, None);
    assert!(store.filter_by_bank_name("BCA").is_empty());

    Ok(())
}

#[test]
fn test_update_and_delete_report_missing_ids() {
    let mut store = TransactionStore::new();
    store.add(create_new_transaction(TransactionType::Income, 100, "Income", 1, "BCA"));

    assert!(store.update(Uuid::new_v4(), TransactionPatch::default()).is_none());
    assert!(store.delete(Uuid::new_v4()).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_delete_removes_exactly_one_and_preserves_order() {
    let mut store = TransactionStore::new();
    let a = store.add(create_new_transaction(TransactionType::Income, 1, "Income", 1, "BCA"));
    let b = store.add(create_new_transaction(TransactionType::Income, 2, "Income", 2, "BCA"));
    let c = store.add(create_new_transaction(TransactionType::Income, 3, "Income", 3, "BCA"));
    let d = store.add(create_new_transaction(TransactionType::Income, 4, "Income", 4, "BCA"));

    let removed = store.delete(b.id);

    assert_eq!(removed.map(|transaction| transaction.id), Some(b.id));

    let order: Vec<Uuid> = store.iter().map(|transaction| transaction.id).collect();
    assert_eq!(order, vec![d.id, c.id, a.id]);
}

#[test]
fn test_filters_use_exact_matches_and_inclusive_ranges() {
    let mut store = TransactionStore::new();
    store.add(create_new_transaction(TransactionType::Expense, 85_000, "Food & Beverages", 15, "BCA"));
    store.add(create_new_transaction(TransactionType::Expense, 50_000, "Transportation", 15, "Cash"));
    store.add(create_new_transaction(TransactionType::Income, 8_500_000, "Salary", 1, "BCA"));
    store.add(create_new_transaction(TransactionType::Expense, 250_000, "Shopping", 14, "Mandiri"));

    assert_eq!(store.filter_by_category("Shopping").len(), 1);
    assert!(store.filter_by_category("shopping").is_empty());
    assert_eq!(store.filter_by_bank_name("BCA").len(), 2);
    assert!(store.filter_by_bank_name("BC").is_empty());

    let range = DateRange::new(date(2024, 1, 14), date(2024, 1, 15));
    assert_eq!(store.filter_by_date_range(&range).len(), 3);
}

#[test]
fn test_total_by_type_sums_matching_amounts_within_range() {
    let mut store = TransactionStore::new();
    store.add(create_new_transaction(TransactionType::Income, 8_500_000, "Salary", 1, "BCA"));
    store.add(create_new_transaction(TransactionType::Income, 2_000_000, "Freelance", 12, "Mandiri"));
    store.add(create_new_transaction(TransactionType::Expense, 250_000, "Shopping", 14, "Mandiri"));

    assert_eq!(store.total_by_type(TransactionType::Income, None), Monetary::from(10_500_000));
    assert_eq!(store.total_by_type(TransactionType::Expense, None), Monetary::from(250_000));

    let range = DateRange::new(date(2024, 1, 12), date(2024, 1, 31));
    assert_eq!(store.total_by_type(TransactionType::Income, Some(&range)), Monetary::from(2_000_000));

    let empty = DateRange::new(date(2023, 1, 1), date(2023, 12, 31));
    assert!(store.total_by_type(TransactionType::Income, Some(&empty)).is_zero());
    assert!(TransactionStore::new().total_by_type(TransactionType::Expense, None).is_zero());
}

#[test]
fn test_filter_by_tag_and_recent() {
    let mut store = TransactionStore::new();
    let mut tagged = create_new_transaction(TransactionType::Expense, 10, "Others", 2, "BCA");
    tagged.tags = vec!["trip".to_string()];

    store.add(create_new_transaction(TransactionType::Expense, 20, "Others", 3, "BCA"));
    let created = store.add(tagged);

    assert_eq!(store.filter_by_tag("trip").len(), 1);
    assert_eq!(store.recent(1)[0].id, created.id);
    assert_eq!(store.recent(10).len(), 2);
}

#[test]
fn test_account_create_rejects_duplicate_names() -> Result<()> {
    let mut store = AccountStore::new();
    let created = store.create("BCA")?;

    assert!(created.balance.is_zero());
    assert!(matches!(store.create("BCA"), Err(AccountError::DuplicateName { .. })));
    assert_eq!(store.len(), 1);

    Ok(())
}

#[test]
fn test_apply_transaction_updates_balance_and_totals() -> Result<()> {
    let mut store = AccountStore::new();
    store.create("BCA")?;

    store.apply_transaction("BCA", Monetary::from(5_000_000), TransactionType::Income)?;
    let account = store.apply_transaction("BCA", Monetary::from(250_000), TransactionType::Expense)?;

    assert_eq!(account.balance, Monetary::from(4_750_000));
    assert_eq!(account.total_income, Monetary::from(5_000_000));
    assert_eq!(account.total_expense, Monetary::from(250_000));
    assert_eq!(store.find_by_name("BCA"), Some(account));

    Ok(())
}

#[test]
fn test_apply_transaction_to_unknown_name_changes_nothing() -> Result<()> {
    let mut store = AccountStore::new();
    store.create("BCA")?;

    let result = store.apply_transaction("NewBank", Monetary::from(100), TransactionType::Expense);

    assert_eq!(result, Err(AccountError::not_found("NewBank")));
    assert!(store.find_by_name("NewBank").is_none());
    assert!(store.total_balance().is_zero());

    Ok(())
}

#[test]
fn test_find_by_name_is_idempotent() -> Result<()> {
    let mut store = AccountStore::new();
    store.create("BCA")?;

    assert_eq!(store.find_by_name("BCA"), store.find_by_name("BCA"));
    assert!(store.find_by_name("bca").is_none());

    Ok(())
}

#[test]
fn test_accounts_are_listed_oldest_first() -> Result<()> {
    let mut store = AccountStore::new();
    let opened = date(2024, 1, 1).and_hms_opt(0, 0, 0).expect("valid time").and_utc();
    let later = date(2024, 2, 1).and_hms_opt(0, 0, 0).expect("valid time").and_utc();

    store.restore(Account::seeded("Zeta", Monetary::ZERO, Monetary::ZERO, Monetary::ZERO, later))?;
    store.restore(Account::seeded("Alpha", Monetary::ZERO, Monetary::ZERO, Monetary::ZERO, opened))?;

    let names: Vec<String> = store.accounts().into_iter().map(|account| account.name).collect();
    assert_eq!(names, vec!["Alpha".to_string(), "Zeta".to_string()]);

    Ok(())
}

#[test]
fn test_seeded_storage_loads_demo_data_newest_first() -> Result<()> {
    let storage = MemoryStorage::seeded();
    let snapshot = storage.load()?;

    assert_eq!(snapshot.accounts.len(), 2);
    assert_eq!(snapshot.transactions.len(), 6);

    let dates: Vec<NaiveDate> = snapshot.transactions.iter().map(|transaction| transaction.date).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);

    Ok(())
}

#[test]
fn test_memory_storage_records_saved_mutations() -> Result<()> {
    let storage = MemoryStorage::new();
    let account = Account::new("BCA");

    storage.save(&Mutation::AccountCreated(account.clone()))?;

    assert_eq!(storage.saved(), vec![Mutation::AccountCreated(account)]);
    assert!(storage.load()?.accounts.is_empty());

    Ok(())
}
