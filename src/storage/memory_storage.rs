use std::sync::Mutex;

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::models::{Account, Transaction, TransactionType};
use crate::storage::{Mutation, Snapshot, Storage, StorageError};
use crate::types::Monetary;

/// Keeps everything in process memory; saved mutations are only recorded.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    snapshot: Snapshot,
    saved: Mutex<Vec<Mutation>>
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            saved: Mutex::new(Vec::new())
        }
    }

    /// Starts from the demo data set: two bank accounts and six transactions.
    pub fn seeded() -> Self {
        Self::with_snapshot(demo_snapshot())
    }

    /// Mutations saved so far, oldest first.
    pub fn saved(&self) -> Vec<Mutation> {
        self.saved.lock().map(|saved| saved.clone()).unwrap_or_default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Snapshot, StorageError> {
        Ok(self.snapshot.clone())
    }

    fn save(&self, mutation: &Mutation) -> Result<(), StorageError> {
        let mut saved = self.saved.lock()
            .map_err(|error| StorageError::Unavailable(error.to_string()))?;
        saved.push(mutation.clone());
        Ok(())
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn transaction(
    transaction_type: TransactionType,
    amount: i64,
    category: &str,
    description: &str,
    date: NaiveDate,
    bank_name: &str
) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        transaction_type,
        amount: Monetary::from(amount),
        category: category.to_string(),
        description: description.to_string(),
        date,
        bank_name: Some(bank_name.to_string()),
        tags: Vec::new(),
        receipt_image: None
    }
}

fn demo_snapshot() -> Snapshot {
    let opened = date(2024, 1, 1).and_time(NaiveTime::MIN).and_utc();

    let accounts = vec![
        Account::seeded("BCA - Tabungan", Monetary::from(5_000_000), Monetary::from(8_500_000), Monetary::from(3_500_000), opened),
        Account::seeded("Mandiri - Giro", Monetary::from(3_500_000), Monetary::from(5_000_000), Monetary::from(1_500_000), opened)
    ];

    let mut transactions = vec![
        transaction(TransactionType::Expense, 85_000, "Food & Beverages", "Makan siang di restoran", date(2024, 1, 15), "BCA - Tabungan"),
        transaction(TransactionType::Expense, 50_000, "Transportation", "Bensin motor", date(2024, 1, 15), "Cash"),
        transaction(TransactionType::Income, 8_500_000, "Salary", "Gaji bulan Januari", date(2024, 1, 1), "BCA - Tabungan"),
        transaction(TransactionType::Expense, 250_000, "Shopping", "Belanja groceries", date(2024, 1, 14), "Mandiri - Giro"),
        transaction(TransactionType::Expense, 150_000, "Bills & Utilities", "Listrik bulan ini", date(2024, 1, 10), "BCA - Tabungan"),
        transaction(TransactionType::Income, 2_000_000, "Freelance", "Project web development", date(2024, 1, 12), "Mandiri - Giro")
    ];

    // Newest date first, ties keep their listed order.
    transactions.sort_by(|a, b| b.date.cmp(&a.date));

    Snapshot { transactions, accounts }
}
