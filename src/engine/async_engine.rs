use crate::engine::SubmissionRecord;
use crate::models::TransactionType;
use crate::reconciliation::{success_message, BalanceCheck, Ledger};
use crate::storage::Storage;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::BufReader;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, warn};

/// Counts of what happened to the submissions of one run.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct EngineReport {
    pub accepted: usize,
    /// Rows that parsed but failed validation or could not be committed.
    pub rejected: usize,
    /// Rows that could not be parsed and never reached the ledger.
    pub malformed: usize
}

/// Feeds form submissions from a CSV file into a ledger, in file order.
pub struct SubmissionEngine {
    backpressure: usize,
    balance_check: BalanceCheck
}

impl Default for SubmissionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionEngine {
    pub fn new() -> Self {
        Self {
            backpressure: 256,
            balance_check: BalanceCheck::Enforce
        }
    }

    /// Bounds how many parsed rows may wait for the ledger.
    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    pub fn with_balance_check(mut self, balance_check: BalanceCheck) -> Self {
        self.balance_check = balance_check;
        self
    }

    /// Reads the CSV on a blocking thread and applies each row to `ledger`.
    ///
    /// A missing file is logged and yields an empty report; malformed rows
    /// are logged, skipped, and counted.
    pub async fn run<S: Storage>(&self, ledger: &mut Ledger<S>, path: &str) -> anyhow::Result<EngineReport> {
        let (sender, receiver) = mpsc::channel::<SubmissionRecord>(self.backpressure);
        let csv_handle = self.spawn_csv_reader(path.to_string(), sender);
        let mut report = self.process_submissions(ledger, receiver).await;

        match csv_handle.await {
            Ok(malformed) => report.malformed = malformed,
            Err(error) => error!("CSV ingestion failed: {error}")
        }

        Ok(report)
    }

    fn spawn_csv_reader(&self, path: String, sender: mpsc::Sender<SubmissionRecord>) -> JoinHandle<usize> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening CSV at path: {path} | {error}");
                    return 0;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            let mut malformed = 0;

            for result in reader.deserialize::<SubmissionRecord>() {
                match result {
                    Ok(record) => {
                        if sender.blocking_send(record).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        malformed += 1;
                        error!("CSV deserialization error: {error}");
                    }
                }
            }

            malformed
        })
    }

    // The ledger has a single writer, so rows are applied strictly one after another.
    async fn process_submissions<S: Storage>(&self, ledger: &mut Ledger<S>, mut receiver: mpsc::Receiver<SubmissionRecord>) -> EngineReport {
        let mut report = EngineReport::default();

        while let Some(record) = receiver.recv().await {
            let result = match record.transaction_type {
                TransactionType::Income => ledger.submit_income(&record.income_form()),
                TransactionType::Expense => ledger.submit_expense(&record.expense_form(), self.balance_check)
            };

            match result {
                Ok(transaction) => {
                    report.accepted += 1;
                    debug!("{} [{}] for bank [{}]", success_message(transaction.transaction_type), transaction.id, record.bank);
                }
                Err(error) => {
                    report.rejected += 1;
                    warn!("{} [{}] for bank [{}]: {error}", error.user_message(record.transaction_type), record.description, record.bank);
                }
            }
        }

        report
    }
}
