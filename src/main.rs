use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use finance_ledger::engine::SubmissionEngine;
use finance_ledger::reconciliation::Ledger;
use finance_ledger::reports::Summary;
use finance_ledger::storage::{MemoryStorage, Storage};
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: finance-ledger [submissions].csv [log_level:optional] [seed:optional] > [accounts].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        eprintln!("Pass 'seed' as the third argument to start from the demo accounts and transactions");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);
    let seeded = args.get(3).is_some_and(|s| s.eq_ignore_ascii_case("seed"));

    setup_logging(log_level);

    let storage = Arc::new(if seeded { MemoryStorage::seeded() } else { MemoryStorage::new() });
    let mut ledger = Ledger::load(storage)?;
    let engine = SubmissionEngine::new();

    let timer = Instant::now();
    let report = engine.run(&mut ledger, path).await?;
    let duration = timer.elapsed();

    info!(
        "Processed [{}] accepted, [{}] rejected and [{}] malformed submissions in: {duration:?}",
        report.accepted, report.rejected, report.malformed
    );

    let summary = Summary::of(ledger.transactions().iter());
    info!(
        "Income [{}], expense [{}], net [{}], bank balance [{}]",
        summary.total_income, summary.total_expense, summary.net_balance, ledger.accounts().total_balance()
    );

    for transaction in ledger.unreconciled() {
        warn!("Transaction [{}] names bank [{}] which has no account", transaction.id, transaction.bank_name.as_deref().unwrap_or_default());
    }

    write_results_to_stdout(&ledger)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the account table, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_results_to_stdout<S: Storage>(ledger: &Ledger<S>) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "name,balance,total_income,total_expense,currency")?;

    for account in ledger.accounts().accounts() {
        writeln!(
            output,
            "{},{},{},{},{}",
            account.name,
            account.balance,
            account.total_income,
            account.total_expense,
            account.currency
        )?;
    }

    output.flush()?;

    Ok(())
}
