use std::process::Command;
use std::path::Path;
use std::collections::HashMap;
use anyhow::{anyhow, Result};

fn run_on(sample: &str, extra_args: &[&str]) -> Result<HashMap<String, Vec<String>>> {
    let binary_path = env!("CARGO_BIN_EXE_finance-ledger");
    let sample_path = Path::new("samples").join(sample);

    let output = Command::new(binary_path)
        .arg(sample_path)
        .args(extra_args)
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some("name,balance,total_income,total_expense,currency"));

    let mut results = HashMap::new();

    for line in lines {
        let fields: Vec<String> = line.split(',').map(str::to_string).collect();

        assert_eq!(fields.len(), 5);

        results.insert(fields[0].clone(), fields[1..].to_vec());
    }

    Ok(results)
}

#[test]
fn test_cli_correctly_processes_sample() -> Result<()> {
    let results = run_on("sample.csv", &[])?;

    assert_eq!(results.len(), 2);

    for fields in results.values() {
        let _: f64 = fields[0].parse()?;
        let _: f64 = fields[1].parse()?;
        let _: f64 = fields[2].parse()?;
        assert_eq!(fields[3], "IDR");
    }

    Ok(())
}

#[test]
fn test_cli_outputs_correct_final_balances() -> Result<()> {
    let results = run_on("fixed.csv", &["error"])?;

    let bca = results.get("BCA").ok_or_else(|| anyhow!("BCA missing from output"))?;

    assert_eq!(bca[0], "4750000.00");
    assert_eq!(bca[1], "5000000.00");
    assert_eq!(bca[2], "250000.00");

    let new_bank = results.get("NewBank").ok_or_else(|| anyhow!("NewBank missing from output"))?;

    assert_eq!(new_bank[0], "1500000.00");
    assert_eq!(new_bank[1], "1500000.00");
    assert_eq!(new_bank[2], "0.00");

    Ok(())
}

#[test]
fn test_cli_starts_from_demo_data_when_seeded() -> Result<()> {
    let results = run_on("fixed.csv", &["error", "seed"])?;

    assert_eq!(results.len(), 4);

    let bca_tabungan = results.get("BCA - Tabungan").ok_or_else(|| anyhow!("seeded account missing from output"))?;

    assert_eq!(bca_tabungan[0], "5000000.00");
    assert_eq!(bca_tabungan[1], "8500000.00");

    Ok(())
}

#[test]
fn test_cli_without_arguments_prints_usage_and_fails() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_finance-ledger")).output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Usage"));

    Ok(())
}
