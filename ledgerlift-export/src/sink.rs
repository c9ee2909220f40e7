//! Transaction sinks. Rows are written verbatim, in the order given.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use ledgerlift_core::{ConfigError, Transaction};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const CSV_HEADER: [&str; 3] = ["Date", "Description", "Amount"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Csv, OutputFormat::Json];

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|f| f.extension().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownOutputFormat {
                requested: s.to_string(),
                known: OutputFormat::ALL
                    .iter()
                    .map(|f| f.extension())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

fn write_csv<W: Write>(txns: &[Transaction], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER).context("writing CSV header")?;
    for txn in txns {
        wtr.write_record([&txn.date, &txn.description, &txn.amount])
            .context("writing CSV row")?;
    }
    wtr.flush().context("flushing CSV output")?;
    Ok(())
}

fn write_json<W: Write>(txns: &[Transaction], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, txns).context("writing JSON")?;
    writeln!(writer)?;
    Ok(())
}

/// Serialize `txns` into `writer`.
pub fn write_transactions<W: Write>(format: OutputFormat, txns: &[Transaction], writer: W) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(txns, writer),
        OutputFormat::Json => write_json(txns, writer),
    }
}

/// Write `txns` to `path`, creating parent directories as needed.
pub fn write_transactions_to_path(
    format: OutputFormat,
    txns: &[Transaction],
    path: &Path,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_transactions(format, txns, &mut out)
        .with_context(|| format!("write {}", path.display()))?;
    out.flush().with_context(|| format!("write {}", path.display()))?;

    info!(path = %path.display(), rows = txns.len(), %format, "output written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new("05/06/2024", "POS PURCHASE WOOLWORTHS", "-250.00"),
            Transaction::new("07/06/2024", "SALARY", "12,000.00"),
        ]
    }

    #[test]
    fn test_csv_output() {
        let mut buf = Vec::new();
        write_transactions(OutputFormat::Csv, &sample(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Date,Description,Amount\n\
             05/06/2024,POS PURCHASE WOOLWORTHS,-250.00\n\
             07/06/2024,SALARY,\"12,000.00\"\n"
        );
    }

    #[test]
    fn test_csv_header_only_when_empty() {
        let mut buf = Vec::new();
        write_transactions(OutputFormat::Csv, &[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Date,Description,Amount\n");
    }

    #[test]
    fn test_json_output() {
        let mut buf = Vec::new();
        write_transactions(OutputFormat::Json, &sample(), &mut buf).unwrap();
        let parsed: Vec<Transaction> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, sample());
        assert!(String::from_utf8(buf).unwrap().contains("\"amount\": \"12,000.00\""));
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);

        let err = "xlsx".parse::<OutputFormat>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownOutputFormat {
                requested: "xlsx".to_string(),
                known: "csv, json".to_string(),
            }
        );
    }
}
