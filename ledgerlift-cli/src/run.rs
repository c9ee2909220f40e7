//! Multi-document conversion: one blocking task per document, outputs
//! written in input order once every document is done.

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use ledgerlift_core::{ConvertOptions, Transaction};
use ledgerlift_export::{
    OutputFormat, combined_output_name, document_output_name, write_transactions_to_path,
};
use ledgerlift_ingest::{Conversion, convert};
use std::path::{Path, PathBuf};
use tracing::{error, warn};

use crate::pdf::source_for;

#[derive(Debug, Clone)]
pub struct ConvertPlan {
    pub files: Vec<PathBuf>,
    pub options: ConvertOptions,
    pub output_format: OutputFormat,
    pub out_dir: PathBuf,
    pub combined: bool,
}

/// What happened to each input, in input order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, anyhow::Error)>,
    pub converted: Vec<(PathBuf, Conversion)>,
}

/// Parse every file concurrently. Results come back in input order.
pub async fn convert_documents(
    files: &[PathBuf],
    options: ConvertOptions,
) -> Vec<(PathBuf, Result<Conversion>)> {
    let handles: Vec<_> = files
        .iter()
        .cloned()
        .map(|path| {
            let handle = tokio::task::spawn_blocking({
                let path = path.clone();
                move || convert(source_for(&path).as_ref(), &options)
            });
            (path, handle)
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (path, handle) in handles {
        let result = match handle.await {
            Ok(result) => result.with_context(|| format!("converting {}", path.display())),
            Err(join) => Err(anyhow!("conversion task for {} failed: {join}", path.display())),
        };
        results.push((path, result));
    }
    results
}

fn write_output(path: &Path, format: OutputFormat, txns: &[Transaction]) -> Result<PathBuf> {
    write_transactions_to_path(format, txns, path)?;
    Ok(path.to_path_buf())
}

pub async fn run_convert(plan: &ConvertPlan) -> RunReport {
    let mut report = RunReport::default();

    for (path, result) in convert_documents(&plan.files, plan.options).await {
        match result {
            Ok(conversion) => {
                if conversion.transactions.is_empty() {
                    warn!(file = %path.display(), format = %conversion.format, "no transactions found");
                }
                let out = plan
                    .out_dir
                    .join(document_output_name(&path, plan.output_format));
                match write_output(&out, plan.output_format, &conversion.transactions) {
                    Ok(written) => {
                        report.written.push(written);
                        report.converted.push((path, conversion));
                    }
                    Err(err) => {
                        error!(file = %path.display(), "{err:#}");
                        report.failed.push((path, err));
                    }
                }
            }
            Err(err) => {
                error!(file = %path.display(), "{err:#}");
                report.failed.push((path, err));
            }
        }
    }

    if plan.combined && plan.files.len() > 1 && !report.converted.is_empty() {
        let all: Vec<Transaction> = report
            .converted
            .iter()
            .flat_map(|(_, c)| c.transactions.iter().cloned())
            .collect();
        let out = plan.out_dir.join(combined_output_name(
            Local::now().naive_local(),
            plan.output_format,
        ));
        match write_output(&out, plan.output_format, &all) {
            Ok(written) => report.written.push(written),
            Err(err) => {
                error!("{err:#}");
                report.failed.push((out, err));
            }
        }
    }

    report
}
