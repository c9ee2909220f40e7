use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use ledgerlift_core::StatementYear;
use ledgerlift_export::OutputFormat;
use ledgerlift_ingest::{PageSource, identify};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod pdf;
mod run;
mod state;

use crate::run::{ConvertPlan, run_convert};

#[derive(Parser, Debug)]
#[command(
    name = "ledgerlift",
    version,
    about = "Convert FNB, ABSA and Standard Bank statements into transaction lists"
)]
struct Cli {
    /// Debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert statements (.pdf via pdftotext, anything else read as extracted text)
    Convert {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Flip the sign of every amount
        #[arg(long, conflicts_with = "no_invert")]
        invert: bool,

        /// Keep amount signs as printed, even if the config inverts them
        #[arg(long)]
        no_invert: bool,

        /// "auto" or a four-digit year for dates printed without one
        #[arg(long)]
        year: Option<StatementYear>,

        /// Output format: csv or json
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Directory for output files (default: current directory)
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Also write every document's transactions to one combined file
        #[arg(long, conflicts_with = "no_combined")]
        combined: bool,

        /// Skip the combined file, even if the config asks for it
        #[arg(long)]
        no_combined: bool,
    },

    /// Print the detected statement format and period of a file
    Detect { file: PathBuf },

    /// Manage ~/.ledgerlift/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config (leaves an existing file alone)
    Init,
    /// Print the effective config
    Show,
}

/// An `--x`/`--no-x` pair overrides the config value; neither keeps it.
fn flag_override(on: bool, off: bool, configured: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => configured,
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Convert {
            files,
            invert,
            no_invert,
            year,
            format,
            out_dir,
            combined,
            no_combined,
        } => {
            let mut cfg = config::load_config()?.convert;
            cfg.invert_amounts = flag_override(invert, no_invert, cfg.invert_amounts);
            cfg.combined = flag_override(combined, no_combined, cfg.combined);
            if let Some(year) = year {
                cfg.statement_year = year;
            }
            if let Some(format) = format {
                cfg.output_format = format;
            }

            let plan = ConvertPlan {
                files,
                options: cfg.options(),
                output_format: cfg.output_format,
                out_dir,
                combined: cfg.combined,
            };

            let report = run_convert(&plan).await;

            for (path, conversion) in &report.converted {
                println!(
                    "{}: {} ({} transactions)",
                    path.display(),
                    conversion.format,
                    conversion.transactions.len()
                );
            }
            for path in &report.written {
                println!("Wrote {}", path.display());
            }
            for (path, err) in &report.failed {
                eprintln!("Failed: {}: {err:#}", path.display());
            }

            if !report.failed.is_empty() {
                bail!(
                    "{} of {} documents failed",
                    report.failed.len(),
                    plan.files.len()
                );
            }
        }

        Command::Detect { file } => {
            let pages = pdf::source_for(&file)
                .pages()
                .with_context(|| format!("reading {}", file.display()))?;
            let (format, period) = identify(&pages);

            println!("Format: {format}");
            match period.year {
                Some(y) => println!("Statement year: {y}"),
                None => println!("Statement year: not found"),
            }
            if let Some(m) = period.start_month {
                println!("Start month: {m}");
            }
            if let Some(m) = period.end_month {
                println!("End month: {m}");
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}
