use anyhow::{Context, Result};
use ledgerlift_core::{ConvertOptions, StatementYear};
use ledgerlift_export::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::ensure_ledgerlift_home;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertSection {
    pub invert_amounts: bool,
    /// "auto" or a four-digit year.
    pub statement_year: StatementYear,
    pub output_format: OutputFormat,
    /// Also write one file holding every document's transactions.
    pub combined: bool,
}

impl ConvertSection {
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions::new(self.invert_amounts, self.statement_year)
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_ledgerlift_home()?.join("config.toml"))
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.convert.options(), ConvertOptions::default());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config {
            convert: ConvertSection {
                invert_amounts: true,
                statement_year: StatementYear::Fixed(2024),
                output_format: OutputFormat::Json,
                combined: true,
            },
        };
        save_config_to(&cfg, &path).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), cfg);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[convert]\nstatement_year = \"2023\"\n").unwrap();
        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.convert.statement_year, StatementYear::Fixed(2023));
        assert_eq!(cfg.convert.output_format, OutputFormat::Csv);
        assert!(!cfg.convert.invert_amounts);
    }

    #[test]
    fn test_bad_year_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[convert]\nstatement_year = \"24\"\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid statement year '24'"));
    }
}
