//! Date normalisation to `DD/MM/YYYY` and statement-period detection.
//!
//! Parsed components are formatted without calendar validation (`29/02/2023`
//! stays a row). Only text that does not parse is passed through as printed,
//! so a bad date never drops a transaction.

use ledgerlift_core::{StatementFormat, StatementYear};
use tracing::{debug, info};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

re!(re_fnb_period, r"Statement Period.*?(\d{4})");
re!(re_absa_period, r"(\d{1,2})\s+(\w+)\s+(\d{4})\s+to");
re!(re_sb_from, r"From:\s+\d{1,2}\s+(\w+)\s+(\d{2})");
re!(re_sb_to, r"To:\s+\d{1,2}\s+(\w+)\s+(\d{2})");

/// Month number (1-12) for a name or abbreviation; only the first three
/// letters are compared, case-insensitively.
pub fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name.chars().take(3).collect();
    if prefix.chars().count() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(&prefix))
        .map(|i| i as u32 + 1)
}

/// What the first page says about the statement period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatementPeriod {
    /// Calendar year of the period (its end year when it spans two).
    pub year: Option<i32>,
    pub start_month: Option<u32>,
    pub end_month: Option<u32>,
}

/// Read the statement period from first-page text (already glyph-decoded for ABSA).
pub fn detect_period(format: StatementFormat, first_page: &str) -> StatementPeriod {
    let period = match format {
        StatementFormat::Fnb => StatementPeriod {
            year: re_fnb_period()
                .captures(first_page)
                .and_then(|c| c[1].parse().ok()),
            ..Default::default()
        },
        StatementFormat::Absa => match re_absa_period().captures(first_page) {
            Some(c) => StatementPeriod {
                year: c[3].parse().ok(),
                start_month: month_number(&c[2]),
                end_month: None,
            },
            None => StatementPeriod::default(),
        },
        StatementFormat::StandardBank => {
            let from = re_sb_from().captures(first_page);
            let to = re_sb_to().captures(first_page);
            StatementPeriod {
                year: to
                    .as_ref()
                    .and_then(|c| c[2].parse::<i32>().ok())
                    .map(|yy| 2000 + yy),
                start_month: from.as_ref().and_then(|c| month_number(&c[1])),
                end_month: to.as_ref().and_then(|c| month_number(&c[1])),
            }
        }
    };

    info!(
        %format,
        year = ?period.year,
        start_month = ?period.start_month,
        end_month = ?period.end_month,
        "statement period"
    );
    period
}

/// Year resolution inputs for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearContext {
    pub period: StatementPeriod,
    pub requested: StatementYear,
}

impl YearContext {
    pub fn new(period: StatementPeriod, requested: StatementYear) -> Self {
        Self { period, requested }
    }

    /// Caller override first, then the detected period year.
    pub fn year(&self) -> Option<i32> {
        self.requested.fixed().or(self.period.year)
    }
}

/// Year a transaction falls in when the statement period ends in
/// `end_month` of `end_year`: months later in the calendar than the end
/// month belong to the previous year.
pub fn rollover_year(month: u32, end_month: u32, end_year: i32) -> i32 {
    if month > end_month { end_year - 1 } else { end_year }
}

fn format_dmy(day: u32, month: u32, year: i32) -> Option<String> {
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return None;
    }
    Some(format!("{day:02}/{month:02}/{year}"))
}

fn parse_slash(anchor: &str) -> Option<String> {
    let mut it = anchor.trim().split('/');
    let day: u32 = it.next()?.parse().ok()?;
    let month: u32 = it.next()?.parse().ok()?;
    let year: i32 = it.next()?.parse().ok()?;
    if it.next().is_some() {
        return None;
    }
    format_dmy(day, month, year)
}

fn parse_day_month(anchor: &str) -> Option<(u32, u32)> {
    let mut it = anchor.split_whitespace();
    let day: u32 = it.next()?.parse().ok()?;
    let month = month_number(it.next()?)?;
    Some((day, month))
}

fn parse_day_month_yy(anchor: &str, ctx: &YearContext) -> Option<String> {
    let (day, month) = parse_day_month(anchor)?;
    let printed: i32 = anchor.split_whitespace().nth(2)?.parse().ok()?;

    let year = match (ctx.period.end_month, ctx.year()) {
        (Some(end_month), Some(end_year)) => rollover_year(month, end_month, end_year),
        _ => ctx.requested.fixed().unwrap_or(2000 + printed),
    };
    format_dmy(day, month, year)
}

/// ABSA: `D/MM/YYYY` already carries its year.
pub fn normalize_slash_date(anchor: &str) -> String {
    parse_slash(anchor).unwrap_or_else(|| {
        debug!(anchor, "unparseable date passed through");
        anchor.to_string()
    })
}

/// FNB: `DD Mon` completed with the document year.
pub fn normalize_day_month(anchor: &str, year: Option<i32>) -> String {
    parse_day_month(anchor)
        .zip(year)
        .and_then(|((day, month), year)| format_dmy(day, month, year))
        .unwrap_or_else(|| {
            debug!(anchor, ?year, "date left as printed");
            anchor.to_string()
        })
}

/// Standard Bank: `DD Mon YY`. When the period end month is known the year
/// follows the rollover rule; otherwise the caller's year, then the printed
/// two-digit year.
pub fn normalize_day_month_yy(anchor: &str, ctx: &YearContext) -> String {
    parse_day_month_yy(anchor, ctx).unwrap_or_else(|| {
        debug!(anchor, "unparseable date passed through");
        anchor.to_string()
    })
}
