//! Tenure parsing
//!
//! Turns free-form period strings such as `"June 2025 – Present"` or
//! `"2017 – 2020"` into elapsed-duration labels like `"1Y 2M"`.
//!
//! Each side of a period is classified into a [`ParsedDate`] by token count:
//! two tokens are `Month Year`, one token is a bare year (or `Present`),
//! anything else is rejected. Rejections surface as [`TenureError`] from the
//! `try_*` functions and as an empty label from [`compute_tenure`].

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::TenureError;

/// Literal used for an open-ended period
pub const PRESENT: &str = "Present";

/// Characters accepted between the start and end of a period
const SEPARATORS: [char; 3] = ['-', '–', '—'];

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// A calendar month, the resolution tenure is computed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    /// 1-based month
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Whole months between `self` and `later`, negative when `later` is earlier
    pub fn months_until(self, later: YearMonth) -> i64 {
        (i64::from(later.year) - i64::from(self.year)) * 12 + (i64::from(later.month) - i64::from(self.month))
    }
}

/// Outcome of parsing one side of a period
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedDate {
    /// `"<Month> <Year>"`, day fixed to the 1st
    MonthYear { year: i32, month: u32 },
    /// `"<Year>"`, read as January of that year
    YearOnly { year: i32 },
    /// `"Present"`, resolved against the evaluation date
    Present,
    /// Anything else
    Invalid(TenureError),
}

impl ParsedDate {
    /// Classify a single date by its whitespace-separated tokens
    pub fn parse(text: &str) -> Self {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Self::Invalid(TenureError::EmptyDate),
            [word] if word.eq_ignore_ascii_case(PRESENT) => Self::Present,
            [year] => match parse_year(year) {
                Ok(year) => Self::YearOnly { year },
                Err(e) => Self::Invalid(e),
            },
            [month, year] => match (parse_month(month), parse_year(year)) {
                (Some(month), Ok(year)) => Self::MonthYear { year, month },
                (None, _) => Self::Invalid(TenureError::UnknownMonth(month.to_string())),
                (_, Err(e)) => Self::Invalid(e),
            },
            other => Self::Invalid(TenureError::TokenCount {
                tokens: other.len(),
                text: text.trim().to_string(),
            }),
        }
    }

    /// Resolve to a calendar month, using `today` for `Present`
    pub fn resolve(&self, today: NaiveDate) -> Result<YearMonth, TenureError> {
        match self {
            Self::MonthYear { year, month } => Ok(YearMonth::new(*year, *month)),
            Self::YearOnly { year } => Ok(YearMonth::new(*year, 1)),
            Self::Present => Ok(YearMonth::of(today)),
            Self::Invalid(e) => Err(e.clone()),
        }
    }
}

fn parse_month(token: &str) -> Option<u32> {
    let name = token.trim_end_matches('.').to_lowercase();
    if name == "sept" {
        return Some(9);
    }
    MONTH_NAMES
        .iter()
        .position(|full| *full == name || (name.len() == 3 && full.starts_with(name.as_str())))
        .map(|i| i as u32 + 1)
}

fn parse_year(token: &str) -> Result<i32, TenureError> {
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TenureError::InvalidYear(token.to_string()));
    }
    token.parse().map_err(|_| TenureError::InvalidYear(token.to_string()))
}

/// Split a period into its trimmed start and end text
///
/// Splits on the first hyphen, en-dash or em-dash. A missing or empty end
/// becomes [`PRESENT`].
pub fn split_period(text: &str) -> (&str, &str) {
    let (start, end) = match text.find(SEPARATORS) {
        Some(pos) => {
            let mut rest = text[pos..].chars();
            rest.next();
            (text[..pos].trim(), rest.as_str().trim())
        }
        None => (text.trim(), ""),
    };
    let end = if end.is_empty() { PRESENT } else { end };
    (start, end)
}

/// A parsed `"<Start> – <End>"` range with both sides known to be valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    start: ParsedDate,
    end: ParsedDate,
}

impl Period {
    /// Parse a period string, rejecting it if either side is invalid
    pub fn parse(text: &str) -> Result<Self, TenureError> {
        debug!(%text, "Period::parse: called");
        if text.trim().is_empty() {
            return Err(TenureError::Empty);
        }
        let (start, end) = split_period(text);
        let start = ParsedDate::parse(start);
        let end = ParsedDate::parse(end);
        for side in [&start, &end] {
            if let ParsedDate::Invalid(e) = side {
                return Err(e.clone());
            }
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &ParsedDate {
        &self.start
    }

    pub fn end(&self) -> &ParsedDate {
        &self.end
    }

    /// Whether the period runs up to the evaluation date
    pub fn is_ongoing(&self) -> bool {
        self.end == ParsedDate::Present
    }

    /// Months covered as of `today`, counting the start month and never less than one
    pub fn months_at(&self, today: NaiveDate) -> u32 {
        // Both sides were validated in parse
        let (Ok(start), Ok(end)) = (self.start.resolve(today), self.end.resolve(today)) else {
            return 1;
        };
        let months = start.months_until(end) + 1;
        u32::try_from(months.max(1)).unwrap_or(u32::MAX)
    }

    pub fn tenure_at(&self, today: NaiveDate) -> Tenure {
        Tenure::from_months(self.months_at(today))
    }
}

/// An elapsed duration in whole years and months
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tenure {
    years: u32,
    months: u32,
}

impl Tenure {
    /// Build from a total month count, floored at one month
    pub fn from_months(total: u32) -> Self {
        let total = total.max(1);
        Self {
            years: total / 12,
            months: total % 12,
        }
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

impl fmt::Display for Tenure {
    /// Renders `"<Y>Y <M>M"`, dropping zero terms but never rendering nothing
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(2);
        if self.years > 0 {
            parts.push(format!("{}Y", self.years));
        }
        if self.months > 0 {
            parts.push(format!("{}M", self.months));
        } else if self.years == 0 {
            parts.push("1M".to_string());
        }
        write!(f, "{}", parts.join(" ").trim())
    }
}

/// Parse `period` and compute its tenure as of `today`
pub fn try_tenure_at(period: &str, today: NaiveDate) -> Result<Tenure, TenureError> {
    Ok(Period::parse(period)?.tenure_at(today))
}

/// Tenure label for `period` as of `today`, or `""` if it cannot be parsed
pub fn compute_tenure_at(period: &str, today: NaiveDate) -> String {
    match try_tenure_at(period, today) {
        Ok(tenure) => tenure.to_string(),
        Err(TenureError::Empty) => String::new(),
        Err(e) => {
            warn!(%period, error = %e, "Rejected period, tenure label omitted");
            String::new()
        }
    }
}

/// Tenure label for `period` as of the local date, or `""` if it cannot be parsed
pub fn compute_tenure(period: &str) -> String {
    compute_tenure_at(period, Local::now().date_naive())
}
