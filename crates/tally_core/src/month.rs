//! Year-month filter for the income list

use std::fmt;

use jiff::ToSpan;
use jiff::civil::Date;

use crate::error::{LedgerError, Result};

/// A calendar month, e.g. `2024-03`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i16,
    month: i8,
}

impl YearMonth {
    pub fn new(year: i16, month: i8) -> Result<Self> {
        Date::new(year, month, 1)
            .map(Self::of)
            .map_err(|_| LedgerError::InvalidMonth(format!("{year:04}-{month:02}")))
    }

    /// The month a date falls in
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i16 {
        self.year
    }

    pub fn month(&self) -> i8 {
        self.month
    }

    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    fn first_day(&self) -> Date {
        jiff::civil::date(self.year, self.month, 1)
    }

    /// The following month; saturates at the end of the supported range
    pub fn next(&self) -> Self {
        self.first_day()
            .checked_add(1.month())
            .map(Self::of)
            .unwrap_or(*self)
    }

    /// The preceding month; saturates at the start of the supported range
    pub fn previous(&self) -> Self {
        self.first_day()
            .checked_sub(1.month())
            .map(Self::of)
            .unwrap_or(*self)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || LedgerError::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i16 = year.parse().map_err(|_| invalid())?;
        let month: i8 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

/// Restricts the income list and month total.
///
/// An empty filter string selects every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(YearMonth),
}

impl MonthFilter {
    pub fn parse(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            Ok(MonthFilter::All)
        } else {
            s.parse().map(MonthFilter::Month)
        }
    }

    /// Filter for the month containing `today`
    pub fn current(today: Date) -> Self {
        MonthFilter::Month(YearMonth::of(today))
    }

    pub fn matches(&self, date: Date) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(month) => month.contains(date),
        }
    }

    pub fn next(&self) -> Self {
        match self {
            MonthFilter::All => MonthFilter::All,
            MonthFilter::Month(month) => MonthFilter::Month(month.next()),
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            MonthFilter::All => MonthFilter::All,
            MonthFilter::Month(month) => MonthFilter::Month(month.previous()),
        }
    }

    /// Label for headers; `All` shows as "all months"
    pub fn label(&self) -> String {
        match self {
            MonthFilter::All => "all months".to_string(),
            MonthFilter::Month(month) => month.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_parse_year_month() {
        let month: YearMonth = "2023-10".parse().unwrap();
        assert_eq!(month.year(), 2023);
        assert_eq!(month.month(), 10);
        assert_eq!(month.to_string(), "2023-10");

        assert!("2023-13".parse::<YearMonth>().is_err());
        assert!("2023-1".parse::<YearMonth>().is_err());
        assert!("202310".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_month_stepping_crosses_years() {
        let dec: YearMonth = "2023-12".parse().unwrap();
        assert_eq!(dec.next().to_string(), "2024-01");
        assert_eq!(dec.next().previous(), dec);

        let jan: YearMonth = "2024-01".parse().unwrap();
        assert_eq!(jan.previous().to_string(), "2023-12");
    }

    #[test]
    fn test_filter_matches() {
        let filter = MonthFilter::parse("2023-10").unwrap();
        assert!(filter.matches(date(2023, 10, 1)));
        assert!(filter.matches(date(2023, 10, 31)));
        assert!(!filter.matches(date(2023, 11, 1)));
        assert!(!filter.matches(date(2022, 10, 15)));

        let all = MonthFilter::parse("").unwrap();
        assert_eq!(all, MonthFilter::All);
        assert!(all.matches(date(1999, 1, 1)));
    }

    #[test]
    fn test_current_filter() {
        assert_eq!(
            MonthFilter::current(date(2024, 3, 17)),
            MonthFilter::parse("2024-03").unwrap()
        );
    }
}
