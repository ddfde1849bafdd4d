// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar math shared by all components.
//!
//! All values are plain calendar dates (`YYYY-MM-DD`) and calendar months
//! (`YYYY-MM`); there is no time-of-day or timezone anywhere in the system.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, Month, Weekday};

/// The wire format for calendar dates.
const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

fn invalid_month(value: &str) -> DomainError {
    DomainError::InvalidMonth(value.to_owned())
}

/// Parses a `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns an error if the string is not a valid calendar date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, &DATE_FORMAT).map_err(|e| DomainError::InvalidDate {
        value: value.to_owned(),
        reason: e.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Returns the weekday number of a weekday, `0 = Sunday` through `6 = Saturday`.
#[must_use]
pub const fn weekday_number(weekday: Weekday) -> u8 {
    weekday.number_days_from_sunday()
}

/// Converts a weekday number (`0 = Sunday` through `6 = Saturday`) back to a weekday.
///
/// # Errors
///
/// Returns an error if the number is outside `0..=6`.
pub const fn weekday_from_number(value: u8) -> Result<Weekday, DomainError> {
    match value {
        0 => Ok(Weekday::Sunday),
        1 => Ok(Weekday::Monday),
        2 => Ok(Weekday::Tuesday),
        3 => Ok(Weekday::Wednesday),
        4 => Ok(Weekday::Thursday),
        5 => Ok(Weekday::Friday),
        6 => Ok(Weekday::Saturday),
        _ => Err(DomainError::InvalidWeekday(value)),
    }
}

/// Returns the zero-based week-of-month index of a date.
///
/// The index is `(day_of_month - 1) / 7`: days 1-7 are week 0, days 8-14 are
/// week 1, and so on. This is the alignment key for copying a month's
/// availability onto the next month.
#[must_use]
pub const fn week_index(date: Date) -> u8 {
    (date.day() - 1) / 7
}

/// A calendar month (`YYYY-MM` semantics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    /// The calendar year.
    year: i32,
    /// The calendar month.
    month: Month,
}

impl MonthKey {
    /// Creates a new `MonthKey`.
    #[must_use]
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// Parses a `YYYY-MM` month string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid calendar month.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let (year_part, month_part) = value
            .split_once('-')
            .ok_or_else(|| invalid_month(value))?;
        if year_part.len() != 4 || month_part.len() != 2 {
            return Err(invalid_month(value));
        }
        let year: i32 = year_part.parse().map_err(|_| invalid_month(value))?;
        let month_number: u8 = month_part.parse().map_err(|_| invalid_month(value))?;
        let month: Month = Month::try_from(month_number).map_err(|_| invalid_month(value))?;
        Ok(Self { year, month })
    }

    /// Returns the calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the calendar month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the month immediately before this one.
    #[must_use]
    pub const fn previous(&self) -> Self {
        match self.month {
            Month::January => Self {
                year: self.year - 1,
                month: Month::December,
            },
            _ => Self {
                year: self.year,
                month: self.month.previous(),
            },
        }
    }

    /// Returns the month immediately after this one.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self.month {
            Month::December => Self {
                year: self.year + 1,
                month: Month::January,
            },
            _ => Self {
                year: self.year,
                month: self.month.next(),
            },
        }
    }

    /// Returns every date in the month, ascending.
    #[must_use]
    pub fn dates(&self) -> Vec<Date> {
        let len: u8 = time::util::days_in_year_month(self.year, self.month);
        (1..=len)
            .filter_map(|day| Date::from_calendar_date(self.year, self.month, day).ok())
            .collect()
    }

    /// Returns whether a date falls inside this month.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Returns the month as an inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the month cannot be represented as dates, which
    /// only happens at the edges of the supported year range.
    pub fn as_range(&self) -> Result<DateRange, DomainError> {
        let len: u8 = time::util::days_in_year_month(self.year, self.month);
        let start: Date = Date::from_calendar_date(self.year, self.month, 1)
            .map_err(|_| DomainError::InvalidMonth(self.to_string()))?;
        let end: Date = Date::from_calendar_date(self.year, self.month, len)
            .map_err(|_| DomainError::InvalidMonth(self.to_string()))?;
        DateRange::new(start, end)
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, u8::from(self.month))
    }
}

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The first date in the range.
    start: Date,
    /// The last date in the range.
    end: Date,
}

impl DateRange {
    /// Creates a new inclusive `DateRange`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is after `end`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the minimal range enclosing every date in the list.
    ///
    /// This is the replace window for span-scoped availability writes.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty.
    pub fn enclosing(dates: &[Date]) -> Result<Self, DomainError> {
        let start: Date = dates
            .iter()
            .min()
            .copied()
            .ok_or(DomainError::EmptyDateList)?;
        let end: Date = dates
            .iter()
            .max()
            .copied()
            .ok_or(DomainError::EmptyDateList)?;
        Ok(Self { start, end })
    }

    /// Returns the first date in the range.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last date in the range.
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns whether a date falls inside the range.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns every date in the range, ascending.
    #[must_use]
    pub fn days(&self) -> Vec<Date> {
        let mut out: Vec<Date> = Vec::new();
        let mut cursor: Date = self.start;
        while cursor <= self.end {
            out.push(cursor);
            match cursor.next_day() {
                Some(next) => cursor = next,
                None => break,
            }
        }
        out
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", format_date(self.start), format_date(self.end))
    }
}
