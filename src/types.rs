use crate::prelude::*;
use crate::{CalendarError, calendar};
use jiff::civil::{Date, DateTime, Time};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The calendar system a format, locale or grid is expressed in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub enum CalendarKind {
    #[default]
    Gregorian,
    Jalali,
}

impl FromStr for CalendarKind {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Gregorian" | "gregorian" => Ok(Self::Gregorian),
            "Jalali" | "jalali" => Ok(Self::Jalali),
            other => Err(CalendarError::UnknownCalendar(other.to_owned())),
        }
    }
}

/// One cell of a month view.
///
/// `month` is 0-based and `number` is the 1-based day of the month, both
/// in the calendar the day was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month + 1", "number")]
pub struct CalendarDay {
    pub year: i32,
    pub month: u8,
    pub number: u8,
}

impl CalendarDay {
    pub const fn new(year: i32, month: u8, number: u8) -> Self {
        Self {
            year,
            month,
            number,
        }
    }

    /// Weekday of this day, 0 = Sunday .. 6 = Saturday
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the day cannot be represented.
    pub fn weekday(&self, kind: CalendarKind) -> Result<u8, CalendarError> {
        calendar::weekday(self.year, self.month, self.number, kind)
    }

    /// Converts the cell back into a Gregorian civil date.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the day cannot be represented.
    pub fn to_date(&self, kind: CalendarKind) -> Result<Date, CalendarError> {
        calendar::to_gregorian(self.year, self.month, self.number, kind)
    }
}

/// A date-time broken down into the fields of one calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateParts {
    pub year: i32,
    /// 0-based month
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl DateParts {
    /// Midnight on the given day.
    pub const fn from_day(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        }
    }

    /// Reads the fields of `dt` under `kind`.
    pub fn from_datetime(dt: DateTime, kind: CalendarKind) -> Self {
        let (year, month, day) = calendar::from_gregorian(dt.date(), kind);
        // jiff guarantees a valid time of day.
        Self {
            year,
            month,
            day,
            hour: dt.hour().unsigned_abs(),
            minute: dt.minute().unsigned_abs(),
            second: dt.second().unsigned_abs(),
            millisecond: dt.millisecond().unsigned_abs(),
        }
    }

    /// Builds the Gregorian civil date-time these fields denote under `kind`.
    ///
    /// A day past the end of the month rolls into the following month.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` when the month is not 0..=11, the
    /// time of day is invalid, or the date falls outside jiff's range.
    pub fn to_datetime(&self, kind: CalendarKind) -> Result<DateTime, CalendarError> {
        let date = calendar::to_gregorian(self.year, self.month, self.day, kind)?;

        let out_of_range = || CalendarError::OutOfRange {
            year: self.year,
            month: self.month,
            day: self.day,
        };
        let narrow = |v: u8| i8::try_from(v).map_err(|_| out_of_range());
        let time = Time::new(
            narrow(self.hour)?,
            narrow(self.minute)?,
            narrow(self.second)?,
            i32::from(self.millisecond) * 1_000_000,
        )
        .map_err(|_| out_of_range())?;
        Ok(date.to_datetime(time))
    }
}
