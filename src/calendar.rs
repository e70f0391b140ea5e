//! Month lengths, weekdays and conversions for both calendar systems.
//!
//! Gregorian fields are read from [`jiff::civil::Date`]. Jalali years
//! follow ICU's Persian calendar (`calendrical_calculations::persian`),
//! joined to jiff through the Rata Die day count, where day 1 is
//! 0001-01-01 in the proleptic Gregorian calendar.

use crate::CalendarError;
use crate::consts::{ESFAND_DAYS_LEAP, GREGORIAN_MONTH_DAYS, JALALI_MONTH_DAYS, LAST_MONTH};
use crate::types::{CalendarDay, CalendarKind};
use calendrical_calculations::helpers::I32CastError;
use calendrical_calculations::persian;
use calendrical_calculations::rata_die::RataDie;
use jiff::Span;
use jiff::civil::Date;

/// Rata Die 1.
const RD_EPOCH: Date = Date::constant(1, 1, 1);

/// First day of a Gregorian month, if jiff can represent it.
fn gregorian_month_start(year: i32, month: u8) -> Option<Date> {
    if month > LAST_MONTH {
        return None;
    }
    let year = i16::try_from(year).ok()?;
    let month = i8::try_from(month + 1).ok()?;
    Date::new(year, month, 1).ok()
}

fn to_rata_die(date: Date) -> RataDie {
    RataDie::new(date.duration_since(RD_EPOCH).as_hours() / 24 + 1)
}

fn from_rata_die(rd: RataDie) -> Option<Date> {
    let span = Span::new().try_days(rd.to_i64_date() - 1).ok()?;
    RD_EPOCH.checked_add(span).ok()
}

/// Returns true if `year` is a leap year in the given calendar.
///
/// Gregorian years outside jiff's range are never leap years.
pub fn is_leap_year(year: i32, kind: CalendarKind) -> bool {
    match kind {
        CalendarKind::Gregorian => gregorian_month_start(year, 0).is_some_and(Date::in_leap_year),
        CalendarKind::Jalali => persian::is_leap_year(year),
    }
}

/// Number of days in the 0-based `month` of `year`.
///
/// `month` must already be normalized into `0..=11`.
pub fn month_length(year: i32, month: u8, kind: CalendarKind) -> u8 {
    let index = usize::from(month.min(LAST_MONTH));
    match kind {
        CalendarKind::Gregorian => gregorian_month_start(year, month)
            .map_or(GREGORIAN_MONTH_DAYS[index], |first| first.days_in_month().unsigned_abs()),
        CalendarKind::Jalali if month == LAST_MONTH && persian::is_leap_year(year) => {
            ESFAND_DAYS_LEAP
        },
        CalendarKind::Jalali => JALALI_MONTH_DAYS[index],
    }
}

/// Gregorian civil date of (`year`, 0-based `month`, `day`) under `kind`.
///
/// `day` is not checked against the month length, so an overflowing day
/// lands in the following month.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the month is not `0..=11` or
/// the date falls outside jiff's range.
pub fn to_gregorian(
    year: i32,
    month: u8,
    day: u8,
    kind: CalendarKind,
) -> Result<Date, CalendarError> {
    let out_of_range = || CalendarError::OutOfRange { year, month, day };
    if month > LAST_MONTH {
        return Err(out_of_range());
    }

    let date = match kind {
        CalendarKind::Gregorian => gregorian_month_start(year, month).and_then(|first| {
            let span = Span::new().try_days(i64::from(day) - 1).ok()?;
            first.checked_add(span).ok()
        }),
        CalendarKind::Jalali => {
            from_rata_die(persian::fixed_from_fast_persian(year, month + 1, day))
        },
    };
    date.ok_or_else(out_of_range)
}

/// Reads a Gregorian civil date as (year, 0-based month, day) under `kind`.
pub fn from_gregorian(date: Date, kind: CalendarKind) -> (i32, u8, u8) {
    match kind {
        // jiff guarantees month 1..=12 and day 1..=31.
        CalendarKind::Gregorian => (
            i32::from(date.year()),
            date.month().unsigned_abs() - 1,
            date.day().unsigned_abs(),
        ),
        CalendarKind::Jalali => match persian::fast_persian_from_fixed(to_rata_die(date)) {
            Ok((year, month, day)) => (year, month - 1, day),
            // Unreachable within jiff's range; saturate like ICU does.
            Err(I32CastError::BelowMin) => (i32::MIN, 0, 1),
            Err(I32CastError::AboveMax) => {
                (i32::MAX, LAST_MONTH, JALALI_MONTH_DAYS[usize::from(LAST_MONTH)])
            },
        },
    }
}

/// Weekday of the given day, 0 = Sunday .. 6 = Saturday.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the day has no Gregorian date
/// in jiff's range.
pub fn weekday(year: i32, month: u8, day: u8, kind: CalendarKind) -> Result<u8, CalendarError> {
    to_gregorian(year, month, day, kind)
        .map(|date| date.weekday().to_sunday_zero_offset().unsigned_abs())
}

/// Weekday of the first day of the 0-based `month`.
///
/// # Errors
/// Same as [`weekday`].
pub fn first_weekday(year: i32, month: u8, kind: CalendarKind) -> Result<u8, CalendarError> {
    weekday(year, month, 1, kind)
}

/// The month before (`year`, `month`), wrapping into the previous year.
pub const fn previous_month(year: i32, month: u8) -> (i32, u8) {
    if month == 0 {
        (year - 1, LAST_MONTH)
    } else {
        (year, month - 1)
    }
}

/// The month after (`year`, `month`), wrapping into the next year.
pub const fn next_month(year: i32, month: u8) -> (i32, u8) {
    if month >= LAST_MONTH {
        (year + 1, 0)
    } else {
        (year, month + 1)
    }
}

/// Every day of the 0-based `month`, in order.
pub fn month_days(year: i32, month: u8, kind: CalendarKind) -> Vec<CalendarDay> {
    (1..=month_length(year, month, kind))
        .map(|number| CalendarDay::new(year, month, number))
        .collect()
}
