//! Gregorian and Jalali date formatting, parsing and month grids.
//!
//! Dates are [`jiff::civil::DateTime`] values; a [`CalendarKind`] decides
//! which calendar their fields are read and written in. Months are 0-based
//! throughout, except in rendered text.

#[macro_use]
mod logging;

mod calendar;
mod consts;
mod digits;
mod format;
mod grid;
mod locale;
mod parse;
mod prelude;
mod types;

pub use calendar::{
    first_weekday, from_gregorian, is_leap_year, month_days, month_length, next_month,
    previous_month, to_gregorian, weekday,
};
pub use consts::{DEFAULT_BASE_DATE, GRID_CELLS};
pub use digits::{to_ascii_digits, to_local_digits};
pub use format::{FieldId, FieldToken, Format, FormatToken, compile_format, render};
pub use grid::calendar_grid;
pub use jiff::civil::{self, Date, DateTime};
pub use locale::{
    ExternalLocale, Locale, Localize, ResolvedLocale, Width, adapt_external_locale,
    resolve_locale,
};
pub use parse::{ParseResult, parse};
pub use types::{CalendarDay, CalendarKind, DateParts};

/// Errors from the fallible conversions of this crate.
///
/// Formatting and parsing never fail; see [`ParseResult`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The fields do not name a date that can be represented.
    #[error("Date out of range: {year}-{month}-{day} (0-based month)")]
    OutOfRange { year: i32, month: u8, day: u8 },

    /// A calendar name other than `Gregorian` or `Jalali`.
    #[error("Unknown calendar: {0}")]
    UnknownCalendar(String),
}
