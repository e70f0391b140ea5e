use jiff::civil::{DateTime, datetime};

/// Number of months in both calendars
pub(crate) const MONTHS_PER_YEAR: u8 = 12;

/// Index of the last month (months are 0-based)
pub(crate) const LAST_MONTH: u8 = MONTHS_PER_YEAR - 1;

/// Number of days in a week
pub(crate) const DAYS_PER_WEEK: u8 = 7;

/// Highest valid week-start index (Saturday)
pub(crate) const MAX_WEEKDAY: u8 = DAYS_PER_WEEK - 1;

/// Number of cells in a six-week month view
pub const GRID_CELLS: usize = 42;

/// Days in each Gregorian month of a non-leap year, indexed by 0-based month
pub(crate) const GREGORIAN_MONTH_DAYS: [u8; 12] = [
    31, // January
    28, // February (non-leap; only used past jiff's year range)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in each Jalali month of a non-leap year, indexed by 0-based month
pub(crate) const JALALI_MONTH_DAYS: [u8; 12] = [
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by the Jalali leap check)
];

/// Days in Esfand for Jalali leap years
pub(crate) const ESFAND_DAYS_LEAP: u8 = 30;

/// Base date used by the parser when the caller does not supply one
pub const DEFAULT_BASE_DATE: DateTime = datetime(2020, 1, 1, 0, 0, 0, 0);

/// Century added to a Gregorian `yy` value
pub(crate) const GREGORIAN_SHORT_YEAR_BASE: i32 = 2000;
/// Century added to a Jalali `yy` value written with a leading zero
pub(crate) const JALALI_SHORT_YEAR_BASE_LEADING_ZERO: i32 = 1400;
/// Century added to any other Jalali `yy` value
pub(crate) const JALALI_SHORT_YEAR_BASE: i32 = 1300;

/// Persian (Extended Arabic-Indic) digit zero
pub(crate) const PERSIAN_ZERO: char = '\u{06F0}';
