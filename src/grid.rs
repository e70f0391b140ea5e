//! Six-week month views.

use crate::calendar::{month_days, next_month, previous_month};
use crate::consts::{DAYS_PER_WEEK, GRID_CELLS};
use crate::types::{CalendarDay, CalendarKind, DateParts};
use jiff::civil::DateTime;

/// Builds the 42 cells of the month containing `reference`.
///
/// The grid starts on `week_starts_on` (0 = Sunday .. 6 = Saturday), so it
/// opens with the tail of the previous month and is padded with the head
/// of the next month.
pub fn calendar_grid(
    reference: DateTime,
    week_starts_on: u8,
    kind: CalendarKind,
) -> Vec<CalendarDay> {
    let parts = DateParts::from_datetime(reference, kind);
    let (year, month) = (parts.year, parts.month);

    // Step back from the reference weekday to the first of its month.
    let week = i32::from(DAYS_PER_WEEK);
    let today = i32::from(reference.weekday().to_sunday_zero_offset());
    let first = today - (i32::from(parts.day) - 1);
    // rem_euclid keeps this in 0..7
    let days_before = (first - i32::from(week_starts_on)).rem_euclid(week) as usize;

    let mut days = Vec::with_capacity(GRID_CELLS);
    if days_before > 0 {
        let (prev_year, prev_month) = previous_month(year, month);
        let previous = month_days(prev_year, prev_month, kind);
        days.extend_from_slice(&previous[previous.len() - days_before..]);
    }

    days.extend(month_days(year, month, kind));

    let (following_year, following_month) = next_month(year, month);
    let days_after = GRID_CELLS - days.len();
    days.extend(
        month_days(following_year, following_month, kind)
            .into_iter()
            .take(days_after),
    );

    trace!("grid for {year}-{month} ({kind}): {days_before} leading days");
    days
}
