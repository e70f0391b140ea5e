//! Month and weekday names, and the day a week starts on.
//!
//! Each calendar has a built-in locale. Callers may override parts of the
//! Gregorian one with a [`Locale`], or adapt a richer localization source
//! through [`ExternalLocale`]. Jalali always uses its built-in names.

use crate::consts::MAX_WEEKDAY;
use crate::prelude::*;
use crate::types::CalendarKind;
use serde::{Deserialize, Serialize};

/// Caller-supplied overrides. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekdays: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_months: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_starts_on: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_type: Option<CalendarKind>,
}

/// A locale with every field present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLocale {
    weekdays: [String; 7],
    months: [String; 12],
    short_months: [String; 12],
    week_starts_on: u8,
    calendar_type: CalendarKind,
}

struct LocaleTable {
    weekdays: [&'static str; 7],
    months: [&'static str; 12],
    short_months: [&'static str; 12],
    week_starts_on: u8,
}

const GREGORIAN_LOCALE: LocaleTable = LocaleTable {
    weekdays: ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    short_months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    week_starts_on: 1,
};

const JALALI_LOCALE: LocaleTable = LocaleTable {
    weekdays: ["ی", "د", "س", "چ", "پ", "ج", "ش"],
    months: [
        "فروردین",
        "اردیبهشت",
        "خرداد",
        "تیر",
        "مرداد",
        "شهریور",
        "مهر",
        "آبان",
        "آذر",
        "دی",
        "بهمن",
        "اسفند",
    ],
    short_months: [
        "فرو", "ارد", "خرد", "تیر", "مرد", "شهر", "مهر", "آبا", "آذر", "دی", "بهم", "اسف",
    ],
    week_starts_on: 6,
};

const fn table(kind: CalendarKind) -> &'static LocaleTable {
    match kind {
        CalendarKind::Gregorian => &GREGORIAN_LOCALE,
        CalendarKind::Jalali => &JALALI_LOCALE,
    }
}

fn owned<const N: usize>(names: &[&str; N]) -> [String; N] {
    names.map(str::to_owned)
}

/// Converts an override list into a fixed-size table, rejecting wrong lengths.
fn sized<const N: usize>(names: &[String]) -> Option<[String; N]> {
    let sized = <[String; N]>::try_from(names.to_vec()).ok();
    if sized.is_none() {
        debug!("ignoring override with {} names (expected {})", names.len(), N);
    }
    sized
}

fn valid_week_start(day: u8) -> Option<u8> {
    if day > MAX_WEEKDAY {
        debug!("ignoring week start {} (expected 0..={})", day, MAX_WEEKDAY);
        return None;
    }
    Some(day)
}

impl ResolvedLocale {
    /// The built-in locale for `kind`.
    pub fn defaults(kind: CalendarKind) -> Self {
        let table = table(kind);
        Self {
            weekdays: owned(&table.weekdays),
            months: owned(&table.months),
            short_months: owned(&table.short_months),
            week_starts_on: table.week_starts_on,
            calendar_type: kind,
        }
    }

    /// Merges `overrides` onto the defaults for `kind`.
    ///
    /// Overrides only apply when both `kind` and the override's
    /// `calendar_type` are Gregorian; a Jalali locale is always the
    /// built-in one.
    pub fn resolve(overrides: Option<&Locale>, kind: CalendarKind) -> Self {
        let mut locale = Self::defaults(kind);
        let Some(overrides) = overrides else {
            return locale;
        };
        if kind != CalendarKind::Gregorian || overrides.calendar_type != Some(kind) {
            trace!("locale overrides for {:?} ignored under {kind}", overrides.calendar_type);
            return locale;
        }

        if let Some(day) = overrides.week_starts_on.and_then(valid_week_start) {
            locale.week_starts_on = day;
        }
        if let Some(months) = overrides.months.as_deref().and_then(sized) {
            locale.months = months;
        }
        if let Some(short) = overrides.short_months.as_deref().and_then(sized) {
            locale.short_months = short;
        }
        if let Some(weekdays) = overrides.weekdays.as_deref().and_then(sized) {
            locale.weekdays = weekdays;
        }
        locale
    }

    /// Builds a locale from an external localization source.
    ///
    /// External sources only describe the Gregorian calendar, so for Jalali
    /// this is the built-in locale.
    pub fn from_external<E>(external: &E, kind: CalendarKind) -> Self
    where
        E: ExternalLocale + ?Sized,
    {
        let mut locale = Self::defaults(kind);
        if kind != CalendarKind::Gregorian {
            return locale;
        }

        if let Some(day) = external.week_starts_on().and_then(valid_week_start) {
            locale.week_starts_on = day;
        }
        if let Some(localize) = external.localize() {
            for (day, name) in (0u8..).zip(locale.weekdays.iter_mut()) {
                *name = localize.day(day, Width::Short);
            }
            for (month, (name, short)) in (0u8..).zip(
                locale
                    .months
                    .iter_mut()
                    .zip(locale.short_months.iter_mut()),
            ) {
                *name = localize.month(month, Width::Wide);
                *short = localize.month(month, Width::Abbreviated);
            }
        }
        locale
    }

    /// Weekday abbreviations, Sunday first.
    pub const fn weekdays(&self) -> &[String; 7] {
        &self.weekdays
    }

    pub const fn months(&self) -> &[String; 12] {
        &self.months
    }

    pub const fn short_months(&self) -> &[String; 12] {
        &self.short_months
    }

    /// First day of the week, 0 = Sunday .. 6 = Saturday
    pub const fn week_starts_on(&self) -> u8 {
        self.week_starts_on
    }

    pub const fn calendar_type(&self) -> CalendarKind {
        self.calendar_type
    }

    /// Full name of the 0-based `month`, if it exists.
    pub fn month_name(&self, month: u8) -> Option<&str> {
        self.months.get(usize::from(month)).map(String::as_str)
    }

    /// Short name of the 0-based `month`, if it exists.
    pub fn short_month_name(&self, month: u8) -> Option<&str> {
        self.short_months.get(usize::from(month)).map(String::as_str)
    }

    /// Weekday names in display order, starting at `week_starts_on`.
    pub fn weekday_header(&self) -> Vec<&str> {
        let start = usize::from(self.week_starts_on);
        self.weekdays[start..]
            .iter()
            .chain(&self.weekdays[..start])
            .map(String::as_str)
            .collect()
    }
}

/// Resolves a locale; see [`ResolvedLocale::resolve`].
pub fn resolve_locale(overrides: Option<&Locale>, kind: CalendarKind) -> ResolvedLocale {
    ResolvedLocale::resolve(overrides, kind)
}

/// Adapts an external locale; see [`ResolvedLocale::from_external`].
pub fn adapt_external_locale<E>(external: &E, kind: CalendarKind) -> ResolvedLocale
where
    E: ExternalLocale + ?Sized,
{
    ResolvedLocale::from_external(external, kind)
}

/// How long a localized name should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Width {
    Narrow,
    Short,
    Abbreviated,
    Wide,
}

/// Produces localized month and weekday names.
pub trait Localize {
    /// Name of the 0-based `month`.
    fn month(&self, month: u8, width: Width) -> String;
    /// Name of the weekday `day`, 0 = Sunday.
    fn day(&self, day: u8, width: Width) -> String;
}

/// A localization source living outside this crate.
pub trait ExternalLocale {
    fn week_starts_on(&self) -> Option<u8> {
        None
    }

    fn localize(&self) -> Option<&dyn Localize> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|&s| s.to_owned()).collect()
    }

    const NB_WEEKDAYS: [&str; 7] = ["sø", "ma", "ti", "on", "to", "fr", "lø"];
    const NB_MONTHS: [&str; 12] = [
        "januar",
        "februar",
        "mars",
        "april",
        "mai",
        "juni",
        "juli",
        "august",
        "september",
        "oktober",
        "november",
        "desember",
    ];
    const NB_SHORT_MONTHS: [&str; 12] = [
        "jan.", "feb.", "mars", "apr.", "mai", "juni", "juli", "aug.", "sep.", "okt.", "nov.",
        "des.",
    ];

    /// Norwegian Bokmål, shaped like a date library's locale object.
    struct Nb;

    impl Localize for Nb {
        fn month(&self, month: u8, width: Width) -> String {
            let names = match width {
                Width::Wide => &NB_MONTHS,
                _ => &NB_SHORT_MONTHS,
            };
            names[usize::from(month)].to_owned()
        }

        fn day(&self, day: u8, width: Width) -> String {
            match width {
                Width::Short => NB_WEEKDAYS[usize::from(day)].to_owned(),
                _ => NB_WEEKDAYS[usize::from(day)][..1].to_owned(),
            }
        }
    }

    impl ExternalLocale for Nb {
        fn week_starts_on(&self) -> Option<u8> {
            Some(1)
        }

        fn localize(&self) -> Option<&dyn Localize> {
            Some(self)
        }
    }

    struct WeekOnly;

    impl ExternalLocale for WeekOnly {
        fn week_starts_on(&self) -> Option<u8> {
            Some(0)
        }
    }

    #[test]
    fn test_defaults() {
        let gregorian = ResolvedLocale::defaults(CalendarKind::Gregorian);
        assert_eq!(gregorian.week_starts_on(), 1);
        assert_eq!(gregorian.short_month_name(0), Some("Jan"));
        assert_eq!(gregorian.calendar_type(), CalendarKind::Gregorian);

        let jalali = ResolvedLocale::defaults(CalendarKind::Jalali);
        assert_eq!(jalali.week_starts_on(), 6);
        assert_eq!(jalali.month_name(0), Some("فروردین"));
        assert_eq!(jalali.short_month_name(11), Some("اسف"));
        assert_eq!(jalali.calendar_type(), CalendarKind::Jalali);
        assert_eq!(jalali.month_name(12), None);
    }

    #[test]
    fn test_resolve_partial_overrides() {
        let overrides = Locale {
            months: Some(strings(&NB_MONTHS)),
            short_months: Some(strings(&NB_SHORT_MONTHS)),
            week_starts_on: Some(4),
            calendar_type: Some(CalendarKind::Gregorian),
            ..Locale::default()
        };
        let locale = resolve_locale(Some(&overrides), CalendarKind::Gregorian);

        assert_eq!(locale.weekdays(), &owned(&GREGORIAN_LOCALE.weekdays));
        assert_eq!(locale.months(), &owned(&NB_MONTHS));
        assert_eq!(locale.short_months(), &owned(&NB_SHORT_MONTHS));
        assert_eq!(locale.week_starts_on(), 4);
        assert_eq!(locale.calendar_type(), CalendarKind::Gregorian);
    }

    #[test]
    fn test_resolve_requires_matching_calendar_type() {
        let overrides = Locale {
            week_starts_on: Some(4),
            ..Locale::default()
        };
        let locale = resolve_locale(Some(&overrides), CalendarKind::Gregorian);
        assert_eq!(locale, ResolvedLocale::defaults(CalendarKind::Gregorian));
    }

    #[test]
    fn test_jalali_ignores_overrides() {
        let overrides = Locale {
            short_months: Some(strings(&NB_SHORT_MONTHS)),
            week_starts_on: Some(0),
            calendar_type: Some(CalendarKind::Jalali),
            ..Locale::default()
        };
        let locale = resolve_locale(Some(&overrides), CalendarKind::Jalali);
        assert_eq!(locale, ResolvedLocale::defaults(CalendarKind::Jalali));
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let overrides = Locale {
            weekdays: Some(strings(&["a", "b"])),
            week_starts_on: Some(7),
            calendar_type: Some(CalendarKind::Gregorian),
            ..Locale::default()
        };
        let locale = resolve_locale(Some(&overrides), CalendarKind::Gregorian);
        assert_eq!(locale, ResolvedLocale::defaults(CalendarKind::Gregorian));
    }

    #[test]
    fn test_adapt_external_locale() {
        let locale = adapt_external_locale(&Nb, CalendarKind::Gregorian);
        assert_eq!(locale.weekdays(), &owned(&NB_WEEKDAYS));
        assert_eq!(locale.months(), &owned(&NB_MONTHS));
        assert_eq!(locale.short_months(), &owned(&NB_SHORT_MONTHS));
        assert_eq!(locale.week_starts_on(), 1);
        assert_eq!(locale.calendar_type(), CalendarKind::Gregorian);
    }

    #[test]
    fn test_adapt_external_locale_without_localizer() {
        let locale = adapt_external_locale(&WeekOnly, CalendarKind::Gregorian);
        assert_eq!(locale.week_starts_on(), 0);
        assert_eq!(locale.months(), ResolvedLocale::defaults(CalendarKind::Gregorian).months());
    }

    #[test]
    fn test_adapt_external_locale_jalali_uses_defaults() {
        let locale = adapt_external_locale(&Nb, CalendarKind::Jalali);
        assert_eq!(locale, ResolvedLocale::defaults(CalendarKind::Jalali));
    }

    #[test]
    fn test_weekday_header() {
        let jalali = ResolvedLocale::defaults(CalendarKind::Jalali);
        assert_eq!(jalali.weekday_header(), ["ش", "ی", "د", "س", "چ", "پ", "ج"]);

        let gregorian = ResolvedLocale::defaults(CalendarKind::Gregorian);
        assert_eq!(gregorian.weekday_header(), ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]);
    }

    #[test]
    fn test_locale_from_json() {
        let json = r#"{
            "shortMonths": ["jan.", "feb.", "mars", "apr.", "mai", "juni",
                            "juli", "aug.", "sep.", "okt.", "nov.", "des."],
            "weekStartsOn": 1,
            "calendarType": "Gregorian"
        }"#;
        let overrides: Locale = serde_json::from_str(json).unwrap();
        assert_eq!(overrides.months, None);
        assert_eq!(overrides.calendar_type, Some(CalendarKind::Gregorian));

        let locale = resolve_locale(Some(&overrides), CalendarKind::Gregorian);
        assert_eq!(locale.short_month_name(11), Some("des."));
    }

    #[test]
    fn test_resolved_locale_serializes_camel_case() {
        let json = serde_json::to_value(ResolvedLocale::defaults(CalendarKind::Gregorian)).unwrap();
        assert_eq!(json["weekStartsOn"], 1);
        assert_eq!(json["calendarType"], "Gregorian");
        assert_eq!(json["shortMonths"][4], "May");
    }
}
