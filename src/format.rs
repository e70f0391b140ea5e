//! Compiling format patterns and rendering dates with them.
//!
//! A pattern such as `"dd MMM yyyy"` is compiled once into a list of
//! [`FormatToken`]s bound to a calendar and locale. The same token list is
//! then used both to render dates and to parse text (see [`Format::parse`]).

use crate::locale::{Locale, ResolvedLocale};
use crate::parse::{ParseResult, parse};
use crate::prelude::*;
use crate::types::{CalendarKind, DateParts};
use jiff::civil::DateTime;
use std::fmt;
use std::ops::RangeInclusive;

/// A date or time field that can appear in a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FieldId {
    /// `yyyy`
    #[display(fmt = "yyyy")]
    Year,
    /// `yy`
    #[display(fmt = "yy")]
    ShortYear,
    /// `MMM`
    #[display(fmt = "MMM")]
    MonthName,
    /// `MM`
    #[display(fmt = "MM")]
    Month,
    /// `dd`
    #[display(fmt = "dd")]
    Day,
    /// `HH`
    #[display(fmt = "HH")]
    Hour,
    /// `mm`
    #[display(fmt = "mm")]
    Minute,
    /// `ss`
    #[display(fmt = "ss")]
    Second,
}

/// Fields in matching order. A keyword is listed before any shorter
/// keyword that is a prefix of it.
const FIELD_PRECEDENCE: [FieldId; 8] = [
    FieldId::Year,
    FieldId::ShortYear,
    FieldId::MonthName,
    FieldId::Month,
    FieldId::Day,
    FieldId::Hour,
    FieldId::Minute,
    FieldId::Second,
];

impl FieldId {
    /// The pattern text for this field.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Year => "yyyy",
            Self::ShortYear => "yy",
            Self::MonthName => "MMM",
            Self::Month => "MM",
            Self::Day => "dd",
            Self::Hour => "HH",
            Self::Minute => "mm",
            Self::Second => "ss",
        }
    }

    /// Exact digit count of a numeric field; `None` for month names.
    pub const fn digits(self) -> Option<usize> {
        match self {
            Self::Year => Some(4),
            Self::MonthName => None,
            _ => Some(2),
        }
    }

    /// Accepted values when parsing a numeric field.
    pub const fn range(self) -> Option<RangeInclusive<u32>> {
        match self {
            Self::Year => Some(0..=9999),
            Self::ShortYear => Some(0..=99),
            Self::MonthName => None,
            Self::Month => Some(1..=12),
            Self::Day => Some(1..=31),
            Self::Hour => Some(0..=23),
            Self::Minute | Self::Second => Some(0..=59),
        }
    }

    /// The field whose keyword starts `pattern`, preferring the longest.
    fn match_prefix(pattern: &str) -> Option<Self> {
        FIELD_PRECEDENCE
            .into_iter()
            .find(|field| pattern.starts_with(field.keyword()))
    }
}

/// A field occurrence inside a compiled format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldToken {
    id: FieldId,
    kind: CalendarKind,
    allowed_values: Option<Vec<String>>,
}

impl FieldToken {
    fn new(id: FieldId, kind: CalendarKind, locale: &ResolvedLocale) -> Self {
        let allowed_values = match id {
            FieldId::MonthName => Some(locale.short_months().to_vec()),
            _ => None,
        };
        Self {
            id,
            kind,
            allowed_values,
        }
    }

    pub const fn id(&self) -> FieldId {
        self.id
    }

    pub const fn kind(&self) -> CalendarKind {
        self.kind
    }

    /// The names a `MMM` field accepts, in month order.
    pub fn allowed_values(&self) -> Option<&[String]> {
        self.allowed_values.as_deref()
    }

    /// Renders this field of `date`.
    pub fn render(&self, date: DateTime) -> String {
        render_field(self, &DateParts::from_datetime(date, self.kind))
    }
}

/// One element of a compiled format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatToken {
    /// Text copied verbatim.
    Literal(String),
    Field(FieldToken),
}

impl fmt::Display for FormatToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Field(field) => write!(f, "{}", field.id),
        }
    }
}

fn render_field(token: &FieldToken, parts: &DateParts) -> String {
    match token.id {
        FieldId::Year if parts.year < 0 => format!("-{:04}", parts.year.unsigned_abs()),
        FieldId::Year => format!("{:04}", parts.year),
        FieldId::ShortYear => format!("{:02}", parts.year.rem_euclid(100)),
        FieldId::MonthName => token
            .allowed_values
            .as_ref()
            .and_then(|names| names.get(usize::from(parts.month)))
            .cloned()
            .unwrap_or_default(),
        FieldId::Month => format!("{:02}", parts.month + 1),
        FieldId::Day => format!("{:02}", parts.day),
        FieldId::Hour => format!("{:02}", parts.hour),
        FieldId::Minute => format!("{:02}", parts.minute),
        FieldId::Second => format!("{:02}", parts.second),
    }
}

/// Compiles `pattern` into tokens for `kind`.
///
/// Never fails: characters that do not start a field keyword become
/// literal text, and adjacent literal characters share one token.
pub fn compile_format(
    pattern: &str,
    kind: CalendarKind,
    overrides: Option<&Locale>,
) -> Vec<FormatToken> {
    let locale = ResolvedLocale::resolve(overrides, kind);
    let mut tokens: Vec<FormatToken> = Vec::new();
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        if let Some(id) = FieldId::match_prefix(rest) {
            tokens.push(FormatToken::Field(FieldToken::new(id, kind, &locale)));
            rest = &rest[id.keyword().len()..];
            continue;
        }
        match tokens.last_mut() {
            Some(FormatToken::Literal(text)) => text.push(c),
            _ => tokens.push(FormatToken::Literal(c.to_string())),
        }
        rest = &rest[c.len_utf8()..];
    }

    trace!("compiled {pattern:?} ({kind}) into {} tokens", tokens.len());
    tokens
}

/// Renders `date` with `tokens`. No date renders as the empty string.
///
/// `yyyy` zero-pads the year to four digits. Years outside `0..=9999`
/// keep their sign and extra digits, and such text does not parse back.
pub fn render(date: Option<DateTime>, tokens: &[FormatToken]) -> String {
    let Some(date) = date else {
        return String::new();
    };

    let mut parts: Option<(CalendarKind, DateParts)> = None;
    let mut text = String::new();
    for token in tokens {
        match token {
            FormatToken::Literal(literal) => text.push_str(literal),
            FormatToken::Field(field) => {
                let fields = match parts {
                    Some((kind, fields)) if kind == field.kind => fields,
                    _ => {
                        let fields = DateParts::from_datetime(date, field.kind);
                        parts = Some((field.kind, fields));
                        fields
                    },
                };
                text.push_str(&render_field(field, &fields));
            },
        }
    }
    text
}

/// A compiled pattern together with its calendar.
///
/// Displays as the pattern it was compiled from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Format {
    kind: CalendarKind,
    tokens: Vec<FormatToken>,
}

impl Format {
    pub fn new(pattern: &str, kind: CalendarKind, overrides: Option<&Locale>) -> Self {
        Self {
            kind,
            tokens: compile_format(pattern, kind, overrides),
        }
    }

    pub fn tokens(&self) -> &[FormatToken] {
        &self.tokens
    }

    pub const fn kind(&self) -> CalendarKind {
        self.kind
    }

    pub fn render(&self, date: Option<DateTime>) -> String {
        render(date, &self.tokens)
    }

    pub fn parse(&self, input: &str, base: Option<DateTime>) -> ParseResult {
        parse(input, &self.tokens, base, self.kind)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens.iter().try_for_each(|token| write!(f, "{token}"))
    }
}
