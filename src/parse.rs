//! Parsing text back into dates with a compiled format.

use crate::calendar;
use crate::consts::{
    DEFAULT_BASE_DATE, GREGORIAN_SHORT_YEAR_BASE, JALALI_SHORT_YEAR_BASE,
    JALALI_SHORT_YEAR_BASE_LEADING_ZERO,
};
use crate::format::{FieldId, FieldToken, FormatToken};
use crate::prelude::*;
use crate::types::{CalendarKind, DateParts};
use jiff::civil::DateTime;

/// Outcome of [`parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// The parsed date, absent when any part of the input was rejected.
    pub date: Option<DateTime>,
    /// The rest of a literal run the input stopped in the middle of.
    ///
    /// Only set when the input ran out while matching literal text, for
    /// example `"--"` after `"2345"` against `"yyyy--MM"`.
    pub missing_punctuation: String,
}

impl ParseResult {
    fn rejected(missing_punctuation: String) -> Self {
        Self {
            date: None,
            missing_punctuation,
        }
    }
}

/// Why the parser stopped. Only used for diagnostics.
#[derive(Debug, Display)]
enum Rejection {
    #[display(fmt = "literal text did not match")]
    Literal,
    #[display(fmt = "expected digits for {}", _0)]
    Digits(FieldId),
    #[display(fmt = "{} out of range for {}", _1, _0)]
    Range(FieldId, u32),
    #[display(fmt = "unknown month name")]
    MonthName,
}

struct Parser<'i> {
    rest: &'i str,
    kind: CalendarKind,
    fields: DateParts,
    missing_punctuation: String,
}

impl<'i> Parser<'i> {
    fn new(input: &'i str, kind: CalendarKind, fields: DateParts) -> Self {
        Self {
            rest: input,
            kind,
            fields,
            missing_punctuation: String::new(),
        }
    }

    fn token(&mut self, token: &FormatToken) -> Result<(), Rejection> {
        match token {
            FormatToken::Literal(text) => self.literal(text),
            FormatToken::Field(field) => self.field(field),
        }
    }

    /// Matches `text` one character at a time.
    fn literal(&mut self, text: &str) -> Result<(), Rejection> {
        for (at, expected) in text.char_indices() {
            match self.rest.chars().next() {
                Some(c) if c == expected => self.rest = &self.rest[c.len_utf8()..],
                Some(_) => return Err(Rejection::Literal),
                None => {
                    self.missing_punctuation = text[at..].to_owned();
                    return Err(Rejection::Literal);
                },
            }
        }
        Ok(())
    }

    fn field(&mut self, field: &FieldToken) -> Result<(), Rejection> {
        let id = field.id();
        match id {
            FieldId::MonthName => {
                let names = field.allowed_values().unwrap_or_default();
                self.fields.month = self.month_name(names)?;
            },
            FieldId::Year => self.fields.year = self.number(id)?,
            FieldId::ShortYear => self.fields.year = self.short_year()?,
            FieldId::Month => self.fields.month = self.number::<u8>(id)? - 1,
            FieldId::Day => self.fields.day = self.number(id)?,
            FieldId::Hour => self.fields.hour = self.number(id)?,
            FieldId::Minute => self.fields.minute = self.number(id)?,
            FieldId::Second => self.fields.second = self.number(id)?,
        }
        Ok(())
    }

    /// Takes exactly `width` ASCII digits.
    fn digits(&mut self, id: FieldId, width: usize) -> Result<&'i str, Rejection> {
        let bytes = self.rest.as_bytes();
        if bytes.len() < width || !bytes[..width].iter().all(u8::is_ascii_digit) {
            return Err(Rejection::Digits(id));
        }
        let (digits, rest) = self.rest.split_at(width);
        self.rest = rest;
        Ok(digits)
    }

    /// A fixed-width numeric field, checked against its range.
    fn number<T: TryFrom<u32>>(&mut self, id: FieldId) -> Result<T, Rejection> {
        let width = id.digits().unwrap_or_default();
        let digits = self.digits(id, width)?;
        let value = digits.parse::<u32>().map_err(|_| Rejection::Digits(id))?;
        match id.range() {
            Some(range) if !range.contains(&value) => Err(Rejection::Range(id, value)),
            _ => T::try_from(value).map_err(|_| Rejection::Range(id, value)),
        }
    }

    /// Two-digit years. Jalali picks the century from the matched text:
    /// a leading zero means the 1400s, anything else the 1300s.
    fn short_year(&mut self) -> Result<i32, Rejection> {
        let id = FieldId::ShortYear;
        let digits = self.digits(id, id.digits().unwrap_or_default())?;
        let value: i32 = digits.parse().map_err(|_| Rejection::Digits(id))?;
        let base = match self.kind {
            CalendarKind::Gregorian => GREGORIAN_SHORT_YEAR_BASE,
            CalendarKind::Jalali if digits.starts_with('0') => JALALI_SHORT_YEAR_BASE_LEADING_ZERO,
            CalendarKind::Jalali => JALALI_SHORT_YEAR_BASE,
        };
        Ok(base + value)
    }

    /// Case-insensitive match against `names`; the first name that
    /// matches wins.
    fn month_name(&mut self, names: &[String]) -> Result<u8, Rejection> {
        for (month, name) in (0u8..).zip(names) {
            let len = name.chars().count();
            let end = self
                .rest
                .char_indices()
                .nth(len)
                .map_or(self.rest.len(), |(at, _)| at);
            let candidate = &self.rest[..end];
            if candidate.to_lowercase() == name.to_lowercase() {
                self.rest = &self.rest[end..];
                return Ok(month);
            }
        }
        Err(Rejection::MonthName)
    }
}

/// Parses `input` against `tokens`.
///
/// Fields missing from the format are taken from `base`, read under
/// `kind`; without a base the defaults are those of 2020-01-01 00:00. The
/// base also supplies the milliseconds.
///
/// A Jalali day is checked against the month length in the *base* year,
/// not the parsed one.
pub fn parse(
    input: &str,
    tokens: &[FormatToken],
    base: Option<DateTime>,
    kind: CalendarKind,
) -> ParseResult {
    let base = DateParts::from_datetime(base.unwrap_or(DEFAULT_BASE_DATE), kind);
    let mut parser = Parser::new(input, kind, base);

    if let Some(rejection) = tokens.iter().find_map(|token| parser.token(token).err()) {
        debug!("rejected {input:?}: {rejection}");
        return ParseResult::rejected(parser.missing_punctuation);
    }

    let fields = parser.fields;
    let length_year = match kind {
        CalendarKind::Gregorian => fields.year,
        CalendarKind::Jalali => base.year,
    };
    let month_length = calendar::month_length(length_year, fields.month, kind);
    if fields.day > month_length {
        debug!("rejected {input:?}: day {} past month length {month_length}", fields.day);
        return ParseResult::rejected(parser.missing_punctuation);
    }

    match fields.to_datetime(kind) {
        Ok(date) => ParseResult {
            date: Some(date),
            missing_punctuation: parser.missing_punctuation,
        },
        Err(err) => {
            debug!("rejected {input:?}: {err}");
            ParseResult::rejected(parser.missing_punctuation)
        },
    }
}
