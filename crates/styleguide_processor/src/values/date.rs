/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Date patterns.
//!
//! A pattern is a run of tokens (`YYYY`, `YY`, `MMMM`, `MMM`, `MM`, `M`,
//! `DD`, `D`) and literal text. Each token requires the matching part of
//! the date; a date that lacks a required part does not render.

use crate::values::{FieldValues, Resolved};
use styleguide_core::{DateConfig, DateValue, Record};
use tracing::debug;
use winnow::combinator::{alt, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{take, take_till};

const MONTHS: [&str; 12] = [
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
];

/// One element of a date pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateToken<'a> {
    Year,
    ShortYear,
    MonthName,
    MonthAbbrev,
    PaddedMonth,
    Month,
    PaddedDay,
    Day,
    Literal(&'a str),
}

fn parse_token<'a>(input: &mut &'a str) -> Result<DateToken<'a>, ErrMode<ContextError>> {
    alt((
        "YYYY".value(DateToken::Year),
        "YY".value(DateToken::ShortYear),
        "MMMM".value(DateToken::MonthName),
        "MMM".value(DateToken::MonthAbbrev),
        "MM".value(DateToken::PaddedMonth),
        "M".value(DateToken::Month),
        "DD".value(DateToken::PaddedDay),
        "D".value(DateToken::Day),
        take_till(1.., |c: char| matches!(c, 'Y' | 'M' | 'D')).map(DateToken::Literal),
        // A lone `Y` is literal text.
        take(1_usize).map(DateToken::Literal),
    ))
    .parse_next(input)
}

/// Split a pattern into tokens.
pub fn parse_pattern(pattern: &str) -> Vec<DateToken<'_>> {
    let mut input = pattern;
    let tokens: Result<Vec<_>, ErrMode<ContextError>> =
        repeat(0.., parse_token).parse_next(&mut input);
    // Every non-empty input matches at least the single-character literal.
    tokens.unwrap_or_default()
}

/// Full English name of a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTHS.get(index).copied()
}

fn month_number(date: &DateValue) -> Option<u32> {
    let month: u32 = date.month.as_deref()?.trim().parse().ok()?;
    (1..=12).contains(&month).then_some(month)
}

fn day_number(date: &DateValue) -> Option<u32> {
    let day: u32 = date.day.as_deref()?.trim().parse().ok()?;
    (1..=31).contains(&day).then_some(day)
}

/// Render `date` with `pattern`, or `None` if a required part is missing.
pub fn format_date(date: &DateValue, pattern: &str) -> Option<String> {
    let mut out = String::new();
    for token in parse_pattern(pattern) {
        match token {
            DateToken::Year => out.push_str(date.year.as_deref()?),
            DateToken::ShortYear => {
                let year = date.year.as_deref()?;
                let start = year
                    .char_indices()
                    .rev()
                    .nth(1)
                    .map_or(0, |(index, _)| index);
                out.push_str(&year[start..]);
            }
            DateToken::MonthName => out.push_str(month_name(month_number(date)?)?),
            DateToken::MonthAbbrev => {
                let name = month_name(month_number(date)?)?;
                out.push_str(&name[..3]);
            }
            DateToken::PaddedMonth => out.push_str(&format!("{:02}", month_number(date)?)),
            DateToken::Month => out.push_str(&month_number(date)?.to_string()),
            DateToken::PaddedDay => out.push_str(&format!("{:02}", day_number(date)?)),
            DateToken::Day => out.push_str(&day_number(date)?.to_string()),
            DateToken::Literal(text) => out.push_str(text),
        }
    }
    Some(out)
}

impl FieldValues for DateConfig {
    fn values(&self, key: &str, record: &Record) -> Resolved {
        let Some(value) = record.get(key) else {
            return Resolved::Absent;
        };
        let Some(date) = value.as_date() else {
            debug!(key, "date trait given a non-date value");
            return Resolved::Unresolved;
        };
        if date.is_empty() {
            return Resolved::Absent;
        }
        match format_date(date, &self.pattern) {
            Some(formatted) => Resolved::Value(formatted),
            None => {
                debug!(key, pattern = %self.pattern, "date lacks a part its pattern needs");
                Resolved::Unresolved
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pattern_tokens() {
        assert_eq!(
            parse_pattern("MMMM D, YYYY"),
            vec![
                DateToken::MonthName,
                DateToken::Literal(" "),
                DateToken::Day,
                DateToken::Literal(", "),
                DateToken::Year,
            ]
        );
        assert_eq!(
            parse_pattern("YYY"),
            vec![DateToken::ShortYear, DateToken::Literal("Y")]
        );
        assert!(parse_pattern("").is_empty());
    }

    #[test]
    fn test_format_year() {
        let date = DateValue::year("2012");
        assert_eq!(format_date(&date, "YYYY").as_deref(), Some("2012"));
        assert_eq!(format_date(&date, "'YY").as_deref(), Some("'12"));
    }

    #[test]
    fn test_format_month_forms() {
        let date = DateValue::ymd("2010", "1", "5");
        assert_eq!(format_date(&date, "MMMM").as_deref(), Some("January"));
        assert_eq!(format_date(&date, "MMM").as_deref(), Some("Jan"));
        assert_eq!(
            format_date(&date, "YYYY-MM-DD").as_deref(),
            Some("2010-01-05")
        );
        assert_eq!(format_date(&date, "M/D").as_deref(), Some("1/5"));
    }

    #[test]
    fn test_missing_part_fails() {
        let date = DateValue::year("2010");
        assert_eq!(format_date(&date, "MMMM YYYY"), None);
        assert_eq!(
            format_date(&DateValue::year_month("2010", "13"), "MMMM"),
            None
        );
    }

    #[test]
    fn test_month_names_are_one_based() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
    }

    #[test]
    fn test_empty_date_is_absent() {
        let record = Record::new().with("datePublished", DateValue::default());
        assert_eq!(
            DateConfig::default().values("datePublished", &record),
            Resolved::Absent
        );
    }
}
