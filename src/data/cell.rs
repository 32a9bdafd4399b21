//! A single table cell and the ordered parse chain behind cell comparison.

use std::cmp::Ordering;

use time::{
    Date, OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339,
    macros::format_description,
};

use crate::utils::{collation::german_compare, general::partial_ordering};

/// One cell of a table row: the trimmed text plus its eagerly-computed typed
/// parses. Which parse actually applies is decided per row pair at comparison
/// time, so a column mixing numbers and text may legitimately compare
/// different pairs under different rules.
#[derive(Clone, Debug, PartialEq)]
pub struct DataCell {
    text: String,
    number: Option<f64>,
    date: Option<OffsetDateTime>,
}

impl DataCell {
    pub fn new(raw: &str) -> Self {
        let text = raw.trim().to_owned();
        let number = parse_number(&text);
        let date = parse_date(&text);

        Self { text, number, date }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Compares two cells, trying each rule in order: numeric if both sides
    /// parsed as finite numbers, chronological if both parsed as dates, and
    /// German-collated text otherwise.
    pub fn compare(&self, other: &DataCell) -> Ordering {
        if let (Some(a), Some(b)) = (self.number, other.number) {
            partial_ordering(a, b)
        } else if let (Some(a), Some(b)) = (self.date, other.date) {
            a.cmp(&b)
        } else {
            german_compare(&self.text, &other.text)
        }
    }
}

impl From<&str> for DataCell {
    fn from(raw: &str) -> Self {
        DataCell::new(raw)
    }
}

/// Strict whole-string float parsing. Accepting numeric prefixes would
/// classify ISO dates as numbers and sort them by year alone, and NaN would
/// poison the comparator, so both are rejected here.
fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Locale-independent date formats only. Dotted German dates are left to the
/// text collator on purpose; their interpretation is ambiguous.
fn parse_date(text: &str) -> Option<OffsetDateTime> {
    if let Ok(date) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(date.to_offset(time::UtcOffset::UTC));
    }

    if let Ok(date) = PrimitiveDateTime::parse(
        text,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    )
    .or_else(|_| {
        PrimitiveDateTime::parse(
            text,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        )
    }) {
        return Some(date.assume_utc());
    }

    if let Ok(date) = Date::parse(text, format_description!("[year]-[month]-[day]")) {
        return Some(date.midnight().assume_utc());
    }

    None
}
