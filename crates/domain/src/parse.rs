// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lenient parsing rules for list field values.
//!
//! The hosted list stores quantities and dates as loosely-typed text.
//! Allocation must never fail on a malformed row, so parsing here is
//! total: a bad quantity coerces to zero and a bad date to `None`.

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const CALENDAR_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a quantity field. Unparsable values coerce to `0.0`.
#[must_use]
pub fn quantity(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Parses a calendar date from the first ten characters of a list
/// date-time value (`YYYY-MM-DD`, the rest of the timestamp is
/// ignored). Returns `None` for anything unparsable.
#[must_use]
pub fn calendar_date(raw: &str) -> Option<Date> {
    let head = raw.get(..10)?;
    Date::parse(head, CALENDAR_DATE).ok()
}
