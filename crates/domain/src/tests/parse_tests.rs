// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::parse;
use time::macros::date;

#[test]
fn test_quantity_parses_plain_numbers() {
    assert!((parse::quantity("12") - 12.0).abs() < f64::EPSILON);
    assert!((parse::quantity("3.5") - 3.5).abs() < f64::EPSILON);
    assert!((parse::quantity(" 7 ") - 7.0).abs() < f64::EPSILON);
}

#[test]
fn test_quantity_coerces_garbage_to_zero() {
    assert!(parse::quantity("").abs() < f64::EPSILON);
    assert!(parse::quantity("N/A").abs() < f64::EPSILON);
    assert!(parse::quantity("12,5").abs() < f64::EPSILON);
}

#[test]
fn test_calendar_date_truncates_timestamps() {
    assert_eq!(
        parse::calendar_date("2025-03-01T00:00:00Z"),
        Some(date!(2025 - 03 - 01))
    );
    assert_eq!(parse::calendar_date("2025-03-15"), Some(date!(2025 - 03 - 15)));
}

#[test]
fn test_calendar_date_rejects_malformed_values() {
    assert_eq!(parse::calendar_date(""), None);
    assert_eq!(parse::calendar_date("demain"), None);
    assert_eq!(parse::calendar_date("2025-13-01"), None);
    assert_eq!(parse::calendar_date("2025-3-1"), None);
}
