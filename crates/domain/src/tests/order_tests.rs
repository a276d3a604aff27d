// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::order::Order;
use crate::types::Site;

#[test]
fn test_secondary_site_empty_string_normalizes_to_none() {
    let order: Order = Order::new(
        "1",
        "42",
        Site::new("Paris"),
        Some(String::new()),
        None,
        None,
    );
    assert_eq!(order.secondary_site, None);
}

#[test]
fn test_secondary_site_zero_sentinel_normalizes_to_none() {
    let order: Order = Order::new(
        "1",
        "42",
        Site::new("Paris"),
        Some(String::from("0")),
        None,
        None,
    );
    assert_eq!(order.secondary_site, None);
}

#[test]
fn test_secondary_site_real_value_is_kept() {
    let order: Order = Order::new(
        "1",
        "42",
        Site::new("Paris"),
        Some(String::from("Lyon")),
        None,
        None,
    );
    assert_eq!(order.secondary_site, Some(Site::new("Lyon")));
}
