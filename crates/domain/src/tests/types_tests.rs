// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{LineStatus, Origin};

#[test]
fn test_line_status_parses_known_wire_values() {
    assert_eq!(LineStatus::parse("Reservé"), LineStatus::Reserved);
    assert_eq!(LineStatus::parse("Préparé"), LineStatus::Prepared);
    assert_eq!(LineStatus::parse("Sortie produits"), LineStatus::ShippedOut);
    assert_eq!(LineStatus::parse("Arrivage"), LineStatus::AwaitingArrival);
    assert_eq!(LineStatus::parse("Rupture (SdF)"), LineStatus::Shortage);
    assert_eq!(LineStatus::parse("Commandé"), LineStatus::Ordered);
}

#[test]
fn test_line_status_preserves_unknown_values() {
    let status: LineStatus = LineStatus::parse("En attente");
    assert_eq!(status, LineStatus::Other(String::from("En attente")));
    assert_eq!(status.as_str(), "En attente");
}

#[test]
fn test_line_status_round_trips_wire_values() {
    for value in [
        "Reservé",
        "Préparé",
        "Sortie produits",
        "Arrivage",
        "Rupture (SdF)",
        "Commandé",
    ] {
        assert_eq!(LineStatus::parse(value).as_str(), value);
    }
}

#[test]
fn test_committed_set_membership() {
    assert!(LineStatus::Reserved.is_committed());
    assert!(LineStatus::Prepared.is_committed());
    assert!(LineStatus::ShippedOut.is_committed());
    assert!(!LineStatus::AwaitingArrival.is_committed());
    assert!(!LineStatus::Shortage.is_committed());
    assert!(!LineStatus::Ordered.is_committed());
    assert!(!LineStatus::Other(String::from("x")).is_committed());
}

#[test]
fn test_origin_only_sdf_is_internal() {
    assert_eq!(Origin::parse("SDF"), Origin::Internal);
    assert_eq!(Origin::parse("Ukoba"), Origin::External);
    assert_eq!(Origin::parse(""), Origin::External);
    assert_eq!(Origin::parse("sdf"), Origin::External);
}
