// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::city::{is_known_city, validate_city};
use crate::error::DomainError;
use crate::types::{ProductivityRecord, Role, Session, TrafficInfraction, User};
use std::str::FromStr;

#[test]
fn test_role_round_trips_through_strings() {
    for role in [Role::Admin, Role::Comando, Role::User] {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_role_rejects_unknown_string() {
    assert_eq!(
        Role::from_str("ROOT"),
        Err(DomainError::InvalidRole(String::from("ROOT")))
    );
}

#[test]
fn test_role_serializes_uppercase() {
    let json: String = serde_json::to_string(&Role::Comando).unwrap();
    assert_eq!(json, "\"COMANDO\"");
}

#[test]
fn test_user_normalizes_username_to_lowercase() {
    let user: User = User::new(String::from("1"), "P3.Silva", Role::User, "Sd", "pw");
    assert_eq!(user.username, "p3.silva");
}

#[test]
fn test_user_deserializes_without_password() {
    let raw: &str = r#"{"id":"1","username":"admin","role":"ADMIN","rank":"Ten Cel"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.password, "");
}

#[test]
fn test_session_strips_password() {
    let user: User = User::new(String::from("1"), "admin", Role::Admin, "Ten Cel", "22");
    let session: Session = Session::for_user(&user);

    assert_eq!(session.username, "admin");
    assert_eq!(session.role, Role::Admin);
    let json: String = serde_json::to_string(&session).unwrap();
    assert!(!json.contains("password"));
    assert!(!json.contains("22"));
}

#[test]
fn test_recompute_total_sums_four_counts() {
    let mut record = TrafficInfraction {
        id: String::from("a"),
        city: String::from("Lajeado"),
        month: 0,
        year: 2024,
        cars: 10,
        motorcycles: 5,
        trucks: 2,
        others: 1,
        total: 0,
        timestamp: 0,
    };
    record.recompute_total();
    assert_eq!(record.total, 18);
}

#[test]
fn test_sum_counts_saturates_instead_of_overflowing() {
    assert_eq!(
        TrafficInfraction::sum_counts(u32::MAX, 1, 1, 1),
        u32::MAX
    );
}

#[test]
fn test_productivity_serializes_camel_case() {
    let record = ProductivityRecord {
        id: String::from("p"),
        city: String::from("Lajeado"),
        month: 0,
        year: 2024,
        ba: 1,
        cop: 2,
        tc: 3,
        fugitives: 0,
        vehicles_inspected: 10,
        people_approached: 20,
        drugs_kg: 1.5,
        weapons: 0,
        arrests: 1,
        timestamp: 0,
    };

    let json: String = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"vehiclesInspected\":10"));
    assert!(json.contains("\"peopleApproached\":20"));
    assert!(json.contains("\"drugsKg\":1.5"));
}

#[test]
fn test_city_membership() {
    assert!(is_known_city("Lajeado"));
    assert!(is_known_city("Muçum"));
    assert!(!is_known_city("Porto Alegre"));
    assert_eq!(
        validate_city("Porto Alegre"),
        Err(DomainError::UnknownCity(String::from("Porto Alegre")))
    );
}
