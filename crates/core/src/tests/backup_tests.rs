// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backup::{
    BACKUP_ORIGIN, BACKUP_VERSION, BackupDocument, BackupPayload, apply_import, export,
    export_json, parse_import,
};
use crate::error::ImportError;
use crate::records::create_infraction;
use crate::state::default_users;
use crate::tests::helpers::{fresh_dashboard, infraction_draft, productivity_draft};
use siop_persistence::{StoreKey, load_collection};

#[test]
fn test_export_carries_version_origin_and_collections() {
    let (mut state, mut store) = fresh_dashboard();
    create_infraction(
        &mut state,
        &mut store,
        &infraction_draft("Lajeado", 0, 2024, ("10", "5", "2", "1")),
    )
    .unwrap();

    let document: BackupDocument = export(&state).unwrap();

    assert_eq!(document.version, BACKUP_VERSION);
    assert_eq!(document.origin, BACKUP_ORIGIN);
    assert!(!document.timestamp.is_empty());
    assert_eq!(document.data.infractions, state.infractions);
    assert_eq!(document.data.users, state.users);
    assert!(document.data.productivity.is_empty());
}

#[test]
fn test_export_json_is_parseable_wrapped_document() {
    let (mut state, mut store) = fresh_dashboard();
    create_infraction(
        &mut state,
        &mut store,
        &infraction_draft("Encantado", 2, 2025, ("3", "0", "1", "0")),
    )
    .unwrap();

    let raw: String = export_json(&state).unwrap();
    let payload: BackupPayload = parse_import(&raw).unwrap();

    assert_eq!(payload.infractions, state.infractions);
    assert_eq!(payload.users, state.users);
}

#[test]
fn test_parse_import_accepts_flat_document() {
    let raw = r#"{
        "infractions": [{
            "id": "a1", "city": "Lajeado", "month": 0, "year": 2024,
            "cars": 1, "motorcycles": 2, "trucks": 3, "others": 4,
            "total": 10, "timestamp": 1700000000000
        }],
        "productivity": [],
        "users": []
    }"#;

    let payload: BackupPayload = parse_import(raw).unwrap();
    assert_eq!(payload.infractions.len(), 1);
    assert_eq!(payload.infractions[0].city, "Lajeado");
}

#[test]
fn test_parse_import_accepts_legacy_bare_array() {
    let raw = r#"[{
        "id": "a1", "city": "Lajeado", "month": 5, "year": 2023,
        "cars": 4, "motorcycles": 0, "trucks": 0, "others": 0,
        "total": 4, "timestamp": 1700000000000
    }]"#;

    let payload: BackupPayload = parse_import(raw).unwrap();
    assert_eq!(payload.infractions.len(), 1);
    assert!(payload.productivity.is_empty());
    assert!(payload.users.is_empty());
}

#[test]
fn test_parse_import_rejects_non_json() {
    let err = parse_import("not json at all").unwrap_err();
    assert!(matches!(err, ImportError::MalformedDocument(_)));
}

#[test]
fn test_parse_import_rejects_all_empty_document() {
    let raw = r#"{"data": {"infractions": [], "productivity": [], "users": []}}"#;
    let err = parse_import(raw).unwrap_err();
    assert!(matches!(err, ImportError::EmptyOrInvalid));
}

#[test]
fn test_parse_import_coerces_non_array_collection_to_empty() {
    let raw = r#"{
        "infractions": {"unexpected": true},
        "productivity": [{
            "id": "p1", "city": "Lajeado", "month": 0, "year": 2024,
            "ba": 1, "cop": 0, "tc": 0, "fugitives": 0,
            "vehiclesInspected": 0, "peopleApproached": 0,
            "drugsKg": 0.0, "weapons": 0, "arrests": 0,
            "timestamp": 1700000000000
        }],
        "users": []
    }"#;

    let payload: BackupPayload = parse_import(raw).unwrap();
    assert!(payload.infractions.is_empty());
    assert_eq!(payload.productivity.len(), 1);
}

#[test]
fn test_parse_import_all_non_array_collections_count_as_empty() {
    let raw = r#"{"data": {"infractions": 7, "productivity": "x", "users": null}}"#;
    let err = parse_import(raw).unwrap_err();
    assert!(matches!(err, ImportError::EmptyOrInvalid));
}

#[test]
fn test_parse_import_rejects_unrelated_object() {
    let err = parse_import(r#"{"foo": "bar"}"#).unwrap_err();
    assert!(matches!(err, ImportError::EmptyOrInvalid));
}

#[test]
fn test_apply_import_replaces_records_and_persists() {
    let (mut state, mut store) = fresh_dashboard();
    create_infraction(
        &mut state,
        &mut store,
        &infraction_draft("Lajeado", 0, 2024, ("9", "9", "9", "9")),
    )
    .unwrap();

    let raw = r#"[{
        "id": "imported", "city": "Encantado", "month": 1, "year": 2022,
        "cars": 1, "motorcycles": 0, "trucks": 0, "others": 0,
        "total": 1, "timestamp": 1600000000000
    }]"#;
    let payload: BackupPayload = parse_import(raw).unwrap();
    apply_import(&mut state, &mut store, payload).unwrap();

    assert_eq!(state.infractions.len(), 1);
    assert_eq!(state.infractions[0].id, "imported");
    let stored: Vec<siop_domain::TrafficInfraction> =
        load_collection(&store, StoreKey::Infractions).unwrap();
    assert_eq!(stored, state.infractions);
}

#[test]
fn test_apply_import_with_empty_users_keeps_current_accounts() {
    let (mut state, mut store) = fresh_dashboard();

    let payload = BackupPayload {
        infractions: Vec::new(),
        productivity: vec![{
            let mut created = crate::records::create_productivity(
                &mut state,
                &mut store,
                &productivity_draft("Lajeado", 0, 2024),
            )
            .unwrap();
            created.id = String::from("p1");
            created
        }],
        users: Vec::new(),
    };
    apply_import(&mut state, &mut store, payload).unwrap();

    // The user list is never replaced by an absent one.
    assert_eq!(state.users, default_users());
    assert!(state.infractions.is_empty());
    assert_eq!(state.productivity.len(), 1);
}

#[test]
fn test_apply_import_with_users_replaces_account_list() {
    let (mut state, mut store) = fresh_dashboard();

    let raw = r#"{
        "data": {
            "infractions": [],
            "productivity": [],
            "users": [{
                "id": "7", "username": "cap", "role": "USER", "rank": "Cap"
            }]
        }
    }"#;
    let payload: BackupPayload = parse_import(raw).unwrap();
    apply_import(&mut state, &mut store, payload).unwrap();

    assert_eq!(state.users.len(), 1);
    assert_eq!(state.users[0].username, "cap");
    // Password was absent in the document and defaults to empty.
    assert!(state.users[0].password.is_empty());
    let stored: Vec<siop_domain::User> = load_collection(&store, StoreKey::Users).unwrap();
    assert_eq!(stored, state.users);
}

#[test]
fn test_export_then_import_round_trips_state() {
    let (mut state, mut store) = fresh_dashboard();
    create_infraction(
        &mut state,
        &mut store,
        &infraction_draft("Lajeado", 3, 2024, ("10", "5", "2", "1")),
    )
    .unwrap();
    crate::records::create_productivity(
        &mut state,
        &mut store,
        &productivity_draft("Encantado", 3, 2024),
    )
    .unwrap();

    let raw: String = export_json(&state).unwrap();

    let (mut restored, mut other_store) = fresh_dashboard();
    let payload: BackupPayload = parse_import(&raw).unwrap();
    apply_import(&mut restored, &mut other_store, payload).unwrap();

    assert_eq!(restored.infractions, state.infractions);
    assert_eq!(restored.productivity, state.productivity);
    assert_eq!(restored.users, state.users);
}
