// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Versioned JSON backup codec.
//!
//! Export always writes the current envelope. Import is deliberately
//! tolerant and accepts three historical shapes: the current enveloped
//! document, a flat object carrying the collections at the top level, and
//! the oldest legacy form of a bare infraction array.

use crate::error::{CoreError, ImportError};
use crate::state::DashboardState;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use siop_domain::{ProductivityRecord, Role, TrafficInfraction, User};
use siop_persistence::{Store, StoreKey, save_collection};
use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;
use tracing::{info, warn};

/// Envelope version written on export.
pub const BACKUP_VERSION: &str = "1.1";

/// Origin marker written on export so a document can be recognized as one
/// of ours. Import does not check it.
pub const BACKUP_ORIGIN: &str = "22BPM_DASHBOARD";

/// The full backup envelope as written on export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupDocument {
    /// Envelope format version.
    pub version: String,
    /// Export instant, ISO-8601.
    pub timestamp: String,
    /// Producing application marker.
    pub origin: String,
    /// The three collections.
    pub data: BackupPayload,
}

/// The collections carried by a backup. Each one defaults to empty so a
/// document may omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackupPayload {
    /// Traffic-infraction records.
    #[serde(default)]
    pub infractions: Vec<TrafficInfraction>,
    /// Productivity records.
    #[serde(default)]
    pub productivity: Vec<ProductivityRecord>,
    /// Operator accounts, passwords included.
    #[serde(default)]
    pub users: Vec<User>,
}

impl BackupPayload {
    fn is_empty(&self) -> bool {
        self.infractions.is_empty() && self.productivity.is_empty() && self.users.is_empty()
    }
}

/// Builds a backup document from the current state.
///
/// # Errors
///
/// Returns `CoreError::ExportFailed` if the export timestamp cannot be
/// formatted.
pub fn export(state: &DashboardState) -> Result<BackupDocument, CoreError> {
    let timestamp: String = OffsetDateTime::now_utc()
        .format(&Iso8601::DEFAULT)
        .map_err(|e| CoreError::ExportFailed(e.to_string()))?;

    Ok(BackupDocument {
        version: BACKUP_VERSION.to_string(),
        timestamp,
        origin: BACKUP_ORIGIN.to_string(),
        data: BackupPayload {
            infractions: state.infractions.clone(),
            productivity: state.productivity.clone(),
            users: state.users.clone(),
        },
    })
}

/// Serializes a backup of the current state to pretty-printed JSON.
///
/// # Errors
///
/// Returns `CoreError::ExportFailed` if the timestamp cannot be formatted
/// or the document cannot be serialized.
pub fn export_json(state: &DashboardState) -> Result<String, CoreError> {
    let document: BackupDocument = export(state)?;
    serde_json::to_string_pretty(&document).map_err(|e| CoreError::ExportFailed(e.to_string()))
}

/// Parses backup text into a payload, accepting any of the supported
/// historical shapes.
///
/// # Errors
///
/// Returns `ImportError::MalformedDocument` when the text is not JSON or
/// the collections do not deserialize, and `ImportError::EmptyOrInvalid`
/// when the document parses but carries no records and no accounts.
pub fn parse_import(raw: &str) -> Result<BackupPayload, ImportError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| ImportError::MalformedDocument(e.to_string()))?;

    let payload: BackupPayload = if value.is_array() {
        // Oldest exports were a bare infraction array.
        let infractions: Vec<TrafficInfraction> = serde_json::from_value(value)
            .map_err(|e| ImportError::MalformedDocument(e.to_string()))?;
        BackupPayload {
            infractions,
            ..BackupPayload::default()
        }
    } else {
        let mut body: Value = value.get("data").cloned().unwrap_or(value);
        // A collection field that is present but not an array counts as
        // empty rather than failing the whole document.
        if let Some(map) = body.as_object_mut() {
            for field in ["infractions", "productivity", "users"] {
                if map.get(field).is_some_and(|entry| !entry.is_array()) {
                    map.remove(field);
                }
            }
        }
        serde_json::from_value(body).map_err(|e| ImportError::MalformedDocument(e.to_string()))?
    };

    if payload.is_empty() {
        return Err(ImportError::EmptyOrInvalid);
    }
    Ok(payload)
}

/// Applies a parsed backup to the state and persists every replaced
/// collection.
///
/// Infractions and productivity always replace the current collections,
/// empty or not. The user list replaces only when the backup carries at
/// least one account, so an old backup without accounts cannot lock the
/// operator out.
///
/// # Errors
///
/// Returns a persistence error if any write-through fails. An error leaves
/// earlier collections already written; the store is not transactional.
pub fn apply_import<S: Store + ?Sized>(
    state: &mut DashboardState,
    store: &mut S,
    payload: BackupPayload,
) -> Result<(), CoreError> {
    let BackupPayload {
        infractions,
        productivity,
        users,
    } = payload;

    state.infractions = infractions;
    save_collection(store, StoreKey::Infractions, &state.infractions)?;
    state.productivity = productivity;
    save_collection(store, StoreKey::Productivity, &state.productivity)?;

    if users.is_empty() {
        info!("backup carried no accounts, current user list kept");
    } else {
        if !users.iter().any(|user| user.role == Role::Admin) {
            warn!("imported user list has no ADMIN account");
        }
        state.users = users;
        save_collection(store, StoreKey::Users, &state.users)?;
    }

    info!(
        infractions = state.infractions.len(),
        productivity = state.productivity.len(),
        users = state.users.len(),
        "backup restored"
    );
    Ok(())
}
