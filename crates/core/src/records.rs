// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record mutators with synchronous store write-through.
//!
//! Deletion is confirmation-gated at the caller: these functions trust that
//! the operator already confirmed the destructive intent.

use crate::error::CoreError;
use crate::state::DashboardState;
use siop_domain::{
    DomainError, ProductivityRecord, Role, TrafficInfraction, User, coerce_count, coerce_quantity,
    validate_city, validate_month,
};
use siop_persistence::{Store, StoreKey, save_collection};
use time::OffsetDateTime;
use tracing::{info, warn};

/// Raw form input for a traffic-infraction record, prior to coercion.
///
/// The count fields carry the operator's text verbatim; blank or invalid
/// entries coerce to zero under the permissive-input policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfractionDraft {
    /// Municipality name.
    pub city: String,
    /// Zero-based reporting month.
    pub month: u8,
    /// Reporting year.
    pub year: u16,
    /// Raw car-infraction count.
    pub cars: String,
    /// Raw motorcycle-infraction count.
    pub motorcycles: String,
    /// Raw truck-infraction count.
    pub trucks: String,
    /// Raw other-category count.
    pub others: String,
}

/// Raw form input for a productivity record, prior to coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductivityDraft {
    /// Municipality name.
    pub city: String,
    /// Zero-based reporting month.
    pub month: u8,
    /// Reporting year.
    pub year: u16,
    /// Raw boletins de atendimento count.
    pub ba: String,
    /// Raw ocorrência policial count.
    pub cop: String,
    /// Raw termos circunstanciados count.
    pub tc: String,
    /// Raw recaptured-fugitives count.
    pub fugitives: String,
    /// Raw vehicles-inspected count.
    pub vehicles_inspected: String,
    /// Raw people-approached count.
    pub people_approached: String,
    /// Raw drugs seized in kilograms; the only fractional field.
    pub drugs_kg: String,
    /// Raw weapons-seized count.
    pub weapons: String,
    /// Raw arrests count.
    pub arrests: String,
}

/// Generates an opaque record identifier from the creation instant and a
/// random suffix.
fn new_record_id() -> String {
    let nanos: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos();
    format!("{nanos:x}-{:08x}", rand::random::<u32>())
}

/// The current instant as unix epoch milliseconds.
fn now_millis() -> i64 {
    let millis: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    i64::try_from(millis).unwrap_or(i64::MAX)
}

fn infraction_from_draft(draft: &InfractionDraft, id: String, timestamp: i64) -> TrafficInfraction {
    let mut record: TrafficInfraction = TrafficInfraction {
        id,
        city: draft.city.clone(),
        month: draft.month,
        year: draft.year,
        cars: coerce_count(&draft.cars),
        motorcycles: coerce_count(&draft.motorcycles),
        trucks: coerce_count(&draft.trucks),
        others: coerce_count(&draft.others),
        total: 0,
        timestamp,
    };
    record.recompute_total();
    record
}

fn productivity_from_draft(
    draft: &ProductivityDraft,
    id: String,
    timestamp: i64,
) -> ProductivityRecord {
    ProductivityRecord {
        id,
        city: draft.city.clone(),
        month: draft.month,
        year: draft.year,
        ba: coerce_count(&draft.ba),
        cop: coerce_count(&draft.cop),
        tc: coerce_count(&draft.tc),
        fugitives: coerce_count(&draft.fugitives),
        vehicles_inspected: coerce_count(&draft.vehicles_inspected),
        people_approached: coerce_count(&draft.people_approached),
        drugs_kg: coerce_quantity(&draft.drugs_kg),
        weapons: coerce_count(&draft.weapons),
        arrests: coerce_count(&draft.arrests),
        timestamp,
    }
}

/// Creates a traffic-infraction record: coerces the four counts, derives
/// `total`, assigns a fresh id and creation timestamp, appends, persists.
///
/// # Errors
///
/// Returns an error if the city or month is invalid, or the write-through
/// fails.
pub fn create_infraction<S: Store + ?Sized>(
    state: &mut DashboardState,
    store: &mut S,
    draft: &InfractionDraft,
) -> Result<TrafficInfraction, CoreError> {
    validate_city(&draft.city)?;
    validate_month(draft.month)?;

    let record: TrafficInfraction = infraction_from_draft(draft, new_record_id(), now_millis());
    state.infractions.push(record.clone());
    save_collection(store, StoreKey::Infractions, &state.infractions)?;
    info!(id = %record.id, city = %record.city, total = record.total, "infraction recorded");
    Ok(record)
}

/// Replaces the infraction with `id`, recomputing `total` and preserving
/// the original id and creation timestamp.
///
/// # Errors
///
/// Returns `CoreError::RecordNotFound` if no record carries `id`, a domain
/// error on invalid city/month, or a persistence error if the write fails.
pub fn update_infraction<S: Store + ?Sized>(
    state: &mut DashboardState,
    store: &mut S,
    id: &str,
    draft: &InfractionDraft,
) -> Result<TrafficInfraction, CoreError> {
    validate_city(&draft.city)?;
    validate_month(draft.month)?;

    let Some(existing) = state.infractions.iter_mut().find(|record| record.id == id) else {
        return Err(CoreError::RecordNotFound { id: id.to_string() });
    };

    let updated: TrafficInfraction =
        infraction_from_draft(draft, existing.id.clone(), existing.timestamp);
    *existing = updated.clone();
    save_collection(store, StoreKey::Infractions, &state.infractions)?;
    info!(id = %updated.id, city = %updated.city, "infraction updated");
    Ok(updated)
}

/// Removes the infraction with `id` and persists the collection.
///
/// # Errors
///
/// Returns `CoreError::RecordNotFound` if no record carries `id`, or a
/// persistence error if the write fails.
pub fn delete_infraction<S: Store + ?Sized>(
    state: &mut DashboardState,
    store: &mut S,
    id: &str,
) -> Result<(), CoreError> {
    let before: usize = state.infractions.len();
    state.infractions.retain(|record| record.id != id);
    if state.infractions.len() == before {
        return Err(CoreError::RecordNotFound { id: id.to_string() });
    }
    save_collection(store, StoreKey::Infractions, &state.infractions)?;
    info!(id, "infraction deleted");
    Ok(())
}

/// Creates a productivity record. Identical lifecycle to
/// [`create_infraction`] but with no derived total: every field is
/// independently coerced and stored.
///
/// # Errors
///
/// Returns an error if the city or month is invalid, or the write-through
/// fails.
pub fn create_productivity<S: Store + ?Sized>(
    state: &mut DashboardState,
    store: &mut S,
    draft: &ProductivityDraft,
) -> Result<ProductivityRecord, CoreError> {
    validate_city(&draft.city)?;
    validate_month(draft.month)?;

    let record: ProductivityRecord =
        productivity_from_draft(draft, new_record_id(), now_millis());
    state.productivity.push(record.clone());
    save_collection(store, StoreKey::Productivity, &state.productivity)?;
    info!(id = %record.id, city = %record.city, "productivity recorded");
    Ok(record)
}

/// Replaces the productivity record with `id`, preserving the original id
/// and creation timestamp.
///
/// # Errors
///
/// Returns `CoreError::RecordNotFound` if no record carries `id`, a domain
/// error on invalid city/month, or a persistence error if the write fails.
pub fn update_productivity<S: Store + ?Sized>(
    state: &mut DashboardState,
    store: &mut S,
    id: &str,
    draft: &ProductivityDraft,
) -> Result<ProductivityRecord, CoreError> {
    validate_city(&draft.city)?;
    validate_month(draft.month)?;

    let Some(existing) = state.productivity.iter_mut().find(|record| record.id == id) else {
        return Err(CoreError::RecordNotFound { id: id.to_string() });
    };

    let updated: ProductivityRecord =
        productivity_from_draft(draft, existing.id.clone(), existing.timestamp);
    *existing = updated.clone();
    save_collection(store, StoreKey::Productivity, &state.productivity)?;
    info!(id = %updated.id, city = %updated.city, "productivity updated");
    Ok(updated)
}

/// Removes the productivity record with `id` and persists the collection.
///
/// # Errors
///
/// Returns `CoreError::RecordNotFound` if no record carries `id`, or a
/// persistence error if the write fails.
pub fn delete_productivity<S: Store + ?Sized>(
    state: &mut DashboardState,
    store: &mut S,
    id: &str,
) -> Result<(), CoreError> {
    let before: usize = state.productivity.len();
    state.productivity.retain(|record| record.id != id);
    if state.productivity.len() == before {
        return Err(CoreError::RecordNotFound { id: id.to_string() });
    }
    save_collection(store, StoreKey::Productivity, &state.productivity)?;
    info!(id, "productivity deleted");
    Ok(())
}

/// Adds an account. The username is stored lowercase and must be unique
/// case-insensitively.
///
/// # Errors
///
/// Returns a domain error on an empty or duplicate username, or a
/// persistence error if the write fails.
pub fn create_user<S: Store + ?Sized>(
    state: &mut DashboardState,
    store: &mut S,
    username: &str,
    role: Role,
    rank: &str,
    password: &str,
) -> Result<User, CoreError> {
    let user: User = User::new(new_record_id(), username, role, rank, password);
    if user.username.trim().is_empty() {
        return Err(DomainError::InvalidUsername(String::from("username cannot be empty")).into());
    }
    if state
        .users
        .iter()
        .any(|existing| existing.username == user.username)
    {
        return Err(DomainError::DuplicateUsername(user.username).into());
    }

    state.users.push(user.clone());
    save_collection(store, StoreKey::Users, &state.users)?;
    info!(username = %user.username, role = %user.role, "account created");
    Ok(user)
}

/// Removes the account with `id` and persists the user list.
///
/// Removing the last ADMIN account is permitted (no safeguard exists in
/// this system) but logged, since it leaves no way to mutate data until a
/// reset.
///
/// # Errors
///
/// Returns `CoreError::UserNotFound` if no account carries `id`, or a
/// persistence error if the write fails.
pub fn delete_user<S: Store + ?Sized>(
    state: &mut DashboardState,
    store: &mut S,
    id: &str,
) -> Result<(), CoreError> {
    let before: usize = state.users.len();
    state.users.retain(|user| user.id != id);
    if state.users.len() == before {
        return Err(CoreError::UserNotFound { id: id.to_string() });
    }

    if !state.users.iter().any(|user| user.role == Role::Admin) {
        warn!("user list left without an ADMIN account");
    }
    save_collection(store, StoreKey::Users, &state.users)?;
    info!(id, "account deleted");
    Ok(())
}
