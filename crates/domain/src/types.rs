// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::period::Period;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Access role for a stored account.
///
/// Roles gate mutation: only `Admin` may change records, accounts, or
/// backups. `Comando` and `User` are read-only views over the same data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Full access: record mutation, account management, backup restore.
    Admin,
    /// Command staff: read-only access to every dashboard.
    Comando,
    /// Regular account: read-only access.
    User,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "COMANDO" => Ok(Self::Comando),
            "USER" => Ok(Self::User),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// Converts this role to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Comando => "COMANDO",
            Self::User => "USER",
        }
    }
}

/// A stored operator account.
///
/// The username is the case-insensitive unique key; it is normalized to
/// lowercase at construction. The password is stored in clear for local
/// comparison (single-tenant, local-only tool).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque stable identifier.
    pub id: String,
    /// Login name, lowercase, unique case-insensitively.
    pub username: String,
    /// The access role.
    pub role: Role,
    /// Rank (posto/graduação), informational only.
    pub rank: String,
    /// Local credential. Old backups may omit it.
    #[serde(default)]
    pub password: String,
}

impl User {
    /// Creates a new account.
    ///
    /// The username is normalized to lowercase to ensure case-insensitive
    /// uniqueness.
    ///
    /// # Arguments
    ///
    /// * `id` - Opaque stable identifier
    /// * `username` - Login name (will be normalized to lowercase)
    /// * `role` - The access role
    /// * `rank` - Rank label
    /// * `password` - Local credential
    #[must_use]
    pub fn new(id: String, username: &str, role: Role, rank: &str, password: &str) -> Self {
        Self {
            id,
            username: username.to_lowercase(),
            role,
            rank: rank.to_string(),
            password: password.to_string(),
        }
    }
}

/// The authenticated account with its password stripped.
///
/// Exists in memory and in the single persisted `current_user` slot;
/// created on successful login, destroyed on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The account identifier.
    pub id: String,
    /// The login name.
    pub username: String,
    /// The access role.
    pub role: Role,
    /// The rank label.
    pub rank: String,
}

impl Session {
    /// Builds the session view of an account, dropping the password.
    #[must_use]
    pub fn for_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            role: user.role,
            rank: user.rank.clone(),
        }
    }
}

/// One month of traffic-infraction counts (AITs) for one municipality.
///
/// `total` is always derived from the four category counts at write time
/// and is never independently editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficInfraction {
    /// Opaque stable identifier.
    pub id: String,
    /// Municipality name; must be a member of [`crate::MUNICIPALITIES`].
    pub city: String,
    /// Zero-based reporting month (0 = Janeiro).
    pub month: u8,
    /// Reporting year.
    pub year: u16,
    /// Infractions against cars.
    pub cars: u32,
    /// Infractions against motorcycles.
    pub motorcycles: u32,
    /// Infractions against trucks.
    pub trucks: u32,
    /// Infractions against other vehicle categories.
    pub others: u32,
    /// Derived sum of the four category counts.
    pub total: u32,
    /// Creation instant, unix epoch milliseconds. Preserved across updates.
    pub timestamp: i64,
}

impl TrafficInfraction {
    /// Sums the four category counts without overflow.
    #[must_use]
    pub const fn sum_counts(cars: u32, motorcycles: u32, trucks: u32, others: u32) -> u32 {
        cars.saturating_add(motorcycles)
            .saturating_add(trucks)
            .saturating_add(others)
    }

    /// Recomputes `total` from the four category counts.
    pub const fn recompute_total(&mut self) {
        self.total = Self::sum_counts(self.cars, self.motorcycles, self.trucks, self.others);
    }
}

/// One month of operational-productivity statistics for one municipality.
///
/// Unlike [`TrafficInfraction`] there is no derived total; every field is
/// entered independently. Field names serialize camelCase to match the
/// stored and exported format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityRecord {
    /// Opaque stable identifier.
    pub id: String,
    /// Municipality name; must be a member of [`crate::MUNICIPALITIES`].
    pub city: String,
    /// Zero-based reporting month (0 = Janeiro).
    pub month: u8,
    /// Reporting year.
    pub year: u16,
    /// Boletins de atendimento.
    pub ba: u32,
    /// Comunicações de ocorrência policial.
    pub cop: u32,
    /// Termos circunstanciados.
    pub tc: u32,
    /// Fugitives recaptured.
    pub fugitives: u32,
    /// Vehicles inspected.
    pub vehicles_inspected: u32,
    /// People approached.
    pub people_approached: u32,
    /// Drugs seized, kilograms. The only fractional field.
    pub drugs_kg: f64,
    /// Weapons seized.
    pub weapons: u32,
    /// Arrests made.
    pub arrests: u32,
    /// Creation instant, unix epoch milliseconds. Preserved across updates.
    pub timestamp: i64,
}

/// Common view over the two municipal record types.
///
/// The projection functions filter and group through this trait so they
/// work identically for infractions and productivity.
pub trait MunicipalRecord {
    /// The municipality this record belongs to.
    fn city(&self) -> &str;

    /// The reporting period this record covers.
    fn period(&self) -> Period;
}

impl MunicipalRecord for TrafficInfraction {
    fn city(&self) -> &str {
        &self.city
    }

    fn period(&self) -> Period {
        Period::new(self.year, self.month)
    }
}

impl MunicipalRecord for ProductivityRecord {
    fn city(&self) -> &str {
        &self.city
    }

    fn period(&self) -> Period {
        Period::new(self.year, self.month)
    }
}
