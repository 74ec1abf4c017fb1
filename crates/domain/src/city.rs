// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// The municipalities covered by the battalion, sorted alphabetically.
///
/// This set is fixed: every stored record's `city` must be a member.
pub const MUNICIPALITIES: [&str; 20] = [
    "Arroio do Meio",
    "Canudos do Vale",
    "Capitão",
    "Coqueiro Baixo",
    "Cruzeiro do Sul",
    "Doutor Ricardo",
    "Encantado",
    "Forquetinha",
    "Lajeado",
    "Marques de Souza",
    "Muçum",
    "Nova Bréscia",
    "Pouso Novo",
    "Progresso",
    "Relvado",
    "Roca Sales",
    "Santa Clara do Sul",
    "Sério",
    "Travesseiro",
    "Vespasiano Correa",
];

/// Checks whether a city name is one of the covered municipalities.
///
/// The match is exact; city names are stored verbatim from the fixed set.
#[must_use]
pub fn is_known_city(city: &str) -> bool {
    MUNICIPALITIES.contains(&city)
}

/// Validates that a city name is a covered municipality.
///
/// # Errors
///
/// Returns `DomainError::UnknownCity` if the name is not in the fixed set.
pub fn validate_city(city: &str) -> Result<(), DomainError> {
    if is_known_city(city) {
        Ok(())
    } else {
        Err(DomainError::UnknownCity(city.to_string()))
    }
}
