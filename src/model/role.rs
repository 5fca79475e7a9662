//! Club role hierarchy.
//!
//! Roles form a fixed total order. Authorization compares the rank of a user's
//! effective role (the highest role they hold) against the minimum role an
//! operation requires.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Club role, declared in ascending rank order.
///
/// The derived `Ord` follows declaration order, so comparing two roles is the
/// same as comparing their ranks.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Joueur,
    Capitaine,
    Support,
    Moderateur,
    Administrateur,
    Manager,
    Cofondateur,
    Fondateur,
    Owner,
}

impl Role {
    /// Role given to accounts created on first login.
    pub const DEFAULT: Role = Role::Joueur;

    /// Numeric rank, 1 for `joueur` up to 9 for `owner`.
    pub fn rank(self) -> u8 {
        match self {
            Role::Joueur => 1,
            Role::Capitaine => 2,
            Role::Support => 3,
            Role::Moderateur => 4,
            Role::Administrateur => 5,
            Role::Manager => 6,
            Role::Cofondateur => 7,
            Role::Fondateur => 8,
            Role::Owner => 9,
        }
    }

    /// Whether a holder of `self` may perform an operation requiring `minimum`.
    pub fn satisfies(self, minimum: Role) -> bool {
        self.rank() >= minimum.rank()
    }
}
