//! Player factory for creating test roster entries.

use crate::factory::helpers::next_id;
use chrono::Utc;

/// Creates a roster player named `pseudo` in the starting line-up.
pub fn player(pseudo: impl Into<String>) -> entity::player::Model {
    entity::player::Model {
        id: format!("player-{}", next_id()),
        pseudo: pseudo.into(),
        position: "Titulaire".to_string(),
        discord_id: None,
        joined_at: Utc::now(),
    }
}
