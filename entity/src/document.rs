use serde::{Deserialize, Serialize};

use crate::{
    communique, composition, log_entry, matches, player, sanction, settings, ticket, user,
};

/// The whole persisted state.
///
/// Every section defaults when absent so a document written by an older
/// version gains missing top-level keys on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Model {
    pub users: Vec<user::Model>,
    /// Newest first.
    pub logs: Vec<log_entry::Model>,
    pub sanctions: Vec<sanction::Model>,
    pub tickets: Vec<ticket::Model>,
    pub matches: Vec<matches::Model>,
    pub compositions: Vec<composition::Model>,
    pub communiques: Vec<communique::Model>,
    pub roster: Vec<player::Model>,
    pub settings: settings::Model,
}
