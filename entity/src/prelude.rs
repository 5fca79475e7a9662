pub use super::communique::Model as Communique;
pub use super::composition::Model as Composition;
pub use super::document::Model as Document;
pub use super::log_entry::Model as LogEntry;
pub use super::matches::{MatchStatus, Model as Match};
pub use super::player::Model as Player;
pub use super::sanction::{Model as Sanction, SanctionKind};
pub use super::settings::Model as Settings;
pub use super::ticket::{Model as Ticket, TicketStatus};
pub use super::user::Model as User;
