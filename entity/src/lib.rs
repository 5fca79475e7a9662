//! Persisted document schema for the club panel.
//!
//! Every type in this crate mirrors a section of the single JSON document the
//! panel stores on disk. The types carry no behaviour beyond serde; the server
//! converts them into domain models at the repository boundary.

pub mod communique;
pub mod composition;
pub mod document;
pub mod log_entry;
pub mod matches;
pub mod player;
pub mod prelude;
pub mod sanction;
pub mod settings;
pub mod ticket;
pub mod user;
