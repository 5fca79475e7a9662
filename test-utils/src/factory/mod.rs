//! Builders for stored records.
//!
//! Factories return plain entity models with unique ids and sensible defaults.
//! Seed them into a document with `TestBuilder`.

pub mod helpers;
pub mod log_entry;
pub mod matches;
pub mod player;
pub mod sanction;
pub mod ticket;
pub mod user;
