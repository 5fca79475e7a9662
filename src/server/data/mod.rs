//! Repository layer over the JSON document store.
//!
//! Each repository borrows the shared `JsonStore` and exposes the reads and
//! mutations of one document section. Repositories take parameter models in
//! and hand domain models out, so services never see raw entity records. A
//! single repository call is one locked load-mutate-save cycle.

pub mod audit_log;
pub mod communique;
pub mod composition;
pub mod matches;
pub mod roster;
pub mod sanction;
pub mod settings;
pub mod store;
pub mod ticket;
pub mod user;

#[cfg(test)]
mod test;
