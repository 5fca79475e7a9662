//! API data transfer objects.
//!
//! Request and response bodies exchanged with the dashboard front end. The
//! server converts its domain models into these types at the controller
//! boundary.

pub mod api;
pub mod audit;
pub mod bot;
pub mod communique;
pub mod composition;
pub mod matches;
pub mod role;
pub mod roster;
pub mod sanction;
pub mod settings;
pub mod ticket;
pub mod user;
