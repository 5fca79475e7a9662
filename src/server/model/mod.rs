//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. Parameter types carry
//! the input of a single operation from controller to service to repository.

pub mod audit;
pub mod bot;
pub mod communique;
pub mod composition;
pub mod matches;
pub mod roster;
pub mod sanction;
pub mod settings;
pub mod ticket;
pub mod user;
