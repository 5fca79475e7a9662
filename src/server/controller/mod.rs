//! HTTP handlers.
//!
//! Controllers authorize the caller through `AuthGuard`, convert DTOs into
//! parameter models, call a service and convert the result back into DTOs.

pub mod audit;
pub mod auth;
pub mod bot;
pub mod communique;
pub mod composition;
pub mod matches;
pub mod owner;
pub mod roster;
pub mod sanction;
pub mod settings;
pub mod ticket;
pub mod user;

#[cfg(test)]
mod test;
