//! Service layer between controllers and repositories.
//!
//! Services validate input, enforce rank rules that depend on the target of an
//! operation, record audit entries and trigger bot notifications. They work
//! with domain models and never see DTOs or the session.

pub mod audit;
pub mod auth;
pub mod bot;
pub mod communique;
pub mod composition;
pub mod matches;
pub mod roster;
pub mod sanction;
pub mod settings;
pub mod ticket;
pub mod user;

#[cfg(test)]
mod test;
