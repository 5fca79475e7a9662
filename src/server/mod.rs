//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and keeps all persistent state
//! in a single JSON document on disk (`data::store::JsonStore`). A separate
//! Discord bot process is reached through an outbound webhook and reports
//! liveness through an inbound heartbeat endpoint.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Validation, rank rules, audit entries and bot notifications
//! - **Data Layer** (`data/`) - Load-mutate-save cycles over the JSON document
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session keys and the role-based `AuthGuard`
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (store, HTTP clients, bot bridge)
//! - **Startup** (`startup`) - Initialization of the store, sessions, and clients
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cron job expiring timed suspensions
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** resolves the session user through `AuthGuard` and checks the required role
//! 3. **Service** validates input and applies rank rules
//! 4. **Data** runs one locked load-mutate-save cycle against the document
//! 5. **Service** records the audit entry and enqueues any bot notification
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
pub mod testing;
