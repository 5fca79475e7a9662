//! Club Panel Test Utils
//!
//! Shared testing utilities for the club panel server. Every test gets its own
//! temporary directory holding the JSON document, plus an in-memory session.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder that seeds the document written to disk
//! - **TestContext**: Temporary data directory and session for one test
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for stored records with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory::user::UserFactory};
//!
//! #[tokio::test]
//! async fn lists_users() -> Result<(), AppError> {
//!     let test = TestBuilder::new()
//!         .with_user(UserFactory::new().roles(&["moderateur"]).build())
//!         .build()?;
//!
//!     let store = JsonStore::new(test.data_path(), bootstrap_account());
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
