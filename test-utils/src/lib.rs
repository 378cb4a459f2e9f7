//! Clan Bot Test Utils
//!
//! Provides shared testing utilities for building unit tests for the clan bot. This crate
//! offers a builder pattern for creating test contexts with in-memory SQLite databases and
//! factories for seeding them with players and duel log rows.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_player_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_player_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let player = factory::player::PlayerFactory::new(db).points(100).build().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
