//! Advice Bot Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the advice
//! bot. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and customizable table schemas, plus factories for seeding records.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Seed helpers for users and participation records
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Participation;
//!
//! #[tokio::test]
//! async fn test_participation() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Participation)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
