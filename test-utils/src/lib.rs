//! Deck Builder Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the deck
//! builder backend. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of five main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting decks and deck cards with sensible defaults
//! - **card_api**: In-process fake of the external card database that records requests
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_deck_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_deck_tables()
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
pub mod card_api;
pub mod context;
pub mod error;
pub mod factory;
