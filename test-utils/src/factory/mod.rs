//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle the deck → card foreign key so tests
//! stay focused on the behaviour under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let deck = factory::deck::create_deck(&db).await?;
//!     let card = factory::deck_card::create_deck_card(&db, deck.id).await?;
//!
//!     // Create a deck together with a few cards
//!     let (deck, cards) = factory::helpers::create_deck_with_cards(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let card = factory::deck_card::DeckCardFactory::new(&db, deck.id)
//!     .card_name("Dark Magician")
//!     .area("EXTRA")
//!     .quantity(2)
//!     .build()
//!     .await?;
//! ```

pub mod deck;
pub mod deck_card;
pub mod helpers;

// Re-export commonly used factory functions for concise usage
pub use deck::create_deck;
pub use deck_card::create_deck_card;
