//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a deck holding `card_count` MAIN cards of quantity 1 each.
///
/// The deck's `total_cards` is set to `card_count` so the stored row honours the
/// total-count invariant.
///
/// # Arguments
/// - `db` - Database connection
/// - `card_count` - Number of card rows to insert
///
/// # Returns
/// - `Ok((deck, cards))` - Created deck and its card rows in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_deck_with_cards(
    db: &DatabaseConnection,
    card_count: i32,
) -> Result<(entity::deck::Model, Vec<entity::deck_card::Model>), DbErr> {
    let deck = crate::factory::deck::DeckFactory::new(db)
        .total_cards(card_count)
        .build()
        .await?;

    let mut cards = Vec::with_capacity(card_count.max(0) as usize);
    for _ in 0..card_count {
        cards.push(crate::factory::deck_card::create_deck_card(db, deck.id).await?);
    }

    Ok((deck, cards))
}
