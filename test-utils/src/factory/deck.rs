//! Deck factory for creating test deck entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test decks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::deck::DeckFactory;
///
/// let deck = DeckFactory::new(&db)
///     .name("Blue-Eyes")
///     .total_cards(40)
///     .build()
///     .await?;
/// ```
pub struct DeckFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    created_at: DateTime<Utc>,
    total_cards: i32,
    raw_list: Option<String>,
}

impl<'a> DeckFactory<'a> {
    /// Creates a new DeckFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Deck {id}"` where id is auto-incremented
    /// - created_at: now
    /// - total_cards: `0`
    /// - raw_list: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Deck {}", id),
            created_at: Utc::now(),
            total_cards: 0,
            raw_list: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn total_cards(mut self, total_cards: i32) -> Self {
        self.total_cards = total_cards;
        self
    }

    pub fn raw_list(mut self, raw_list: impl Into<String>) -> Self {
        self.raw_list = Some(raw_list.into());
        self
    }

    /// Builds and inserts the deck entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::deck::Model)` - Created deck entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::deck::Model, DbErr> {
        entity::deck::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(self.created_at),
            total_cards: ActiveValue::Set(self.total_cards),
            raw_list: ActiveValue::Set(self.raw_list),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a deck with default values.
///
/// Shorthand for `DeckFactory::new(db).build().await`.
pub async fn create_deck(db: &DatabaseConnection) -> Result<entity::deck::Model, DbErr> {
    DeckFactory::new(db).build().await
}
