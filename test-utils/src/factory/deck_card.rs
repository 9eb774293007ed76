//! Deck card factory for creating test card rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test deck cards with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::deck_card::DeckCardFactory;
///
/// let card = DeckCardFactory::new(&db, deck.id)
///     .card_name("Ash Blossom & Joyous Spring")
///     .quantity(3)
///     .tags(&["hand trap"])
///     .build()
///     .await?;
/// ```
pub struct DeckCardFactory<'a> {
    db: &'a DatabaseConnection,
    deck_id: i32,
    card_name: String,
    area: String,
    quantity: i32,
    card_type: Option<String>,
    custom_tags: String,
}

impl<'a> DeckCardFactory<'a> {
    /// Creates a new DeckCardFactory with default values.
    ///
    /// Defaults:
    /// - card_name: `"Card {id}"` where id is auto-incremented
    /// - area: `"MAIN"`
    /// - quantity: `1`
    /// - card_type: `"Normal Monster"`
    /// - custom_tags: `"[]"`
    pub fn new(db: &'a DatabaseConnection, deck_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            deck_id,
            card_name: format!("Card {}", id),
            area: "MAIN".to_string(),
            quantity: 1,
            card_type: Some("Normal Monster".to_string()),
            custom_tags: "[]".to_string(),
        }
    }

    pub fn card_name(mut self, card_name: impl Into<String>) -> Self {
        self.card_name = card_name.into();
        self
    }

    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn card_type(mut self, card_type: Option<String>) -> Self {
        self.card_type = card_type;
        self
    }

    /// Sets the tags, stored JSON-encoded the same way the server does.
    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.custom_tags = serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_string());
        self
    }

    /// Stores the given text verbatim in `custom_tags`, encoded or not.
    pub fn raw_tags(mut self, custom_tags: impl Into<String>) -> Self {
        self.custom_tags = custom_tags.into();
        self
    }

    /// Builds and inserts the deck card entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::deck_card::Model)` - Created deck card entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::deck_card::Model, DbErr> {
        entity::deck_card::ActiveModel {
            id: ActiveValue::NotSet,
            deck_id: ActiveValue::Set(self.deck_id),
            card_name: ActiveValue::Set(self.card_name),
            area: ActiveValue::Set(self.area),
            quantity: ActiveValue::Set(self.quantity),
            card_type: ActiveValue::Set(self.card_type),
            image_url: ActiveValue::Set(None),
            attribute: ActiveValue::Set(None),
            level: ActiveValue::Set(None),
            atk: ActiveValue::Set(None),
            defense: ActiveValue::Set(None),
            custom_tags: ActiveValue::Set(self.custom_tags),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a MAIN deck card with default values for the given deck.
pub async fn create_deck_card(
    db: &DatabaseConnection,
    deck_id: i32,
) -> Result<entity::deck_card::Model, DbErr> {
    DeckCardFactory::new(db, deck_id).build().await
}
