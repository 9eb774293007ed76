use sea_orm::DatabaseConnection;

use crate::server::{data::deck_card::DeckCardRepository, error::AppError};

/// Tag management for individual deck cards.
pub struct DeckCardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeckCardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn card_exists(&self, card_id: i32) -> Result<bool, AppError> {
        let card = DeckCardRepository::new(self.db).get_by_id(card_id).await?;

        Ok(card.is_some())
    }

    /// Replaces the tags of one card
    ///
    /// # Returns
    /// - `Ok(Some(tags))` - The tags now stored on the card
    /// - `Ok(None)` - No card with the given ID exists
    pub async fn update_tags(
        &self,
        card_id: i32,
        tags: Vec<String>,
    ) -> Result<Option<Vec<String>>, AppError> {
        let updated = DeckCardRepository::new(self.db)
            .update_tags(card_id, &tags)
            .await?;

        Ok(updated.map(|_| tags))
    }

    /// Replaces the tags of every card in a deck whose name matches `card_name`, ignoring case.
    ///
    /// # Returns
    /// - `Ok(ids)` - IDs of the updated cards in ID order; empty when nothing matched
    pub async fn batch_update_tags(
        &self,
        deck_id: i32,
        card_name: &str,
        tags: &[String],
    ) -> Result<Vec<i32>, AppError> {
        let repo = DeckCardRepository::new(self.db);
        let wanted = card_name.to_lowercase();

        let ids: Vec<i32> = repo
            .get_by_deck(deck_id)
            .await?
            .into_iter()
            .filter(|card| card.card_name.to_lowercase() == wanted)
            .map(|card| card.id)
            .collect();

        let updated = repo.update_tags_many(&ids, tags).await?;
        tracing::debug!(
            "Tagged {} cards named {:?} in deck {}",
            updated,
            card_name,
            deck_id
        );

        Ok(ids)
    }
}
