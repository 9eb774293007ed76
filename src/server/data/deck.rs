use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::deck::{CreateDeckParam, UpdateDeckParam};

/// Deck rows paired with their card rows, cards ordered by ID.
pub type DeckWithCards = (entity::deck::Model, Vec<entity::deck_card::Model>);

/// Repository for deck rows.
///
/// Generic over the connection so the service can run it inside a transaction.
pub struct DeckRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DeckRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new deck stamped with the current time
    pub async fn create(&self, param: CreateDeckParam) -> Result<entity::deck::Model, DbErr> {
        entity::deck::ActiveModel {
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(Utc::now()),
            total_cards: ActiveValue::Set(param.total_cards),
            raw_list: ActiveValue::Set(param.raw_list),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites the raw list and total of an existing deck, and its name when one is given.
    ///
    /// `created_at` is left untouched.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated deck row
    /// - `Err(DbErr::RecordNotUpdated)` - No deck with the given ID exists
    pub async fn update(&self, param: UpdateDeckParam) -> Result<entity::deck::Model, DbErr> {
        entity::deck::ActiveModel {
            id: ActiveValue::Unchanged(param.id),
            name: param.name.map_or(ActiveValue::NotSet, ActiveValue::Set),
            total_cards: ActiveValue::Set(param.total_cards),
            raw_list: ActiveValue::Set(param.raw_list),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Gets a deck and its cards by deck ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<DeckWithCards>, DbErr> {
        let Some(deck) = entity::prelude::Deck::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let cards = entity::prelude::DeckCard::find()
            .filter(entity::deck_card::Column::DeckId.eq(id))
            .order_by_asc(entity::deck_card::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some((deck, cards)))
    }

    /// Gets every deck with its cards, newest first.
    ///
    /// Decks created within the same instant are ordered by descending ID.
    pub async fn get_all(&self) -> Result<Vec<DeckWithCards>, DbErr> {
        let decks = entity::prelude::Deck::find()
            .order_by_desc(entity::deck::Column::CreatedAt)
            .order_by_desc(entity::deck::Column::Id)
            .all(self.db)
            .await?;

        if decks.is_empty() {
            return Ok(Vec::new());
        }

        let deck_ids: Vec<i32> = decks.iter().map(|deck| deck.id).collect();
        let cards = entity::prelude::DeckCard::find()
            .filter(entity::deck_card::Column::DeckId.is_in(deck_ids))
            .order_by_asc(entity::deck_card::Column::Id)
            .all(self.db)
            .await?;

        let mut cards_by_deck: HashMap<i32, Vec<entity::deck_card::Model>> = HashMap::new();
        for card in cards {
            cards_by_deck.entry(card.deck_id).or_default().push(card);
        }

        Ok(decks
            .into_iter()
            .map(|deck| {
                let cards = cards_by_deck.remove(&deck.id).unwrap_or_default();
                (deck, cards)
            })
            .collect())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Deck::find()
            .filter(entity::deck::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a deck along with all of its cards
    ///
    /// # Returns
    /// - `Ok(true)` - The deck existed and was deleted
    /// - `Ok(false)` - No deck with the given ID exists
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::DeckCard::delete_many()
            .filter(entity::deck_card::Column::DeckId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Deck::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod test;
