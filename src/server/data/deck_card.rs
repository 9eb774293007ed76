use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::deck::{encode_tags, NewDeckCardParam};

/// Repository for the card rows of decks.
pub struct DeckCardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DeckCardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts cards for a deck in the given order, each starting with no tags
    pub async fn create_many(
        &self,
        deck_id: i32,
        cards: Vec<NewDeckCardParam>,
    ) -> Result<Vec<entity::deck_card::Model>, DbErr> {
        let mut created = Vec::with_capacity(cards.len());

        for card in cards {
            let model = entity::deck_card::ActiveModel {
                deck_id: ActiveValue::Set(deck_id),
                card_name: ActiveValue::Set(card.card_name),
                area: ActiveValue::Set(card.area.to_string()),
                quantity: ActiveValue::Set(card.quantity),
                card_type: ActiveValue::Set(Some(card.card_type)),
                image_url: ActiveValue::Set(card.image_url),
                attribute: ActiveValue::Set(card.attribute),
                level: ActiveValue::Set(card.level),
                atk: ActiveValue::Set(card.atk),
                defense: ActiveValue::Set(card.defense),
                custom_tags: ActiveValue::Set(encode_tags(&[])),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            created.push(model);
        }

        Ok(created)
    }

    /// Deletes every card of a deck, returning how many were removed
    pub async fn delete_by_deck(&self, deck_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::DeckCard::delete_many()
            .filter(entity::deck_card::Column::DeckId.eq(deck_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::deck_card::Model>, DbErr> {
        entity::prelude::DeckCard::find_by_id(id).one(self.db).await
    }

    /// Gets all cards of a deck ordered by ID
    pub async fn get_by_deck(&self, deck_id: i32) -> Result<Vec<entity::deck_card::Model>, DbErr> {
        entity::prelude::DeckCard::find()
            .filter(entity::deck_card::Column::DeckId.eq(deck_id))
            .order_by_asc(entity::deck_card::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the tags of a single card
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated card
    /// - `Ok(None)` - No card with the given ID exists
    pub async fn update_tags(
        &self,
        id: i32,
        tags: &[String],
    ) -> Result<Option<entity::deck_card::Model>, DbErr> {
        let Some(card) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::deck_card::ActiveModel = card.into();
        active.custom_tags = ActiveValue::Set(encode_tags(tags));

        Ok(Some(active.update(self.db).await?))
    }

    /// Replaces the tags of every card in `ids`, returning the number of rows updated
    pub async fn update_tags_many(&self, ids: &[i32], tags: &[String]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::DeckCard::update_many()
            .col_expr(entity::deck_card::Column::CustomTags, Expr::value(encode_tags(tags)))
            .filter(entity::deck_card::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod test;
