//! Deck persistence: parsing submitted lists, resolving card metadata and storing decks.

use std::collections::{HashMap, HashSet};

use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{deck::DeckRepository, deck_card::DeckCardRepository},
    error::AppError,
    model::{
        card::CardMeta,
        deck::{
            CreateDeckParam, Deck, NewDeckCardParam, SaveDeckParams, UpdateDeckParam,
            DEFAULT_DECK_NAME,
        },
    },
    service::card::CardLookup,
    util::deck_list::{parse_deck_lists, ParsedCard},
};

pub struct DeckService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeckService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a deck from submitted list text.
    ///
    /// Card metadata is resolved before any row is written; the deck and its cards are
    /// then inserted in a single transaction.
    ///
    /// # Arguments
    /// - `lookup` - Card metadata source
    /// - `params` - Deck name and list text
    ///
    /// # Returns
    /// - `Ok(Deck)` - The stored deck with its cards
    /// - `Err(AppError::BadRequest)` - All three lists are empty
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create<L: CardLookup + ?Sized>(
        &self,
        lookup: &L,
        params: SaveDeckParams,
    ) -> Result<Deck, AppError> {
        validate(&params)?;

        let parsed = parse_deck_lists(&params.main_list, &params.extra_list, &params.side_list);
        let total_cards = total_quantity(&parsed);
        let cards = resolve_cards(lookup, parsed).await;

        let txn = self.db.begin().await?;

        let deck = DeckRepository::new(&txn)
            .create(CreateDeckParam {
                name: params.name.unwrap_or_else(|| DEFAULT_DECK_NAME.to_string()),
                raw_list: Some(params.main_list),
                total_cards,
            })
            .await?;
        let cards = DeckCardRepository::new(&txn).create_many(deck.id, cards).await?;

        txn.commit().await?;

        tracing::info!(
            "Created deck {} ({}) with {} cards",
            deck.id,
            deck.name,
            deck.total_cards
        );

        Ok(Deck::from_entity(deck, cards)?)
    }

    /// Replaces an existing deck's cards with the submitted lists.
    ///
    /// The name is only changed when one is given. The existing cards, and their tags, are
    /// removed and the new ones inserted in the same transaction as the deck update.
    ///
    /// # Returns
    /// - `Ok(Some(Deck))` - The updated deck with its new cards
    /// - `Ok(None)` - No deck with the given ID exists
    /// - `Err(AppError::BadRequest)` - All three lists are empty
    /// - `Err(AppError::DbErr)` - Database error during the replace
    pub async fn update<L: CardLookup + ?Sized>(
        &self,
        id: i32,
        lookup: &L,
        params: SaveDeckParams,
    ) -> Result<Option<Deck>, AppError> {
        if !DeckRepository::new(self.db).exists(id).await? {
            return Ok(None);
        }

        validate(&params)?;

        let parsed = parse_deck_lists(&params.main_list, &params.extra_list, &params.side_list);
        let total_cards = total_quantity(&parsed);
        let cards = resolve_cards(lookup, parsed).await;

        let txn = self.db.begin().await?;

        let updated = DeckRepository::new(&txn)
            .update(UpdateDeckParam {
                id,
                name: params.name,
                raw_list: Some(params.main_list),
                total_cards,
            })
            .await;
        let deck = match updated {
            Ok(deck) => deck,
            // Deleted while the lookups ran
            Err(DbErr::RecordNotUpdated) => {
                txn.rollback().await?;
                tracing::debug!("Deck {} was deleted before its update was written", id);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let card_repo = DeckCardRepository::new(&txn);
        card_repo.delete_by_deck(id).await?;
        let cards = card_repo.create_many(id, cards).await?;

        txn.commit().await?;

        tracing::info!(
            "Updated deck {} ({}) with {} cards",
            deck.id,
            deck.name,
            deck.total_cards
        );

        Ok(Some(Deck::from_entity(deck, cards)?))
    }

    /// Gets every deck with its cards, newest first
    pub async fn list(&self) -> Result<Vec<Deck>, AppError> {
        let decks = DeckRepository::new(self.db).get_all().await?;

        decks
            .into_iter()
            .map(|(deck, cards)| Deck::from_entity(deck, cards))
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Deck>, AppError> {
        let result = DeckRepository::new(self.db).get_by_id(id).await?;

        result
            .map(|(deck, cards)| Deck::from_entity(deck, cards))
            .transpose()
            .map_err(Into::into)
    }

    /// Deletes a deck and all of its cards
    ///
    /// # Returns
    /// - `Ok(true)` - The deck was deleted
    /// - `Ok(false)` - No deck with the given ID exists
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let deleted = DeckRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        if deleted {
            tracing::info!("Deleted deck {}", id);
        }

        Ok(deleted)
    }
}

fn validate(params: &SaveDeckParams) -> Result<(), AppError> {
    if !params.has_any_list() {
        return Err(AppError::BadRequest("No deck list provided".to_string()));
    }

    Ok(())
}

fn total_quantity(cards: &[ParsedCard]) -> i32 {
    cards
        .iter()
        .fold(0i32, |total, card| total.saturating_add(card.quantity))
}

/// Resolves metadata for every parsed entry.
///
/// All distinct names go to one bulk lookup. Entries it misses fall back to a fuzzy
/// match, tried at most once per distinct name; a fuzzy hit replaces the typed name with
/// the canonical one. Entries neither lookup resolves, and entries with an empty name,
/// are kept with no metadata.
async fn resolve_cards<L: CardLookup + ?Sized>(
    lookup: &L,
    parsed: Vec<ParsedCard>,
) -> Vec<NewDeckCardParam> {
    let mut seen = HashSet::new();
    let distinct_names: Vec<String> = parsed
        .iter()
        .filter(|card| !card.name.is_empty() && seen.insert(card.name.to_lowercase()))
        .map(|card| card.name.clone())
        .collect();

    let metadata = lookup.bulk_metadata(&distinct_names).await;
    let mut fallbacks: HashMap<String, Option<CardMeta>> = HashMap::new();
    let mut cards = Vec::with_capacity(parsed.len());

    for card in parsed {
        if card.name.is_empty() {
            cards.push(NewDeckCardParam::resolved(card.name, card.area, card.quantity, None));
            continue;
        }

        let key = card.name.to_lowercase();

        if let Some(meta) = metadata.get(&key) {
            cards.push(NewDeckCardParam::resolved(
                card.name,
                card.area,
                card.quantity,
                Some(meta.clone()),
            ));
            continue;
        }

        let fallback = match fallbacks.get(&key) {
            Some(fallback) => fallback.clone(),
            None => {
                let fallback = lookup.best_match(&card.name).await;
                if fallback.is_none() {
                    tracing::debug!("Could not resolve card {:?}, storing as unknown", card.name);
                }
                fallbacks.insert(key, fallback.clone());
                fallback
            }
        };

        cards.push(match fallback {
            Some(meta) => {
                NewDeckCardParam::resolved(meta.name.clone(), card.area, card.quantity, Some(meta))
            }
            None => NewDeckCardParam::resolved(card.name, card.area, card.quantity, None),
        });
    }

    cards
}

#[cfg(test)]
mod test;
