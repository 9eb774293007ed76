//! Domain models for deck data operations.
//!
//! Defines the deck and deck card domain models, the parameter types the service layer
//! hands to repositories, and the JSON encoding of card tags. Tags are a plain
//! `Vec<String>` everywhere except the `custom_tags` column, which stores them as a JSON
//! array for compatibility with previously saved decks.

use chrono::{DateTime, Utc};

use crate::{
    model::deck::{CardArea, DeckCardDto, DeckDto, SaveDeckDto},
    server::{error::internal::InternalError, model::card::CardMeta},
};

/// Card type stored when neither the bulk lookup nor the fuzzy fallback found the card.
pub const UNKNOWN_CARD_TYPE: &str = "Unknown";

/// Deck name used when a create request omits one.
pub const DEFAULT_DECK_NAME: &str = "My New Deck";

/// A saved deck together with its cards, ordered by card ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Sum of card quantities as of the last write.
    pub total_cards: i32,
    pub raw_list: Option<String>,
    pub cards: Vec<DeckCard>,
}

impl Deck {
    /// Converts a deck row and its card rows at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Deck)` - The converted deck
    /// - `Err(InternalError::InvalidCardArea)` - A card row holds an unknown area
    pub fn from_entity(
        deck: entity::deck::Model,
        cards: Vec<entity::deck_card::Model>,
    ) -> Result<Self, InternalError> {
        let cards = cards
            .into_iter()
            .map(DeckCard::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: deck.id,
            name: deck.name,
            created_at: deck.created_at,
            total_cards: deck.total_cards,
            raw_list: deck.raw_list,
            cards,
        })
    }

    pub fn into_dto(self) -> DeckDto {
        DeckDto {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            total_cards: self.total_cards,
            raw_list: self.raw_list,
            cards: self.cards.into_iter().map(DeckCard::into_dto).collect(),
        }
    }
}

/// One card entry of a deck.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckCard {
    pub id: i32,
    pub deck_id: i32,
    pub card_name: String,
    pub area: CardArea,
    pub quantity: i32,
    pub card_type: Option<String>,
    pub image_url: Option<String>,
    pub attribute: Option<String>,
    pub level: Option<i32>,
    pub atk: Option<i32>,
    pub defense: Option<i32>,
    pub tags: Vec<String>,
}

impl DeckCard {
    pub fn from_entity(entity: entity::deck_card::Model) -> Result<Self, InternalError> {
        let area = entity
            .area
            .parse::<CardArea>()
            .map_err(|value| InternalError::InvalidCardArea {
                card_id: entity.id,
                value,
            })?;
        let tags = decode_tags(entity.id, &entity.custom_tags);

        Ok(Self {
            id: entity.id,
            deck_id: entity.deck_id,
            card_name: entity.card_name,
            area,
            quantity: entity.quantity,
            card_type: entity.card_type,
            image_url: entity.image_url,
            attribute: entity.attribute,
            level: entity.level,
            atk: entity.atk,
            defense: entity.defense,
            tags,
        })
    }

    pub fn into_dto(self) -> DeckCardDto {
        DeckCardDto {
            id: self.id,
            card_name: self.card_name,
            area: self.area,
            quantity: self.quantity,
            card_type: self.card_type,
            image_url: self.image_url,
            attribute: self.attribute,
            level: self.level,
            atk: self.atk,
            defense: self.defense,
            custom_tags: encode_tags(&self.tags),
        }
    }
}

/// Encodes tags into the JSON array text stored in `custom_tags`.
pub fn encode_tags(tags: &[String]) -> String {
    serde_json::Value::from(tags.to_vec()).to_string()
}

/// Decodes the `custom_tags` column, falling back to no tags for malformed text.
fn decode_tags(card_id: i32, raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(tags) => tags,
        Err(e) => {
            tracing::warn!("Deck card {} has malformed tags {:?}: {}", card_id, raw, e);
            Vec::new()
        }
    }
}

/// Deck-list text submitted for a create or update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SaveDeckParams {
    /// Requested name; `None` when absent or empty.
    pub name: Option<String>,
    pub main_list: String,
    pub extra_list: String,
    pub side_list: String,
}

impl SaveDeckParams {
    pub fn from_dto(dto: SaveDeckDto) -> Self {
        Self {
            name: dto.name.filter(|name| !name.is_empty()),
            main_list: dto.main_list,
            extra_list: dto.extra_list,
            side_list: dto.side_list,
        }
    }

    /// Whether at least one of the three lists carries any text.
    pub fn has_any_list(&self) -> bool {
        !(self.main_list.is_empty() && self.extra_list.is_empty() && self.side_list.is_empty())
    }
}

/// A parsed deck entry with its resolved metadata, ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDeckCardParam {
    pub card_name: String,
    pub area: CardArea,
    pub quantity: i32,
    pub card_type: String,
    pub image_url: Option<String>,
    pub attribute: Option<String>,
    pub level: Option<i32>,
    pub atk: Option<i32>,
    pub defense: Option<i32>,
}

impl NewDeckCardParam {
    /// Builds the row for a card entry from whatever metadata was resolved for it.
    ///
    /// Without metadata the card keeps its typed name with type "Unknown" and no other
    /// details.
    pub fn resolved(
        card_name: String,
        area: CardArea,
        quantity: i32,
        meta: Option<CardMeta>,
    ) -> Self {
        match meta {
            Some(meta) => Self {
                card_name,
                area,
                quantity,
                card_type: Some(meta.card_type)
                    .filter(|card_type| !card_type.is_empty())
                    .unwrap_or_else(|| UNKNOWN_CARD_TYPE.to_string()),
                image_url: Some(meta.image_url).filter(|url| !url.is_empty()),
                attribute: meta.attribute,
                level: meta.level,
                atk: meta.atk,
                defense: meta.def,
            },
            None => Self {
                card_name,
                area,
                quantity,
                card_type: UNKNOWN_CARD_TYPE.to_string(),
                image_url: None,
                attribute: None,
                level: None,
                atk: None,
                defense: None,
            },
        }
    }
}

/// Parameters for inserting a new deck row.
#[derive(Debug, Clone)]
pub struct CreateDeckParam {
    pub name: String,
    pub raw_list: Option<String>,
    pub total_cards: i32,
}

/// Parameters for overwriting an existing deck row.
#[derive(Debug, Clone)]
pub struct UpdateDeckParam {
    pub id: i32,
    /// New name; `None` keeps the stored one.
    pub name: Option<String>,
    pub raw_list: Option<String>,
    pub total_cards: i32,
}
