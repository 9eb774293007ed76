//! Domain models for card database lookups.
//!
//! `CardRecord` is the raw payload shape of the external card database; it is converted
//! into `CardSummary` or `CardMeta` inside the card lookup client so nothing outside it
//! depends on the external field layout.

use serde::Deserialize;

use crate::model::card::{CardMetaDto, CardSummaryDto};

/// Response envelope of the card database: `{"data": [...]}`.
#[derive(Debug, Deserialize)]
pub struct CardInfoResponse {
    #[serde(default)]
    pub data: Vec<CardRecord>,
}

/// A single card as returned by the card database.
#[derive(Debug, Clone, Deserialize)]
pub struct CardRecord {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    #[serde(default)]
    pub desc: String,
    pub atk: Option<i32>,
    pub def: Option<i32>,
    pub level: Option<i32>,
    #[serde(default)]
    pub race: String,
    pub attribute: Option<String>,
    #[serde(default)]
    pub card_images: Vec<CardImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardImage {
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub image_url_small: String,
}

impl CardRecord {
    /// Primary artwork, or an empty image when the record lists none.
    fn primary_image(&self) -> CardImage {
        self.card_images.first().cloned().unwrap_or_default()
    }
}

/// Fuzzy search hit returned to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSummary {
    pub id: i64,
    pub name: String,
    pub card_type: String,
    pub desc: String,
    pub atk: Option<i32>,
    pub def: Option<i32>,
    pub level: Option<i32>,
    pub race: String,
    pub attribute: Option<String>,
    pub image_url: String,
    pub image_url_small: String,
}

impl CardSummary {
    pub fn from_record(record: CardRecord) -> Self {
        let image = record.primary_image();
        Self {
            id: record.id,
            name: record.name,
            card_type: record.card_type,
            desc: record.desc,
            atk: record.atk,
            def: record.def,
            level: record.level,
            race: record.race,
            attribute: record.attribute,
            image_url: image.image_url,
            image_url_small: image.image_url_small,
        }
    }

    pub fn into_dto(self) -> CardSummaryDto {
        CardSummaryDto {
            id: self.id,
            name: self.name,
            card_type: self.card_type,
            desc: self.desc,
            atk: self.atk,
            def: self.def,
            level: self.level,
            race: self.race,
            attribute: self.attribute,
            image_url: self.image_url,
            image_url_small: self.image_url_small,
        }
    }
}

/// Metadata resolved for one card name, used to fill in a deck card row.
///
/// `name` is the card database's canonical spelling, which a fuzzy match adopts in
/// place of whatever the user typed.
#[derive(Debug, Clone, PartialEq)]
pub struct CardMeta {
    pub name: String,
    pub card_type: String,
    pub image_url: String,
    pub attribute: Option<String>,
    pub race: Option<String>,
    pub level: Option<i32>,
    pub atk: Option<i32>,
    pub def: Option<i32>,
}

impl CardMeta {
    pub fn from_record(record: CardRecord) -> Self {
        let image = record.primary_image();
        Self {
            name: record.name,
            card_type: record.card_type,
            image_url: image.image_url,
            attribute: record.attribute,
            race: Some(record.race).filter(|race| !race.is_empty()),
            level: record.level,
            atk: record.atk,
            def: record.def,
        }
    }

    pub fn into_dto(self) -> CardMetaDto {
        CardMetaDto {
            name: self.name,
            card_type: self.card_type,
            image_url: self.image_url,
            attribute: self.attribute,
            race: self.race,
            level: self.level,
            atk: self.atk,
            def: self.def,
        }
    }
}
