use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Deck-construction zone a card belongs to.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardArea {
    Main,
    Extra,
    Side,
}

impl CardArea {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "MAIN",
            Self::Extra => "EXTRA",
            Self::Side => "SIDE",
        }
    }
}

impl fmt::Display for CardArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardArea {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "MAIN" => Ok(Self::Main),
            "EXTRA" => Ok(Self::Extra),
            "SIDE" => Ok(Self::Side),
            other => Err(other.to_string()),
        }
    }
}

/// Body of both the save and the update deck endpoints.
///
/// Every field may be omitted; an absent list is treated as empty text.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct SaveDeckDto {
    pub name: Option<String>,
    #[serde(default)]
    pub main_list: String,
    #[serde(default)]
    pub extra_list: String,
    #[serde(default)]
    pub side_list: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DeckDto {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub total_cards: i32,
    pub raw_list: Option<String>,
    pub cards: Vec<DeckCardDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DeckCardDto {
    pub id: i32,
    pub card_name: String,
    pub area: CardArea,
    pub quantity: i32,
    pub card_type: Option<String>,
    pub image_url: Option<String>,
    pub attribute: Option<String>,
    pub level: Option<i32>,
    pub atk: Option<i32>,
    pub defense: Option<i32>,
    /// JSON-encoded list of strings, e.g. `["starter","hand trap"]`.
    pub custom_tags: String,
}

/// Documents the tag update body; the handler validates raw JSON itself.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateCardTagsDto {
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CardTagsUpdatedDto {
    pub status: String,
    pub tags: Vec<String>,
}

/// Documents the batch tag update body; the handler validates raw JSON itself.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct BatchUpdateTagsDto {
    pub deck_id: i32,
    pub card_name: String,
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BatchTagsUpdatedDto {
    pub status: String,
    pub count: usize,
    pub updated_ids: Vec<i32>,
    pub tags: Vec<String>,
}
