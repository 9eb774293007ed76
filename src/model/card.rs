use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One fuzzy search hit, in the field naming the frontend already consumes.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CardSummaryDto {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
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

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CardMetaDto {
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub image_url: String,
    pub attribute: Option<String>,
    pub race: Option<String>,
    pub level: Option<i32>,
    pub atk: Option<i32>,
    pub def: Option<i32>,
}

/// Request body for the bulk metadata endpoint.
///
/// Only used for API documentation: the handler validates the raw JSON itself so a
/// missing or non-list `names` yields a 400 with a readable message.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CardsMetadataRequestDto {
    pub names: Vec<String>,
}
