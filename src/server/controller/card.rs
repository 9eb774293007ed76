use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    model::{
        api::ErrorDto,
        card::{CardMetaDto, CardSummaryDto, CardsMetadataRequestDto},
    },
    server::{
        error::AppError, service::card::CardLookup, state::AppState, util::payload::string_list,
    },
};

/// Tag for grouping card lookup endpoints in OpenAPI documentation
pub static CARD_TAG: &str = "card";

#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Partial card name
    #[serde(default)]
    pub q: String,
}

/// Search the card database by partial name.
///
/// Returns up to 20 matching cards. A failed lookup is reported as no matches rather
/// than as an error.
///
/// # Arguments
/// - `state` - Application state containing the HTTP client
/// - `params` - Search text; an empty or missing query returns no matches
///
/// # Returns
/// - `200 OK` - Matching cards, possibly empty
#[utoipa::path(
    get,
    path = "/search-cards/",
    tag = CARD_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Matching cards", body = Vec<CardSummaryDto>)
    ),
)]
pub async fn search_cards(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let results = state.card_lookup().search(&params.q).await;

    Ok(Json(
        results
            .into_iter()
            .map(|card| card.into_dto())
            .collect::<Vec<CardSummaryDto>>(),
    ))
}

/// Look up metadata for many card names at once.
///
/// Names the card database does not know are omitted from the response. Keys are the
/// lowercased card names.
///
/// # Returns
/// - `200 OK` - Metadata keyed by lowercased name
/// - `400 Bad Request` - `names` is missing or not a list of strings
#[utoipa::path(
    post,
    path = "/get-cards-metadata/",
    tag = CARD_TAG,
    request_body = CardsMetadataRequestDto,
    responses(
        (status = 200, description = "Metadata keyed by lowercased card name", body = HashMap<String, CardMetaDto>),
        (status = 400, description = "Missing names array", body = ErrorDto)
    ),
)]
pub async fn get_cards_metadata(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let Some(Some(names)) = string_list(&payload, "names") else {
        return Err(AppError::BadRequest(
            "Missing names array in request body".to_string(),
        ));
    };

    let metadata = state.card_lookup().bulk_metadata(&names).await;

    Ok(Json(
        metadata
            .into_iter()
            .map(|(name, meta)| (name, meta.into_dto()))
            .collect::<HashMap<String, CardMetaDto>>(),
    ))
}
