use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::ErrorDto,
        deck::{BatchTagsUpdatedDto, BatchUpdateTagsDto, CardTagsUpdatedDto, UpdateCardTagsDto},
    },
    server::{
        error::AppError, service::deck_card::DeckCardService, state::AppState,
        util::payload::string_list,
    },
};

/// Tag for grouping deck card endpoints in OpenAPI documentation
pub static DECK_CARD_TAG: &str = "deck_card";

const TAGS_UPDATED: &str = "Tags updated";

/// Replace the tags of one deck card.
///
/// A body without `tags` clears the card's tags.
///
/// # Returns
/// - `200 OK` - The tags now stored on the card
/// - `400 Bad Request` - `tags` is not a list of strings
/// - `404 Not Found` - No card with the given ID
#[utoipa::path(
    post,
    path = "/update-card-tags/{id}/",
    tag = DECK_CARD_TAG,
    params(
        ("id" = i32, Path, description = "Deck card ID")
    ),
    request_body = UpdateCardTagsDto,
    responses(
        (status = 200, description = "Tags updated", body = CardTagsUpdatedDto),
        (status = 400, description = "Invalid tags format", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_card_tags(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let service = DeckCardService::new(&state.db);

    // A missing card wins over a malformed body
    let Some(tags) = string_list(&payload, "tags") else {
        if service.card_exists(id).await? {
            return Err(AppError::BadRequest("Invalid tags format".to_string()));
        }
        return Err(AppError::NotFound("Card not found".to_string()));
    };

    let tags = service
        .update_tags(id, tags.unwrap_or_default())
        .await?
        .ok_or_else(|| AppError::NotFound("Card not found".to_string()))?;

    Ok(Json(CardTagsUpdatedDto {
        status: TAGS_UPDATED.to_string(),
        tags,
    }))
}

/// Replace the tags of every card in a deck with a given name.
///
/// Names are compared ignoring case, so every copy of a card across the main, extra and
/// side lists is tagged at once.
///
/// # Returns
/// - `200 OK` - IDs of the updated cards
/// - `400 Bad Request` - `deck_id`, `card_name` or `tags` is missing or malformed
/// - `404 Not Found` - No card in the deck has that name
#[utoipa::path(
    post,
    path = "/batch-update-tags/",
    tag = DECK_CARD_TAG,
    request_body = BatchUpdateTagsDto,
    responses(
        (status = 200, description = "Tags updated", body = BatchTagsUpdatedDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 404, description = "No matching cards found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn batch_update_tags(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let deck_id = payload
        .get("deck_id")
        .and_then(Value::as_i64)
        .and_then(|id| i32::try_from(id).ok());
    let card_name = payload.get("card_name").and_then(Value::as_str);

    let (Some(deck_id), Some(card_name)) = (deck_id, card_name) else {
        return Err(AppError::BadRequest(
            "deck_id and card_name are required".to_string(),
        ));
    };
    let Some(tags) = string_list(&payload, "tags") else {
        return Err(AppError::BadRequest("Invalid tags format".to_string()));
    };
    let tags = tags.unwrap_or_default();

    let updated_ids = DeckCardService::new(&state.db)
        .batch_update_tags(deck_id, card_name, &tags)
        .await?;

    if updated_ids.is_empty() {
        return Err(AppError::NotFound("No matching cards found".to_string()));
    }

    Ok(Json(BatchTagsUpdatedDto {
        status: TAGS_UPDATED.to_string(),
        count: updated_ids.len(),
        updated_ids,
        tags,
    }))
}
