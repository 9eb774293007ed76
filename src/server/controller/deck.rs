use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        deck::{DeckDto, SaveDeckDto},
    },
    server::{error::AppError, model::deck::SaveDeckParams, service::deck::DeckService, state::AppState},
};

/// Tag for grouping deck endpoints in OpenAPI documentation
pub static DECK_TAG: &str = "deck";

/// Save a new deck.
///
/// Parses the three deck lists, resolves every card against the card database and
/// stores the deck. Cards the card database cannot resolve are stored with type
/// "Unknown"; that never fails the request.
///
/// # Arguments
/// - `state` - Application state containing the database connection and HTTP client
/// - `payload` - Deck name and list text
///
/// # Returns
/// - `201 Created` - The stored deck with its cards
/// - `400 Bad Request` - All three lists are empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/save-deck/",
    tag = DECK_TAG,
    request_body = SaveDeckDto,
    responses(
        (status = 201, description = "Successfully saved deck", body = DeckDto),
        (status = 400, description = "No deck list provided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_deck(
    State(state): State<AppState>,
    Json(payload): Json<SaveDeckDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DeckService::new(&state.db);

    let deck = service
        .create(&state.card_lookup(), SaveDeckParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(deck.into_dto())))
}

/// List all saved decks, newest first.
///
/// # Returns
/// - `200 OK` - Every deck with its cards
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/list-decks/",
    tag = DECK_TAG,
    responses(
        (status = 200, description = "All decks, newest first", body = Vec<DeckDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_decks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let decks = DeckService::new(&state.db).list().await?;

    Ok(Json(
        decks
            .into_iter()
            .map(|deck| deck.into_dto())
            .collect::<Vec<DeckDto>>(),
    ))
}

/// Get a single deck by ID.
///
/// # Returns
/// - `200 OK` - The deck with its cards
/// - `404 Not Found` - No deck with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/get-deck/{id}/",
    tag = DECK_TAG,
    params(
        ("id" = i32, Path, description = "Deck ID")
    ),
    responses(
        (status = 200, description = "The requested deck", body = DeckDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_deck(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deck = DeckService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Deck not found".to_string()))?;

    Ok(Json(deck.into_dto()))
}

/// Replace a deck's cards from new list text.
///
/// All previous cards, including their tags, are replaced. The deck keeps its name when
/// the body has none.
///
/// # Returns
/// - `200 OK` - The updated deck
/// - `400 Bad Request` - All three lists are empty
/// - `404 Not Found` - No deck with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/get-deck/{id}/",
    tag = DECK_TAG,
    params(
        ("id" = i32, Path, description = "Deck ID")
    ),
    request_body = SaveDeckDto,
    responses(
        (status = 200, description = "Successfully updated deck", body = DeckDto),
        (status = 400, description = "No deck list provided", body = ErrorDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_deck(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveDeckDto>,
) -> Result<impl IntoResponse, AppError> {
    let deck = DeckService::new(&state.db)
        .update(id, &state.card_lookup(), SaveDeckParams::from_dto(payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Deck not found".to_string()))?;

    Ok(Json(deck.into_dto()))
}

/// Delete a deck and all of its cards.
///
/// # Returns
/// - `204 No Content` - Deck deleted
/// - `404 Not Found` - No deck with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/delete-deck/{id}/",
    tag = DECK_TAG,
    params(
        ("id" = i32, Path, description = "Deck ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted deck"),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_deck(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = DeckService::new(&state.db).delete(id).await?;

    if !deleted {
        return Err(AppError::NotFound("Deck not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
