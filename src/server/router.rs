use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{card, deck, deck_card, hello},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Deck Builder API", description = "Deck list storage with card metadata lookups"),
    tags(
        (name = "card", description = "Card database lookups"),
        (name = "deck", description = "Deck storage"),
        (name = "deck_card", description = "Deck card tagging"),
        (name = "hello", description = "Liveness check")
    )
)]
pub struct ApiDoc;

/// Builds every API route together with the generated OpenAPI document.
pub fn api_router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(hello::hello))
        .routes(routes!(card::search_cards))
        .routes(routes!(card::get_cards_metadata))
        .routes(routes!(deck::save_deck))
        .routes(routes!(deck::list_decks))
        .routes(routes!(deck::get_deck, deck::update_deck))
        .routes(routes!(deck::delete_deck))
        .routes(routes!(deck_card::update_card_tags))
        .routes(routes!(deck_card::batch_update_tags))
        .split_for_parts()
}

/// API routes with Swagger UI served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
