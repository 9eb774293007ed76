use axum::{response::IntoResponse, Json};

use crate::{model::api::HelloDto, server::error::AppError};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HELLO_TAG: &str = "hello";

/// Static greeting used as a liveness check.
#[utoipa::path(
    get,
    path = "/hello/",
    tag = HELLO_TAG,
    responses(
        (status = 200, description = "Greeting", body = HelloDto)
    ),
)]
pub async fn hello() -> Result<impl IntoResponse, AppError> {
    Ok(Json(HelloDto {
        message: "Hello from the deck builder API!".to_string(),
    }))
}
