//! HTTP request handlers.
//!
//! Controllers convert request DTOs into service parameters, call the service layer and
//! convert the resulting domain models back into DTOs. Every handler returns
//! `Result<impl IntoResponse, AppError>` so failures render through `AppError`.

pub mod card;
pub mod deck;
pub mod deck_card;
pub mod hello;
