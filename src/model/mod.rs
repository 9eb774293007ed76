//! Wire-level DTOs shared by every HTTP endpoint.
//!
//! These types define the JSON shapes the API accepts and returns. Server-side domain
//! models convert into them at the controller boundary.

pub mod api;
pub mod card;
pub mod deck;
