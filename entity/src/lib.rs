//! SeaORM entity models for the deck builder schema.
//!
//! Tables are created by the `migration` crate; these models mirror them column for
//! column and are only ever used inside the server's data layer.

pub mod prelude;

pub mod deck;
pub mod deck_card;
