//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and accept
//! parameter models from the service layer. Every repository is generic over the
//! connection so it can run against the pool or inside a transaction.

pub mod deck;
pub mod deck_card;
