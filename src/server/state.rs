//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for card database requests
//! - Card database endpoint URL

use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::service::card::CardLookupClient;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `Url` is a single owned string
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for card database lookups.
    ///
    /// Built once at startup so every request shares its connection pool.
    pub http_client: reqwest::Client,

    /// Endpoint of the external card database.
    pub card_api_url: Url,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for card database lookups
    /// - `card_api_url` - Endpoint of the external card database
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, card_api_url: Url) -> Self {
        Self {
            db,
            http_client,
            card_api_url,
        }
    }

    /// Card lookup client borrowing this state's HTTP client and endpoint.
    pub fn card_lookup(&self) -> CardLookupClient<'_> {
        CardLookupClient::new(&self.http_client, &self.card_api_url)
    }
}
