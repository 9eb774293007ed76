//! Card database lookups.
//!
//! `CardLookup` is the seam the deck service resolves card metadata through; the
//! production implementation `CardLookupClient` talks to the external card database over
//! HTTP. Lookups never fail from the caller's point of view: any network error, error
//! status or undecodable payload is logged and turned into an empty or absent result.

use std::collections::HashMap;

use async_trait::async_trait;
use url::Url;

use crate::server::{
    error::lookup::LookupError,
    model::card::{CardInfoResponse, CardMeta, CardRecord, CardSummary},
};

/// Maximum number of names sent in one bulk request.
pub const BULK_CHUNK_SIZE: usize = 20;

/// Maximum number of matches returned by a search.
pub const SEARCH_PAGE_SIZE: usize = 20;

/// Card metadata source used while resolving deck entries.
#[async_trait]
pub trait CardLookup: Send + Sync {
    /// Fuzzy search by partial name, returning at most `SEARCH_PAGE_SIZE` matches.
    async fn search(&self, query: &str) -> Vec<CardSummary>;

    /// Exact metadata for many names, keyed by lowercased card name.
    ///
    /// Names the card database does not know are simply missing from the map. Empty
    /// names are never sent.
    async fn bulk_metadata(&self, names: &[String]) -> HashMap<String, CardMeta>;

    /// Closest fuzzy match for a single name.
    async fn best_match(&self, name: &str) -> Option<CardMeta>;
}

/// HTTP client for the external card database.
pub struct CardLookupClient<'a> {
    http_client: &'a reqwest::Client,
    base_url: &'a Url,
}

impl<'a> CardLookupClient<'a> {
    /// Creates a new CardLookupClient
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `base_url` - Card database endpoint, e.g. `https://db.ygoprodeck.com/api/v7/cardinfo.php`
    pub fn new(http_client: &'a reqwest::Client, base_url: &'a Url) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Runs one query against the card database.
    ///
    /// The card database answers "nothing matched" with an error status, so callers
    /// treat every `Err` the same way as an empty result.
    async fn fetch(&self, query: &[(&str, &str)]) -> Result<Vec<CardRecord>, LookupError> {
        let response = self
            .http_client
            .get(self.base_url.clone())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body = response.json::<CardInfoResponse>().await?;

        Ok(body.data)
    }
}

#[async_trait]
impl CardLookup for CardLookupClient<'_> {
    async fn search(&self, query: &str) -> Vec<CardSummary> {
        if query.is_empty() {
            return Vec::new();
        }

        let num = SEARCH_PAGE_SIZE.to_string();
        match self
            .fetch(&[("fname", query), ("num", num.as_str()), ("offset", "0")])
            .await
        {
            Ok(records) => records
                .into_iter()
                .take(SEARCH_PAGE_SIZE)
                .map(CardSummary::from_record)
                .collect(),
            Err(e) => {
                tracing::warn!("Card search for {:?} failed: {}", query, e);
                Vec::new()
            }
        }
    }

    async fn bulk_metadata(&self, names: &[String]) -> HashMap<String, CardMeta> {
        let mut metadata = HashMap::new();
        let names: Vec<&str> = names
            .iter()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
            .collect();

        for chunk in names.chunks(BULK_CHUNK_SIZE) {
            let joined = chunk.join("|");

            match self.fetch(&[("name", &joined)]).await {
                Ok(records) => {
                    for record in records {
                        let meta = CardMeta::from_record(record);
                        metadata.insert(meta.name.to_lowercase(), meta);
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        "Bulk card lookup failed for a chunk of {} names, skipping it: {}",
                        chunk.len(),
                        e
                    );
                }
            }
        }

        metadata
    }

    async fn best_match(&self, name: &str) -> Option<CardMeta> {
        if name.is_empty() {
            return None;
        }

        match self
            .fetch(&[("fname", name), ("num", "1"), ("offset", "0")])
            .await
        {
            Ok(records) => records.into_iter().next().map(CardMeta::from_record),
            Err(e) => {
                tracing::debug!("No fuzzy match for {:?}: {}", name, e);
                None
            }
        }
    }
}
