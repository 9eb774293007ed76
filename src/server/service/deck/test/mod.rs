use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::deck::CardArea,
    server::{
        error::AppError,
        model::{
            card::{CardMeta, CardSummary},
            deck::{SaveDeckParams, UNKNOWN_CARD_TYPE},
        },
        service::{card::CardLookup, deck::DeckService},
    },
};

mod create;
mod read;

/// Card lookup answering from fixed tables and counting every call.
#[derive(Default)]
struct ScriptedLookup {
    /// Known cards by lowercased name, served by bulk lookups.
    exact: HashMap<String, CardMeta>,
    /// Fuzzy answers by lowercased query.
    fuzzy: HashMap<String, CardMeta>,
    bulk_calls: AtomicUsize,
    bulk_names: Mutex<Vec<Vec<String>>>,
    best_match_calls: Mutex<Vec<String>>,
}

impl ScriptedLookup {
    fn with_exact(mut self, name: &str, card_type: &str) -> Self {
        self.exact.insert(name.to_lowercase(), meta(name, card_type));
        self
    }

    fn with_fuzzy(mut self, query: &str, canonical: &str, card_type: &str) -> Self {
        self.fuzzy.insert(query.to_lowercase(), meta(canonical, card_type));
        self
    }

    fn bulk_calls(&self) -> usize {
        self.bulk_calls.load(Ordering::SeqCst)
    }

    fn bulk_names(&self) -> Vec<Vec<String>> {
        self.bulk_names.lock().unwrap().clone()
    }

    fn best_match_calls(&self) -> Vec<String> {
        self.best_match_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CardLookup for ScriptedLookup {
    async fn search(&self, _query: &str) -> Vec<CardSummary> {
        Vec::new()
    }

    async fn bulk_metadata(&self, names: &[String]) -> HashMap<String, CardMeta> {
        self.bulk_calls.fetch_add(1, Ordering::SeqCst);
        self.bulk_names.lock().unwrap().push(names.to_vec());

        names
            .iter()
            .filter_map(|name| {
                let key = name.to_lowercase();
                self.exact.get(&key).map(|meta| (key, meta.clone()))
            })
            .collect()
    }

    async fn best_match(&self, name: &str) -> Option<CardMeta> {
        self.best_match_calls.lock().unwrap().push(name.to_string());
        self.fuzzy.get(&name.to_lowercase()).cloned()
    }
}

fn meta(name: &str, card_type: &str) -> CardMeta {
    CardMeta {
        name: name.to_string(),
        card_type: card_type.to_string(),
        image_url: format!("https://images.example.test/{}.jpg", name.replace(' ', "_")),
        attribute: Some("LIGHT".to_string()),
        race: Some("Dragon".to_string()),
        level: Some(8),
        atk: Some(3000),
        def: Some(2500),
    }
}

fn main_list(main_list: &str) -> SaveDeckParams {
    SaveDeckParams {
        main_list: main_list.to_string(),
        ..Default::default()
    }
}
