use crate::{
    model::deck::CardArea,
    server::{
        data::deck_card::DeckCardRepository,
        model::{
            card::CardMeta,
            deck::{NewDeckCardParam, UNKNOWN_CARD_TYPE},
        },
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_by_deck;
mod update_tags;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
