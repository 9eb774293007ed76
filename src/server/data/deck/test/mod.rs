use crate::{
    model::deck::CardArea,
    server::{
        data::deck::DeckRepository,
        model::deck::{CreateDeckParam, NewDeckCardParam, UpdateDeckParam},
    },
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
