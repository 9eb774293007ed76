use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_deck_table::Deck;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeckCard::Table)
                    .if_not_exists()
                    .col(pk_auto(DeckCard::Id))
                    .col(integer(DeckCard::DeckId))
                    .col(string(DeckCard::CardName))
                    .col(string_len(DeckCard::Area, 10).default("MAIN"))
                    .col(integer(DeckCard::Quantity).default(1))
                    .col(string_len_null(DeckCard::CardType, 100))
                    .col(string_len_null(DeckCard::ImageUrl, 500))
                    .col(string_len_null(DeckCard::Attribute, 50))
                    .col(integer_null(DeckCard::Level))
                    .col(integer_null(DeckCard::Atk))
                    .col(integer_null(DeckCard::Defense))
                    .col(text(DeckCard::CustomTags).default("[]"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deck_card_deck_id")
                            .from(DeckCard::Table, DeckCard::DeckId)
                            .to(Deck::Table, Deck::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_deck_card_deck_id")
                    .table(DeckCard::Table)
                    .col(DeckCard::DeckId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeckCard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DeckCard {
    Table,
    Id,
    DeckId,
    CardName,
    Area,
    Quantity,
    CardType,
    ImageUrl,
    Attribute,
    Level,
    Atk,
    Defense,
    CustomTags,
}
