use sea_orm::entity::prelude::*;

/// A saved deck. Card rows hang off it through `deck_card.deck_id`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "deck")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: DateTimeUtc,
    /// Sum of card quantities as of the last write.
    pub total_cards: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub raw_list: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::deck_card::Entity")]
    DeckCard,
}

impl Related<super::deck_card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeckCard.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
