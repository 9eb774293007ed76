use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "deck_card")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub deck_id: i32,
    pub card_name: String,
    /// One of `MAIN`, `EXTRA` or `SIDE`.
    pub area: String,
    pub quantity: i32,
    pub card_type: Option<String>,
    pub image_url: Option<String>,
    pub attribute: Option<String>,
    pub level: Option<i32>,
    pub atk: Option<i32>,
    pub defense: Option<i32>,
    /// JSON-encoded list of strings.
    #[sea_orm(column_type = "Text", default_value = "[]")]
    pub custom_tags: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::deck::Entity",
        from = "Column::DeckId",
        to = "super::deck::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Deck,
}

impl Related<super::deck::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deck.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
