pub use super::deck::Entity as Deck;
pub use super::deck_card::Entity as DeckCard;
