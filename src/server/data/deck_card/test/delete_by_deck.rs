use super::*;

/// Tests removing every card of one deck.
///
/// Expected: Ok with the deck's rows removed and other decks untouched
#[tokio::test]
async fn removes_only_cards_of_deck() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (deck, _) = factory::helpers::create_deck_with_cards(db, 4).await?;
    let (other, other_cards) = factory::helpers::create_deck_with_cards(db, 1).await?;

    let repo = DeckCardRepository::new(db);
    let removed = repo.delete_by_deck(deck.id).await?;

    assert_eq!(removed, 4);
    assert!(repo.get_by_deck(deck.id).await?.is_empty());
    assert_eq!(repo.get_by_deck(other.id).await?, other_cards);

    Ok(())
}
