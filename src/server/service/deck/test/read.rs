use super::*;

/// Tests listing decks newest first with their cards.
///
/// Expected: Ok with the most recently created deck first
#[tokio::test]
async fn lists_decks_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lookup = ScriptedLookup::default();

    let service = DeckService::new(db);
    let first = service.create(&lookup, main_list("Sangan")).await?;
    let second = service.create(&lookup, main_list("Raigeki x2")).await?;

    let decks = service.list().await?;

    let ids: Vec<i32> = decks.iter().map(|deck| deck.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert_eq!(decks[0].cards.len(), 1);
    assert_eq!(decks[0].cards[0].quantity, 2);

    Ok(())
}

/// Tests fetching a deck by ID.
///
/// Expected: Ok(Some) for a stored deck, Ok(None) otherwise
#[tokio::test]
async fn gets_deck_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lookup = ScriptedLookup::default();

    let service = DeckService::new(db);
    let created = service.create(&lookup, main_list("Sangan x3")).await?;

    assert_eq!(service.get_by_id(created.id).await?, Some(created.clone()));
    assert_eq!(service.get_by_id(created.id + 1).await?, None);

    Ok(())
}

/// Tests that a stored card with an unknown area surfaces as an internal error.
///
/// Expected: Err(InternalErr)
#[tokio::test]
async fn unknown_stored_area_is_internal_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deck = factory::create_deck(db).await?;
    factory::deck_card::DeckCardFactory::new(db, deck.id)
        .area("GRAVEYARD")
        .build()
        .await?;

    let result = DeckService::new(db).get_by_id(deck.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}

/// Tests deleting a deck.
///
/// Expected: Ok(true) once, then Ok(false) and the deck is gone
#[tokio::test]
async fn deletes_deck() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (deck, _) = factory::helpers::create_deck_with_cards(db, 3).await?;

    let service = DeckService::new(db);

    assert!(service.delete(deck.id).await?);
    assert!(!service.delete(deck.id).await?);
    assert!(service.get_by_id(deck.id).await?.is_none());
    assert_eq!(entity::prelude::DeckCard::find().count(db).await?, 0);

    Ok(())
}
