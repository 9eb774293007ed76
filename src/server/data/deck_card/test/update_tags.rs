use super::*;

/// Tests replacing the tags of a card.
///
/// Verifies that tags are stored as a JSON array and that previous tags are dropped.
///
/// Expected: Ok(Some) with new tags stored
#[tokio::test]
async fn replaces_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deck = factory::create_deck(db).await?;
    let card = factory::deck_card::DeckCardFactory::new(db, deck.id)
        .tags(&["old"])
        .build()
        .await?;

    let repo = DeckCardRepository::new(db);
    let updated = repo
        .update_tags(card.id, &tags(&["hand trap", "staple"]))
        .await?
        .unwrap();

    assert_eq!(updated.custom_tags, r#"["hand trap","staple"]"#);
    let stored = repo.get_by_id(card.id).await?.unwrap();
    assert_eq!(stored.custom_tags, updated.custom_tags);
    assert_eq!(stored.card_name, card.card_name);

    Ok(())
}

/// Tests clearing the tags of a card.
///
/// Expected: Ok(Some) with an empty JSON array
#[tokio::test]
async fn clears_tags_with_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deck = factory::create_deck(db).await?;
    let card = factory::deck_card::DeckCardFactory::new(db, deck.id)
        .tags(&["combo"])
        .build()
        .await?;

    let repo = DeckCardRepository::new(db);
    let updated = repo.update_tags(card.id, &[]).await?.unwrap();

    assert_eq!(updated.custom_tags, "[]");

    Ok(())
}

/// Tests updating tags of a card that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckCardRepository::new(db);

    assert!(repo.update_tags(31, &tags(&["x"])).await?.is_none());

    Ok(())
}
