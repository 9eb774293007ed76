use super::*;

/// Tests creating a deck row.
///
/// Verifies that the repository stores the name, raw list and total and stamps the
/// creation time.
///
/// Expected: Ok with deck created
#[tokio::test]
async fn creates_deck() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let repo = DeckRepository::new(db);
    let deck = repo
        .create(CreateDeckParam {
            name: "Blue-Eyes".to_string(),
            raw_list: Some("Blue-Eyes White Dragon x3".to_string()),
            total_cards: 3,
        })
        .await?;

    assert_eq!(deck.name, "Blue-Eyes");
    assert_eq!(deck.raw_list.as_deref(), Some("Blue-Eyes White Dragon x3"));
    assert_eq!(deck.total_cards, 3);
    assert!(deck.created_at >= before - Duration::seconds(1));

    let stored = entity::prelude::Deck::find_by_id(deck.id).one(db).await?;
    assert_eq!(stored, Some(deck));

    Ok(())
}

/// Tests that each created deck receives its own ID.
///
/// Expected: Ok with distinct IDs
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db);
    let param = CreateDeckParam {
        name: "My New Deck".to_string(),
        raw_list: None,
        total_cards: 0,
    };
    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
