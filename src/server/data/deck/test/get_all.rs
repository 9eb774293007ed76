use super::*;

/// Tests that decks are listed newest first.
///
/// Expected: Ok with decks ordered by creation time descending
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let oldest = factory::deck::DeckFactory::new(db)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newest = factory::deck::DeckFactory::new(db).created_at(now).build().await?;
    let middle = factory::deck::DeckFactory::new(db)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = DeckRepository::new(db);
    let decks = repo.get_all().await?;

    let ids: Vec<i32> = decks.iter().map(|(deck, _)| deck.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}

/// Tests that decks sharing a creation time fall back to descending ID.
///
/// Expected: Ok with the later insert first
#[tokio::test]
async fn breaks_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let first = factory::deck::DeckFactory::new(db).created_at(now).build().await?;
    let second = factory::deck::DeckFactory::new(db).created_at(now).build().await?;

    let repo = DeckRepository::new(db);
    let decks = repo.get_all().await?;

    let ids: Vec<i32> = decks.iter().map(|(deck, _)| deck.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests that every listed deck carries exactly its own cards.
///
/// Expected: Ok with cards grouped per deck, including empty decks
#[tokio::test]
async fn groups_cards_per_deck() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (deck_a, cards_a) = factory::helpers::create_deck_with_cards(db, 2).await?;
    let (deck_b, cards_b) = factory::helpers::create_deck_with_cards(db, 3).await?;
    let empty = factory::create_deck(db).await?;

    let repo = DeckRepository::new(db);
    let decks = repo.get_all().await?;

    assert_eq!(decks.len(), 3);
    for (deck, cards) in decks {
        if deck.id == deck_a.id {
            assert_eq!(cards, cards_a);
        } else if deck.id == deck_b.id {
            assert_eq!(cards, cards_b);
        } else {
            assert_eq!(deck.id, empty.id);
            assert!(cards.is_empty());
        }
    }

    Ok(())
}

/// Tests listing with no decks stored.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_without_decks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
