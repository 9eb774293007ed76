use super::*;

/// Tests creating a deck whose cards all resolve in the bulk lookup.
///
/// Verifies the default name, the stored raw list, the total and per-card metadata.
///
/// Expected: Ok with deck and cards in list order
#[tokio::test]
async fn creates_deck_with_resolved_cards() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lookup = ScriptedLookup::default()
        .with_exact("Blue-Eyes White Dragon", "Normal Monster")
        .with_exact("Blue-Eyes Ultimate Dragon", "Fusion Monster");

    let service = DeckService::new(db);
    let deck = service
        .create(
            &lookup,
            SaveDeckParams {
                name: None,
                main_list: "Blue-Eyes White Dragon x3".to_string(),
                extra_list: "Blue-Eyes Ultimate Dragon".to_string(),
                side_list: String::new(),
            },
        )
        .await?;

    assert_eq!(deck.name, "My New Deck");
    assert_eq!(deck.raw_list.as_deref(), Some("Blue-Eyes White Dragon x3"));
    assert_eq!(deck.total_cards, 4);
    assert_eq!(deck.cards.len(), 2);
    assert_eq!(deck.cards[0].area, CardArea::Main);
    assert_eq!(deck.cards[0].quantity, 3);
    assert_eq!(deck.cards[0].card_type.as_deref(), Some("Normal Monster"));
    assert_eq!(deck.cards[0].atk, Some(3000));
    assert_eq!(deck.cards[1].area, CardArea::Extra);
    assert_eq!(deck.cards[1].card_type.as_deref(), Some("Fusion Monster"));
    assert!(deck.cards.iter().all(|card| card.tags.is_empty()));
    assert_eq!(lookup.bulk_calls(), 1);
    assert!(lookup.best_match_calls().is_empty());

    Ok(())
}

/// Tests that a bulk hit keeps the name as typed.
///
/// Expected: Ok with the user's spelling stored
#[tokio::test]
async fn bulk_hit_keeps_typed_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lookup = ScriptedLookup::default().with_exact("Pot of Greed", "Spell Card");

    let deck = DeckService::new(db)
        .create(&lookup, main_list("pot of greed"))
        .await?;

    assert_eq!(deck.cards[0].card_name, "pot of greed");
    assert_eq!(deck.cards[0].card_type.as_deref(), Some("Spell Card"));

    Ok(())
}

/// Tests the fuzzy fallback for names the bulk lookup misses.
///
/// Verifies that a fuzzy hit replaces the typed name with the canonical name and that
/// the fallback runs once per distinct name even when the name appears on many lines.
///
/// Expected: Ok with canonical names and a single fallback call
#[tokio::test]
async fn falls_back_once_per_distinct_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lookup = ScriptedLookup::default().with_fuzzy(
        "ash blossom",
        "Ash Blossom & Joyous Spring",
        "Effect Monster",
    );

    let deck = DeckService::new(db)
        .create(
            &lookup,
            SaveDeckParams {
                name: Some("Hand Traps".to_string()),
                main_list: "Ash Blossom x2\nash blossom".to_string(),
                extra_list: String::new(),
                side_list: "Ash Blossom x1".to_string(),
            },
        )
        .await?;

    assert_eq!(deck.name, "Hand Traps");
    assert_eq!(deck.cards.len(), 3);
    assert!(deck
        .cards
        .iter()
        .all(|card| card.card_name == "Ash Blossom & Joyous Spring"));
    assert_eq!(deck.cards[2].area, CardArea::Side);
    assert_eq!(lookup.best_match_calls(), vec!["Ash Blossom".to_string()]);
    assert_eq!(lookup.bulk_names(), vec![vec!["Ash Blossom".to_string()]]);

    Ok(())
}

/// Tests that cards neither lookup resolves are still stored.
///
/// Expected: Ok with card_type "Unknown" and no other metadata
#[tokio::test]
async fn stores_unresolved_card_as_unknown() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lookup = ScriptedLookup::default();

    let deck = DeckService::new(db)
        .create(&lookup, main_list("Totally Made Up Card x2"))
        .await?;

    let card = &deck.cards[0];
    assert_eq!(card.card_name, "Totally Made Up Card");
    assert_eq!(card.quantity, 2);
    assert_eq!(card.card_type.as_deref(), Some(UNKNOWN_CARD_TYPE));
    assert_eq!(card.image_url, None);
    assert_eq!(card.attribute, None);
    assert_eq!(card.level, None);
    assert_eq!(deck.total_cards, 2);

    Ok(())
}

/// Tests that a bare quantity line is stored with an empty name and never looked up.
///
/// Expected: Ok with an "Unknown" card named "" and only "Sangan" sent to the lookups
#[tokio::test]
async fn empty_name_is_stored_without_lookup() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lookup = ScriptedLookup::default().with_exact("Sangan", "Effect Monster");

    let deck = DeckService::new(db)
        .create(&lookup, main_list("x3\nSangan"))
        .await?;

    let card = &deck.cards[0];
    assert_eq!(card.card_name, "");
    assert_eq!(card.quantity, 3);
    assert_eq!(card.card_type.as_deref(), Some(UNKNOWN_CARD_TYPE));
    assert_eq!(deck.cards[1].card_type.as_deref(), Some("Effect Monster"));
    assert_eq!(deck.total_cards, 4);
    assert_eq!(lookup.bulk_names(), vec![vec!["Sangan".to_string()]]);
    assert!(lookup.best_match_calls().is_empty());

    Ok(())
}

/// Tests that the stored total equals the sum of card quantities.
///
/// Expected: Ok with total matching the stored rows
#[tokio::test]
async fn total_matches_sum_of_quantities() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lookup = ScriptedLookup::default();

    let deck = DeckService::new(db)
        .create(
            &lookup,
            SaveDeckParams {
                name: None,
                main_list: "A x3\n\nB\nC X 2".to_string(),
                extra_list: "D x1".to_string(),
                side_list: "E x3\nA x1".to_string(),
            },
        )
        .await?;

    let sum: i32 = deck.cards.iter().map(|card| card.quantity).sum();
    assert_eq!(deck.total_cards, 11);
    assert_eq!(deck.total_cards, sum);

    Ok(())
}

/// Tests that duplicate names are sent to the bulk lookup once, first spelling kept.
///
/// Expected: Ok with one bulk call over distinct names in list order
#[tokio::test]
async fn dedupes_names_for_bulk_lookup() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lookup = ScriptedLookup::default()
        .with_exact("Sangan", "Effect Monster")
        .with_exact("Raigeki", "Spell Card");

    DeckService::new(db)
        .create(
            &lookup,
            SaveDeckParams {
                name: None,
                main_list: "Sangan\nRaigeki\nSANGAN x2".to_string(),
                extra_list: String::new(),
                side_list: "raigeki".to_string(),
            },
        )
        .await?;

    assert_eq!(
        lookup.bulk_names(),
        vec![vec!["Sangan".to_string(), "Raigeki".to_string()]]
    );

    Ok(())
}

/// Tests that a create with all lists empty is rejected without writing anything.
///
/// Expected: Err(BadRequest) and no deck rows
#[tokio::test]
async fn rejects_empty_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lookup = ScriptedLookup::default();

    let result = DeckService::new(db)
        .create(&lookup, SaveDeckParams::default())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(ref msg)) if msg == "No deck list provided"));
    assert_eq!(entity::prelude::Deck::find().count(db).await?, 0);
    assert_eq!(lookup.bulk_calls(), 0);

    Ok(())
}

/// Tests that whitespace-only lists still create a deck with no cards.
///
/// Expected: Ok with an empty deck
#[tokio::test]
async fn whitespace_only_list_creates_empty_deck() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lookup = ScriptedLookup::default();

    let deck = DeckService::new(db)
        .create(&lookup, main_list("   \n\n"))
        .await?;

    assert!(deck.cards.is_empty());
    assert_eq!(deck.total_cards, 0);

    Ok(())
}
