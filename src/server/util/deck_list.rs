//! Deck-list text parsing.
//!
//! A deck list is free text with one card per line. A line may end in a quantity
//! suffix such as `x3`, `X 2` or ` x10`; without one the quantity is 1. Blank lines are
//! skipped and surrounding whitespace is ignored.

use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::model::deck::CardArea;

/// Matches `<name> x<digits>` at the end of a line, lazily so trailing whitespace
/// before the `x` stays out of the name.
static QUANTITY_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s*[xX]\s*([0-9]+)$").expect("quantity suffix pattern is valid")
});

/// One entry of a deck list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCard {
    pub name: String,
    pub quantity: i32,
    pub area: CardArea,
}

impl fmt::Display for ParsedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.name, self.quantity)
    }
}

/// Parses a single list into card entries tagged with `area`, preserving line order.
///
/// Entries are not merged: a name repeated on two lines yields two entries. A suffix of
/// `x0` drops the line, and a suffix too large for the quantity type is kept as part of
/// the name with quantity 1.
pub fn parse_deck_list(text: &str, area: CardArea) -> Vec<ParsedCard> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| parse_line(line, area))
        .collect()
}

/// Parses the three lists of a deck, yielding MAIN entries, then EXTRA, then SIDE.
pub fn parse_deck_lists(main_list: &str, extra_list: &str, side_list: &str) -> Vec<ParsedCard> {
    let mut cards = parse_deck_list(main_list, CardArea::Main);
    cards.extend(parse_deck_list(extra_list, CardArea::Extra));
    cards.extend(parse_deck_list(side_list, CardArea::Side));
    cards
}

fn parse_line(line: &str, area: CardArea) -> Option<ParsedCard> {
    let suffixed = QUANTITY_SUFFIX.captures(line).and_then(|captures| {
        let quantity = captures[2].parse::<i32>().ok()?;
        Some((captures[1].trim().to_string(), quantity))
    });

    match suffixed {
        Some((_, 0)) => None,
        Some((name, quantity)) => Some(ParsedCard { name, quantity, area }),
        None => Some(ParsedCard {
            name: line.to_string(),
            quantity: 1,
            area,
        }),
    }
}
