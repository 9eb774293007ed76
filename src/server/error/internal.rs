use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored deck card carries an area outside MAIN, EXTRA and SIDE.
    ///
    /// Rows are only ever written through `CardArea`, so this points at manual edits
    /// or a schema drift. Results in a 500 Internal Server Error with a generic message
    /// returned to client.
    #[error("Deck card {card_id} has invalid area '{value}'")]
    InvalidCardArea {
        /// ID of the offending deck card row
        card_id: i32,
        /// The stored area value
        value: String,
    },
}
