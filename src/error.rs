//! Error types for deck operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while parsing a card mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The string does not match the rank-then-suit mnemonic pattern.
    #[error("invalid card mnemonic format")]
    InvalidFormat,
    /// The suit character is not one of `C`, `D`, `H`, `S`.
    #[error("invalid suit character")]
    InvalidSuit,
    /// The rank token is numeric but not a valid rank.
    #[error("invalid rank token")]
    InvalidRank,
}

/// Errors that can occur while parsing a canonical deck string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseDeckError {
    /// The string does not contain exactly 52 card tokens.
    #[error("deck must contain 52 cards, found {0}")]
    WrongCardCount(usize),
    /// A token failed to parse as a card.
    #[error("invalid card at position {position}")]
    InvalidCard {
        /// 0-based index of the offending token.
        position: usize,
        /// The underlying mnemonic parse failure.
        #[source]
        source: ParseCardError,
    },
    /// The same card appears more than once.
    #[error("duplicate card {0} in deck")]
    DuplicateCard(Card),
}

/// Errors that can occur when drawing a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No more cards in the deck.
    #[error("no more cards in the deck")]
    Exhausted,
}

/// Errors that can occur when dealing a batch of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer cards remain than were requested.
    #[error("not enough cards in the deck")]
    InsufficientCards,
}
