//! A verifiable 52-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that deals a deterministic, auditable
//! sequence of cards: a stable string serialization with an embedded draw
//! cursor, and a SHA-256 commitment over the card order that can be
//! published before any card is revealed.
//!
//! # Example
//!
//! ```
//! use vdeck::Deck;
//!
//! // Commit to a shuffle before play.
//! let mut deck = Deck::shuffled(42);
//! let commitment = deck.hash().to_owned();
//!
//! let hole_cards = deck.deal(2).unwrap();
//! assert_eq!(deck.remaining(), 50);
//!
//! // Revealing the deck later proves the order matched the commitment.
//! let revealed = Deck::new(&deck.to_string()).unwrap();
//! assert_eq!(revealed.hash(), commitment);
//! assert_eq!(revealed.cards(), deck.cards());
//! let _ = hole_cards;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hash;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{DealError, DrawError, ParseCardError, ParseDeckError};
