//! Deck order commitment hashing.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use sha2::{Digest, Sha256};

use crate::card::Card;

/// Computes the SHA-256 commitment over an ordered card sequence.
///
/// The digest covers the canonical mnemonics joined by `-`, with no cursor
/// marker, so two decks have equal commitments iff their card orders are
/// equal regardless of how many cards have been drawn. Returned as lowercase
/// hex.
#[must_use]
pub fn commitment(cards: &[Card]) -> String {
    let mnemonics: Vec<String> = cards.iter().map(|card| card.mnemonic()).collect();
    let digest = Sha256::digest(mnemonics.join("-").as_bytes());
    format!("{digest:x}")
}
