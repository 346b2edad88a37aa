//! The deck: ordered cards, a draw cursor, and an order commitment.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::{DealError, DrawError, ParseDeckError};
use crate::hash;

/// An ordered 52-card deck with a draw cursor and an order commitment hash.
///
/// The deck is a single-owner value: cards are never reordered after
/// construction (except by an explicit [`shuffle`](Self::shuffle)), and
/// drawing only advances the cursor. The commitment hash is fixed over the
/// card order at construction time, so it can be published before any card
/// is revealed and checked later against the serialized deck.
///
/// # Example
///
/// ```
/// use vdeck::Deck;
///
/// let mut deck = Deck::standard();
/// let hole = deck.deal(2).unwrap();
/// assert_eq!(hole[0].mnemonic(), "AC");
/// assert_eq!(deck.remaining(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in deck order.
    cards: Vec<Card>,
    /// Index of the next card to draw.
    top: usize,
    /// SHA-256 commitment over the card order.
    hash: String,
}

impl Deck {
    /// Creates a deck from an optional canonical deck string.
    ///
    /// An empty or whitespace-only `source` produces the standard ordered
    /// deck. Otherwise `source` must be 52 `-`-separated mnemonics, with at
    /// most one token bracketed as `[XX]` to mark the cursor position
    /// (cursor defaults to 0 when no marker is present).
    ///
    /// # Errors
    ///
    /// Returns an error if the token count is not 52, a token fails to parse
    /// as a card, or the same card appears twice.
    pub fn new(source: &str) -> Result<Self, ParseDeckError> {
        let source = source.trim();
        if source.is_empty() {
            Ok(Self::standard())
        } else {
            source.parse()
        }
    }

    /// Creates the standard ordered deck.
    ///
    /// All 13 ranks of Clubs, then Diamonds, Hearts, and Spades, ranks
    /// ascending Ace through King; cursor at 0.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        Self::from_parts(cards, 0)
    }

    /// Creates a standard deck shuffled with the given seed.
    ///
    /// The same seed always yields the same order, so shuffles are
    /// reproducible under test.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Self::standard();
        deck.shuffle(&mut rng);
        deck
    }

    fn from_parts(cards: Vec<Card>, top: usize) -> Self {
        let hash = hash::commitment(&cards);
        Self { cards, top, hash }
    }

    /// Reorders the deck with the given random source and resets the cursor.
    ///
    /// The commitment hash is recomputed over the new order, so a shuffle
    /// must happen before the commitment is published.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.top = 0;
        self.hash = hash::commitment(&self.cards);
    }

    /// Draws the next card and advances the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is exhausted; a failed call never moves
    /// the cursor.
    pub fn draw_next(&mut self) -> Result<Card, DrawError> {
        let card = self
            .cards
            .get(self.top)
            .copied()
            .ok_or(DrawError::Exhausted)?;
        self.top += 1;
        Ok(card)
    }

    /// Deals `amount` cards in draw order.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than `amount` cards remain. The deal is
    /// all-or-nothing: on failure the cursor does not move.
    pub fn deal(&mut self, amount: usize) -> Result<Vec<Card>, DealError> {
        let end = self
            .top
            .checked_add(amount)
            .ok_or(DealError::InsufficientCards)?;
        if end > self.cards.len() {
            return Err(DealError::InsufficientCards);
        }

        let dealt = self.cards[self.top..end].to_vec();
        self.top = end;
        Ok(dealt)
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.top
    }

    /// Returns the cursor position (index of the next card to draw).
    #[must_use]
    pub const fn top(&self) -> usize {
        self.top
    }

    /// Returns the SHA-256 commitment over the card order as lowercase hex.
    #[must_use]
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Returns the cards in deck order, including already-drawn ones.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl fmt::Display for Deck {
    /// Serializes the deck to the canonical string format.
    ///
    /// Mnemonics joined by `-`, with the card at the cursor bracketed as
    /// `[XX]`. An exhausted deck carries no marker.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            if i == self.top {
                write!(f, "[{card}]")?;
            } else {
                write!(f, "{card}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Deck {
    type Err = ParseDeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split('-').collect();
        if tokens.len() != DECK_SIZE {
            return Err(ParseDeckError::WrongCardCount(tokens.len()));
        }

        let mut cards = Vec::with_capacity(DECK_SIZE);
        let mut seen = [false; DECK_SIZE];
        let mut top = 0;

        for (position, token) in tokens.into_iter().enumerate() {
            let mnemonic = match token
                .strip_prefix('[')
                .and_then(|inner| inner.strip_suffix(']'))
            {
                Some(inner) => {
                    top = position;
                    inner
                }
                None => token,
            };

            let card: Card = mnemonic
                .parse()
                .map_err(|source| ParseDeckError::InvalidCard { position, source })?;

            let slot = &mut seen[usize::from(card.value())];
            if *slot {
                return Err(ParseDeckError::DuplicateCard(card));
            }
            *slot = true;

            cards.push(card);
        }

        Ok(Self::from_parts(cards, top))
    }
}
