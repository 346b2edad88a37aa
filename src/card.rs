//! Card types and the mnemonic codec.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit, ordered `Clubs < Diamonds < Hearts < Spades`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the 1-based position of the suit in the canonical order.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the suit letter (`C`, `D`, `H`, `S`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }

    /// Parses a suit letter, case-insensitively.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'C' | 'c' => Some(Self::Clubs),
            'D' | 'd' => Some(Self::Diamonds),
            'H' | 'h' => Some(Self::Hearts),
            'S' | 's' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 10 = Ten, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but yield a non-standard mnemonic and value. Parsing via
    /// [`FromStr`] always produces valid ranks.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the card's absolute value in `0..=51`.
    ///
    /// Computed as `13 * (suit_index - 1) + (rank - 1)`, a bijection over the
    /// 52 valid (suit, rank) pairs: `AC` is 0 and `KS` is 51.
    #[must_use]
    pub const fn value(self) -> u8 {
        13 * (self.suit as u8) + (self.rank - 1)
    }

    /// Returns the rank letter (`A`, `2`-`9`, `T`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn rank_letter(self) -> char {
        match self.rank {
            1 => 'A',
            2..=9 => (b'0' + self.rank) as char,
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            _ => '?',
        }
    }

    /// Returns the canonical 2-character mnemonic, e.g. `"AC"` or `"TH"`.
    #[must_use]
    pub fn mnemonic(self) -> String {
        format!("{self}")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_letter(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a mnemonic such as `"AS"`, `"2c"`, `"td"` or `"10H"`.
    ///
    /// Parsing is case-insensitive and accepts `10` as an input alias for
    /// `T`; the card always re-serializes to the canonical single-character
    /// rank form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 2 {
            return Err(ParseCardError::InvalidFormat);
        }

        let (rank_token, suit_token) = s.split_at(s.len() - 1);
        let suit_letter = suit_token
            .chars()
            .next()
            .ok_or(ParseCardError::InvalidFormat)?;
        let suit = Suit::from_letter(suit_letter).ok_or(ParseCardError::InvalidSuit)?;

        let rank = match rank_token.as_bytes() {
            [b'A' | b'a'] => 1,
            [b'T' | b't'] | [b'1', b'0'] => 10,
            [b'J' | b'j'] => 11,
            [b'Q' | b'q'] => 12,
            [b'K' | b'k'] => 13,
            [digit @ b'2'..=b'9'] => digit - b'0',
            token if !token.is_empty() && token.iter().all(u8::is_ascii_digit) => {
                return Err(ParseCardError::InvalidRank);
            }
            _ => return Err(ParseCardError::InvalidFormat),
        };

        Ok(Self { suit, rank })
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
