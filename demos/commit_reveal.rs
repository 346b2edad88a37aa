//! Commit-reveal dealing example.
//!
//! Shuffles a deck, publishes the order commitment, deals a Texas Hold'em
//! style board, then reveals the deck string and verifies it against the
//! commitment.

use std::time::{SystemTime, UNIX_EPOCH};

use vdeck::Deck;

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut deck = Deck::shuffled(seed);
    let commitment = deck.hash().to_owned();
    println!("Commitment (published before dealing): {commitment}");

    let hole = deck.deal(2).expect("fresh deck has 52 cards");
    println!("Hole cards: {} {}", hole[0], hole[1]);

    let flop = deck.deal(3).expect("deck has cards for the flop");
    println!("Flop:       {} {} {}", flop[0], flop[1], flop[2]);

    let turn = deck.draw_next().expect("deck has a turn card");
    let river = deck.draw_next().expect("deck has a river card");
    println!("Turn/river: {turn} {river}");
    println!("Remaining:  {}", deck.remaining());

    // Reveal the full order and let anyone check it against the commitment.
    let revealed = deck.to_string();
    println!("\nRevealed deck:\n{revealed}");

    let verified = Deck::new(&revealed).expect("revealed deck string is valid");
    assert_eq!(verified.hash(), commitment);
    println!("\nCommitment verified: deck order matches.");
}
