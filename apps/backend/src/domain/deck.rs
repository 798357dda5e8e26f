//! Deck construction, shuffling and drawing.

use rand::seq::{index, SliceRandom};
use rand::Rng;

use super::cards_types::{Card, CardKind, MAX_NUMBER, MIN_NUMBER};
use super::rules::DECK_SIZE;

/// Generate a full 52-card deck in standard order: kinds C, D, H, S and
/// numbers 1..=13 within each kind.
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE as usize);
    for kind in CardKind::ALL {
        for number in MIN_NUMBER..=MAX_NUMBER {
            deck.push(Card { kind, number });
        }
    }
    deck
}

/// Uniform in-place shuffle.
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// Result of drawing from a deck: what is left and what was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub deck: Vec<Card>,
    pub hand: Vec<Card>,
}

/// Draw `min(count, deck.len())` cards uniformly without replacement.
///
/// The remaining deck keeps its relative order. Never fails; an empty deck
/// yields an empty hand.
pub fn draw_from<R: Rng + ?Sized>(deck: &[Card], count: usize, rng: &mut R) -> Draw {
    let amount = count.min(deck.len());
    if amount == 0 {
        return Draw {
            deck: deck.to_vec(),
            hand: Vec::new(),
        };
    }

    let picked = index::sample(rng, deck.len(), amount);
    let mut taken = vec![false; deck.len()];
    let mut hand = Vec::with_capacity(amount);
    for i in picked.iter() {
        taken[i] = true;
        hand.push(deck[i]);
    }

    let rest = deck
        .iter()
        .zip(taken)
        .filter_map(|(card, was_taken)| (!was_taken).then_some(*card))
        .collect();

    Draw { deck: rest, hand }
}

/// Aces in `cards`, in order.
pub fn aces_in(cards: &[Card]) -> Vec<Card> {
    cards.iter().filter(|c| c.is_ace()).copied().collect()
}
