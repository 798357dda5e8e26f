/// Cards in a standard deck.
pub const DECK_SIZE: u8 = 52;
/// Cards drawn per deal.
pub const HAND_SIZE: u8 = 5;

/// Round counter after the deck is fully dealt: one round for the opening
/// hand plus one per deal needed to exhaust the remainder.
pub const fn max_round(deck_size: u8, hand_size: u8) -> u8 {
    1 + (deck_size - hand_size).div_ceil(hand_size)
}

pub const MAX_ROUND: u8 = max_round(DECK_SIZE, HAND_SIZE);
