use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::cards_types::{Card, CardKind};
use super::deck::build_deck;
use super::game::{AcesGame, PersistedGame};
use super::rules::MAX_ROUND;
use super::status::GameStatus;

fn card(kind: CardKind, number: u8) -> Card {
    Card::new(kind, number).unwrap()
}

fn pips(kind: CardKind, numbers: &[u8]) -> Vec<Card> {
    numbers.iter().map(|&n| card(kind, n)).collect()
}

fn rehydrate(deck: Vec<Card>, hand: Vec<Card>, round: u8) -> AcesGame {
    AcesGame::from_persisted(PersistedGame {
        deck,
        hand,
        finished: false,
        user_won: false,
        round,
    })
    .unwrap()
}

#[test]
fn new_game_deals_opening_hand() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let g = AcesGame::new_game(&mut rng);
    assert_eq!(g.deck().len(), 47);
    assert_eq!(g.hand().len(), 5);
    assert_eq!(g.round(), 1);
    assert!(!g.finished());
    assert!(!g.user_won());

    let mut all: Vec<Card> = g.deck().iter().chain(g.hand()).copied().collect();
    all.sort();
    assert_eq!(all, build_deck());
}

#[test]
fn same_seed_same_game() {
    let a = AcesGame::new_game(&mut ChaCha8Rng::seed_from_u64(42));
    let b = AcesGame::new_game(&mut ChaCha8Rng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn deal_finishes_exactly_when_deck_runs_out_of_aces() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut deck = pips(CardKind::Clubs, &[2, 3, 4, 5, 6, 7]);
    deck.extend(pips(CardKind::Hearts, &[1, 2, 3, 4, 5]));
    deck.push(card(CardKind::Spades, 1));
    // A five-card draw may or may not take both aces; finished must track it.
    let mut g = rehydrate(deck, pips(CardKind::Diamonds, &[2, 3, 4, 5, 6]), 2);
    let hand = g.deal(&mut rng);
    assert_eq!(hand.len(), 5);
    assert_eq!(g.deck().len(), 7);
    assert_eq!(g.round(), 3);
    assert_eq!(g.finished(), g.aces_in_deck().is_empty());
    assert!(!g.user_won());
}

#[test]
fn last_hand_with_ace_wins() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = pips(CardKind::Clubs, &[2, 3, 4, 5]);
    deck.push(card(CardKind::Hearts, 1));
    let mut g = rehydrate(deck, pips(CardKind::Diamonds, &[2, 3, 4, 5, 6]), 10);

    let hand = g.deal(&mut rng);
    assert_eq!(hand.len(), 5);
    assert!(hand.contains(&card(CardKind::Hearts, 1)));
    assert!(g.deck().is_empty());
    assert!(g.finished());
    assert!(g.user_won());
    assert_eq!(g.round(), MAX_ROUND);
    assert_eq!(g.status(), GameStatus::Won);
    assert_eq!(g.status().message(), "Winner!");
}

#[test]
fn last_hand_without_ace_loses() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let deck = pips(CardKind::Spades, &[9, 10, 11]);
    let mut g = rehydrate(deck, pips(CardKind::Diamonds, &[1, 3, 4, 5, 6]), 10);

    let hand = g.deal(&mut rng);
    assert_eq!(hand.len(), 3);
    assert!(g.deck().is_empty());
    assert!(g.finished());
    assert!(!g.user_won());
    assert_eq!(g.status(), GameStatus::Lost);
    assert_eq!(g.status().message(), "You lost. Better luck next time!");
}

#[test]
fn aces_gone_early_finishes_without_win() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let deck = pips(CardKind::Clubs, &[2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    let mut g = rehydrate(deck, pips(CardKind::Hearts, &[1, 2, 3, 4, 5]), 4);

    g.deal(&mut rng);
    assert_eq!(g.deck().len(), 5);
    assert!(g.finished());
    assert!(!g.user_won());
    assert_eq!(g.round(), 5);
    assert_eq!(g.status(), GameStatus::AcesExhausted);
    assert!(g.status().message().starts_with("Game over."));
}

#[test]
fn deal_from_empty_deck_is_a_noop() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let mut g = AcesGame::from_persisted(PersistedGame {
        deck: Vec::new(),
        hand: vec![card(CardKind::Clubs, 1)],
        finished: true,
        user_won: true,
        round: MAX_ROUND,
    })
    .unwrap();

    for _ in 0..3 {
        let hand = g.deal(&mut rng);
        assert!(hand.is_empty());
        assert!(g.finished());
        assert!(g.user_won(), "a won game stays won");
        assert_eq!(g.round(), MAX_ROUND);
    }
}

#[test]
fn full_playthrough_caps_round_and_exhausts_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut g = AcesGame::new_game(&mut rng);
    let mut hand_sizes = Vec::new();
    while !g.deck().is_empty() {
        hand_sizes.push(g.deal(&mut rng).len());
    }
    assert_eq!(hand_sizes, vec![5, 5, 5, 5, 5, 5, 5, 5, 5, 2]);
    assert_eq!(g.round(), MAX_ROUND);
    assert!(g.finished());
    assert_eq!(g.user_won(), !g.get_aces(Some(g.hand())).is_empty());

    g.deal(&mut rng);
    assert_eq!(g.round(), MAX_ROUND);
}

#[test]
fn reset_starts_over() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut g = AcesGame::new_game(&mut rng);
    while !g.finished() {
        g.deal(&mut rng);
    }
    let before = g.clone();
    g.reset(&mut rng);
    assert_ne!(g, before);
    assert_eq!(g.deck().len(), 47);
    assert_eq!(g.hand().len(), 5);
    assert_eq!(g.round(), 1);
    assert!(!g.finished());
    assert!(!g.user_won());
    assert_eq!(g.status(), GameStatus::Active);
}

#[test]
fn draw_previews_without_mutating() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let g = AcesGame::new_game(&mut rng);
    let snapshot = g.clone();
    let d = g.draw(5, &mut rng);
    assert_eq!(d.hand.len(), 5);
    assert_eq!(d.deck.len(), 42);
    assert_eq!(g, snapshot);
}

#[test]
fn get_aces_defaults_to_deck() {
    let deck = vec![
        card(CardKind::Clubs, 1),
        card(CardKind::Clubs, 2),
        card(CardKind::Spades, 1),
    ];
    let hand = vec![card(CardKind::Hearts, 1), card(CardKind::Hearts, 13)];
    let g = rehydrate(deck, hand.clone(), 3);
    assert_eq!(
        g.get_aces(None),
        vec![card(CardKind::Clubs, 1), card(CardKind::Spades, 1)]
    );
    assert_eq!(g.get_aces(Some(&hand)), vec![card(CardKind::Hearts, 1)]);
    assert!(g.get_aces(Some(&[])).is_empty());
}

#[test]
fn from_persisted_rejects_impossible_states() {
    let ok = PersistedGame {
        deck: pips(CardKind::Clubs, &[2, 3]),
        hand: pips(CardKind::Hearts, &[2, 3]),
        finished: false,
        user_won: false,
        round: 3,
    };
    assert!(AcesGame::from_persisted(ok.clone()).is_ok());

    let zero_round = PersistedGame { round: 0, ..ok.clone() };
    assert!(AcesGame::from_persisted(zero_round).is_err());

    let past_cap = PersistedGame {
        round: MAX_ROUND + 1,
        ..ok.clone()
    };
    assert!(AcesGame::from_persisted(past_cap).is_err());

    let dup = PersistedGame {
        hand: pips(CardKind::Clubs, &[2]),
        ..ok.clone()
    };
    assert!(AcesGame::from_persisted(dup).is_err());

    let big_hand = PersistedGame {
        hand: pips(CardKind::Hearts, &[2, 3, 4, 5, 6, 7]),
        ..ok.clone()
    };
    assert!(AcesGame::from_persisted(big_hand).is_err());

    let won_unfinished = PersistedGame {
        user_won: true,
        ..ok
    };
    assert!(AcesGame::from_persisted(won_unfinished).is_err());
}

#[test]
fn persisted_round_trip_preserves_state() {
    let mut rng = ChaCha8Rng::seed_from_u64(10);
    let mut g = AcesGame::new_game(&mut rng);
    g.deal(&mut rng);
    let back = AcesGame::from_persisted(g.clone().into_persisted()).unwrap();
    assert_eq!(back, g);
}
