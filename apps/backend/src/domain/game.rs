//! The Aces game state machine.
//!
//! A game starts with a shuffled deck and a five-card hand. Each deal draws
//! a fresh hand at random from what is left. The player wins when the very
//! last cards dealt include an ace; once the deck holds no more aces the
//! game is finished either way.

use std::collections::HashSet;

use rand::Rng;

use super::cards_types::Card;
use super::deck::{aces_in, build_deck, draw_from, shuffle_deck, Draw};
use super::rules::{HAND_SIZE, MAX_ROUND};
use super::status::GameStatus;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Raw game fields as they come out of storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedGame {
    pub deck: Vec<Card>,
    pub hand: Vec<Card>,
    pub finished: bool,
    pub user_won: bool,
    pub round: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcesGame {
    deck: Vec<Card>,
    hand: Vec<Card>,
    finished: bool,
    user_won: bool,
    round: u8,
}

impl AcesGame {
    /// Fresh game: full deck, shuffled, first hand drawn.
    pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = build_deck();
        shuffle_deck(&mut deck, rng);
        let Draw { deck, hand } = draw_from(&deck, HAND_SIZE as usize, rng);
        Self {
            deck,
            hand,
            finished: false,
            user_won: false,
            round: 1,
        }
    }

    /// Rehydrate a stored game, rejecting states no sequence of deals could
    /// have produced.
    pub fn from_persisted(p: PersistedGame) -> Result<Self, DomainError> {
        if !(1..=MAX_ROUND).contains(&p.round) {
            return Err(corrupt(format!("round {} out of range", p.round)));
        }
        if p.hand.len() > HAND_SIZE as usize {
            return Err(corrupt(format!("hand holds {} cards", p.hand.len())));
        }
        let mut seen = HashSet::with_capacity(p.deck.len() + p.hand.len());
        for card in p.deck.iter().chain(p.hand.iter()) {
            if !seen.insert(*card) {
                return Err(corrupt(format!("duplicate card {card}")));
            }
        }
        if p.user_won && !p.finished {
            return Err(corrupt("won but not finished".to_string()));
        }

        Ok(Self {
            deck: p.deck,
            hand: p.hand,
            finished: p.finished,
            user_won: p.user_won,
            round: p.round,
        })
    }

    pub fn into_persisted(self) -> PersistedGame {
        PersistedGame {
            deck: self.deck,
            hand: self.hand,
            finished: self.finished,
            user_won: self.user_won,
            round: self.round,
        }
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn user_won(&self) -> bool {
        self.user_won
    }

    pub fn round(&self) -> u8 {
        self.round
    }

    /// Preview a draw without touching the game.
    pub fn draw<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Draw {
        draw_from(&self.deck, count, rng)
    }

    /// Replace the hand with a fresh draw and advance the round.
    ///
    /// `finished` and `user_won` only ever flip to true. Dealing from an
    /// exhausted deck returns an empty hand.
    pub fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Card> {
        let Draw { deck, hand } = self.draw(HAND_SIZE as usize, rng);

        if aces_in(&deck).is_empty() {
            self.finished = true;
            if deck.is_empty() && !aces_in(&hand).is_empty() {
                self.user_won = true;
            }
        }

        self.deck = deck;
        self.hand = hand;
        self.round = self.round.saturating_add(1).min(MAX_ROUND);
        self.hand.clone()
    }

    /// Start over in place with a newly shuffled deck.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new_game(rng);
    }

    /// Aces among `cards`, or among the remaining deck when `None`.
    pub fn get_aces(&self, cards: Option<&[Card]>) -> Vec<Card> {
        aces_in(cards.unwrap_or(&self.deck))
    }

    pub fn aces_in_deck(&self) -> Vec<Card> {
        self.get_aces(None)
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::of(self)
    }
}

fn corrupt(detail: String) -> DomainError {
    DomainError::infra(
        InfraErrorKind::DataCorruption,
        format!("Stored game invalid: {detail}"),
    )
}
