//! Core card-related types: Card, CardKind, CardName

use std::fmt;

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CardKind {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl CardKind {
    pub const ALL: [CardKind; 4] = [
        CardKind::Clubs,
        CardKind::Diamonds,
        CardKind::Hearts,
        CardKind::Spades,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            CardKind::Clubs => "Clubs",
            CardKind::Diamonds => "Diamonds",
            CardKind::Hearts => "Hearts",
            CardKind::Spades => "Spades",
        }
    }
}

/// Face names. Only aces and court cards carry one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CardName {
    Ace,
    Jack,
    Queen,
    King,
}

impl CardName {
    pub const fn for_number(number: u8) -> Option<CardName> {
        match number {
            1 => Some(CardName::Ace),
            11 => Some(CardName::Jack),
            12 => Some(CardName::Queen),
            13 => Some(CardName::King),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            CardName::Ace => "Ace",
            CardName::Jack => "Jack",
            CardName::Queen => "Queen",
            CardName::King => "King",
        }
    }
}

pub const ACE: u8 = 1;
pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 13;

/// A playing card. `number` is always within `1..=13`; use [`Card::new`]
/// when the value comes from outside the engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Card {
    pub kind: CardKind,
    pub number: u8,
}

impl Card {
    pub fn new(kind: CardKind, number: u8) -> Result<Self, DomainError> {
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&number) {
            return Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Card number out of range: {number}"),
            ));
        }
        Ok(Card { kind, number })
    }

    pub const fn name(&self) -> Option<CardName> {
        CardName::for_number(self.number)
    }

    pub const fn is_ace(&self) -> bool {
        self.number == ACE
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} of {}", name.as_str(), self.kind.as_str()),
            None => write!(f, "{} of {}", self.number, self.kind.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_face_numbers() {
        assert_eq!(CardName::for_number(1), Some(CardName::Ace));
        assert_eq!(CardName::for_number(11), Some(CardName::Jack));
        assert_eq!(CardName::for_number(12), Some(CardName::Queen));
        assert_eq!(CardName::for_number(13), Some(CardName::King));
        for n in 2..=10 {
            assert_eq!(CardName::for_number(n), None);
        }
    }

    #[test]
    fn new_rejects_out_of_range_numbers() {
        assert!(Card::new(CardKind::Hearts, 0).is_err());
        assert!(Card::new(CardKind::Hearts, 14).is_err());
        let c = Card::new(CardKind::Hearts, 13).unwrap();
        assert_eq!(c.name(), Some(CardName::King));
    }

    #[test]
    fn display_reads_naturally() {
        let ace = Card::new(CardKind::Spades, 1).unwrap();
        let seven = Card::new(CardKind::Diamonds, 7).unwrap();
        assert_eq!(ace.to_string(), "Ace of Spades");
        assert_eq!(seven.to_string(), "7 of Diamonds");
        assert!(ace.is_ace());
        assert!(!seven.is_ace());
    }
}
