//! Serialization and deserialization for card types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, CardKind, CardName};

impl Serialize for CardKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CardKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "Clubs" => Ok(CardKind::Clubs),
            "Diamonds" => Ok(CardKind::Diamonds),
            "Hearts" => Ok(CardKind::Hearts),
            "Spades" => Ok(CardKind::Spades),
            _ => Err(serde::de::Error::custom(format!("Invalid card kind: {s}"))),
        }
    }
}

impl Serialize for CardName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Serialize)]
struct CardOut {
    kind: CardKind,
    number: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<CardName>,
}

// `name` is derived from `number`; whatever the client sends is ignored.
#[derive(Deserialize)]
struct CardIn {
    kind: CardKind,
    number: u8,
}

// Card serde (object form: {"kind":"Spades","number":1,"name":"Ace"})
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CardOut {
            kind: self.kind,
            number: self.number,
            name: self.name(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = CardIn::deserialize(deserializer)?;
        Card::new(raw.kind, raw.number).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn named_cards_carry_name() {
        let c = Card::new(CardKind::Spades, 1).unwrap();
        assert_eq!(
            serde_json::to_value(c).unwrap(),
            json!({"kind": "Spades", "number": 1, "name": "Ace"})
        );
        let q = Card::new(CardKind::Hearts, 12).unwrap();
        assert_eq!(
            serde_json::to_value(q).unwrap(),
            json!({"kind": "Hearts", "number": 12, "name": "Queen"})
        );
    }

    #[test]
    fn pip_cards_omit_name() {
        let c = Card::new(CardKind::Clubs, 9).unwrap();
        let s = serde_json::to_string(&c).unwrap();
        assert_eq!(s, r#"{"kind":"Clubs","number":9}"#);
    }

    #[test]
    fn incoming_name_is_ignored() {
        let c: Card =
            serde_json::from_value(json!({"kind": "Diamonds", "number": 5, "name": "King"}))
                .unwrap();
        assert_eq!(c, Card::new(CardKind::Diamonds, 5).unwrap());
        assert_eq!(c.name(), None);
    }

    #[test]
    fn out_of_range_and_unknown_kind_rejected() {
        assert!(serde_json::from_value::<Card>(json!({"kind": "Clubs", "number": 0})).is_err());
        assert!(serde_json::from_value::<Card>(json!({"kind": "Clubs", "number": 14})).is_err());
        assert!(serde_json::from_value::<Card>(json!({"kind": "CLUBS", "number": 3})).is_err());
    }
}
