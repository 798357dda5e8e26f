//! Card lists to and from their stored text column format (a JSON array).

use super::cards_types::Card;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Encode cards for a `deck`/`hand` column.
pub fn to_stored_format(cards: &[Card]) -> Result<String, DomainError> {
    serde_json::to_string(cards).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Other("encode".into()),
            format!("Failed to encode cards: {e}"),
        )
    })
}

/// Decode a `deck`/`hand` column. Anything unreadable is treated as
/// corrupted storage rather than a client error.
pub fn from_stored_format(raw: &str) -> Result<Vec<Card>, DomainError> {
    serde_json::from_str(raw).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("Stored cards unreadable: {e}"),
        )
    })
}
