//! Error codes for the Aces API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Every code
//! is SCREAMING_SNAKE_CASE and appears verbatim in problem+json bodies.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// No session, or the session expired
    Unauthorized,
    /// Session points at a user that no longer exists
    InvalidSession,
    IncorrectPassword,
    /// Login attempted while a session is live
    AlreadySignedIn,

    // Request Validation
    ValidationError,
    /// Unparseable `since` duration
    InvalidDuration,
    ParseCard,

    // Resource Not Found
    /// The caller has never started a game
    NoActiveGame,
    GameNotFound,
    UserNotFound,
    NotFound,

    // Business Logic Conflicts
    UsernameTaken,
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // Database
    DbError,
    DbUnavailable,
    DbTimeout,

    // System
    Internal,
    InternalError,
    ConfigError,
    DataCorruption,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidSession => "INVALID_SESSION",
            Self::IncorrectPassword => "INCORRECT_PASSWORD",
            Self::AlreadySignedIn => "ALREADY_SIGNED_IN",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidDuration => "INVALID_DURATION",
            Self::ParseCard => "PARSE_CARD",

            Self::NoActiveGame => "NO_ACTIVE_GAME",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",

            Self::Internal => "INTERNAL",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }

    #[cfg(test)]
    pub(crate) const ALL: [ErrorCode; 21] = [
        Self::Unauthorized,
        Self::InvalidSession,
        Self::IncorrectPassword,
        Self::AlreadySignedIn,
        Self::ValidationError,
        Self::InvalidDuration,
        Self::ParseCard,
        Self::NoActiveGame,
        Self::GameNotFound,
        Self::UserNotFound,
        Self::NotFound,
        Self::UsernameTaken,
        Self::OptimisticLock,
        Self::Conflict,
        Self::DbError,
        Self::DbUnavailable,
        Self::DbTimeout,
        Self::Internal,
        Self::InternalError,
        Self::ConfigError,
        Self::DataCorruption,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
