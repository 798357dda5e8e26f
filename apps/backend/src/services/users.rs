use sea_orm::ConnectionTrait;
use serde::Deserialize;
use time::{Duration, OffsetDateTime};
use tracing::{info, warn};

use crate::auth::password::{hash_password, verify_password};
use crate::error::AppError;
use crate::errors::domain::{AuthKind, DomainError, NotFoundKind, ValidationKind};
use crate::repos::games as games_repo;
use crate::repos::users::{self as users_repo, User};

pub const MIN_USERNAME_LEN: usize = 5;
pub const MIN_PASSWORD_LEN: usize = 8;
const PASSWORD_SPECIALS: &str = "#?!.@$%^&*-";

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Outcomes of a user's finished games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub games_played: u64,
    pub games_won: u64,
    pub games_lost: u64,
}

fn validate_username(username: &str) -> Result<(), DomainError> {
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(DomainError::validation(
            ValidationKind::InvalidUsername,
            format!("Username must be at least {MIN_USERNAME_LEN} characters long"),
        ));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(DomainError::validation(
            ValidationKind::InvalidUsername,
            "Username may only contain lower-case letters and digits",
        ));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), DomainError> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LEN;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIALS.contains(c));

    if long_enough && has_upper && has_lower && has_digit && has_special {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidPassword,
            format!(
                "Password should be minimum {MIN_PASSWORD_LEN} chars long, contain at least one upper-case letter, one lower-case letter, one digit and one special char ({PASSWORD_SPECIALS})."
            ),
        ))
    }
}

pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    /// Validate, hash and insert a new user.
    pub async fn register<C: ConnectionTrait>(
        &self,
        conn: &C,
        input: RegisterInput,
    ) -> Result<User, AppError> {
        validate_username(&input.username)?;
        validate_password(&input.password)?;

        let password_hash = hash_password(&input.password)?;
        let user = users_repo::create_user(conn, &input.username, &password_hash).await?;
        info!(user_id = user.id, "user registered");
        Ok(user)
    }

    /// Check credentials. Unknown username and wrong password are
    /// distinguished.
    pub async fn login<C: ConnectionTrait>(
        &self,
        conn: &C,
        input: LoginInput,
    ) -> Result<User, AppError> {
        let user = users_repo::find_by_username(conn, &input.username)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::User,
                    "No user found with the specified username",
                )
            })?;

        if !verify_password(&user.password_hash, &input.password)? {
            warn!(user_id = user.id, "incorrect password");
            return Err(DomainError::auth(AuthKind::IncorrectPassword, "Incorrect password").into());
        }

        info!(user_id = user.id, "user logged in");
        Ok(user)
    }

    /// Load the user behind a live session.
    pub async fn require_user<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: i64,
    ) -> Result<User, AppError> {
        users_repo::find_by_id(conn, user_id)
            .await?
            .ok_or_else(|| DomainError::invalid_session().into())
    }

    /// Finished games created within the last `since`.
    pub async fn stats<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: i64,
        since: Duration,
    ) -> Result<Stats, AppError> {
        let cutoff = OffsetDateTime::now_utc() - since;
        let counts = games_repo::count_finished_since(conn, user_id, cutoff).await?;
        Ok(Stats {
            games_played: counts.played,
            games_won: counts.won,
            games_lost: counts.played.saturating_sub(counts.won),
        })
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usernames() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("bob42").is_ok());
        assert!(validate_username("12345").is_ok());
        assert!(validate_username("abcd").is_err());
        assert!(validate_username("Alice").is_err());
        assert!(validate_username("alice_1").is_err());
        assert!(validate_username("al ice").is_err());
        assert!(validate_username("ålice").is_err());
    }

    #[test]
    fn passwords() {
        assert!(validate_password("Sup3r$ecret").is_ok());
        assert!(validate_password("Aa1-aaaa").is_ok());
        assert!(validate_password("Aa1-aaa").is_err(), "too short");
        assert!(validate_password("aa1-aaaa").is_err(), "no upper");
        assert!(validate_password("AA1-AAAA").is_err(), "no lower");
        assert!(validate_password("Aaa-aaaa").is_err(), "no digit");
        assert!(validate_password("Aa1aaaaa").is_err(), "no special");
        assert!(validate_password("Aa1_aaaa").is_err(), "underscore is not special");
    }

    #[test]
    fn validation_errors_carry_kind() {
        match validate_username("ab") {
            Err(DomainError::Validation(ValidationKind::InvalidUsername, _)) => {}
            other => panic!("unexpected {other:?}"),
        }
        match validate_password("x") {
            Err(DomainError::Validation(ValidationKind::InvalidPassword, _)) => {}
            other => panic!("unexpected {other:?}"),
        }
    }
}
