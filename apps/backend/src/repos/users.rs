//! User repository functions for domain layer.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::users_sea as users_adapter;
use crate::entities::users;
use crate::errors::domain::DomainError;

/// User domain model. Carries the password hash; never serialize it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub current_game_id: Option<i64>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<users::Model> for User {
    fn from(m: users::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            password_hash: m.password_hash,
            current_game_id: m.current_game_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_id(conn, user_id).await?;
    Ok(user.map(User::from))
}

pub async fn find_by_username<C: ConnectionTrait>(
    conn: &C,
    username: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_username(conn, username).await?;
    Ok(user.map(User::from))
}

/// Insert a user. A taken username surfaces as `ConflictKind::UsernameTaken`.
pub async fn create_user<C: ConnectionTrait>(
    conn: &C,
    username: &str,
    password_hash: &str,
) -> Result<User, DomainError> {
    let dto = users_adapter::UserCreate::new(username, password_hash);
    let user = users_adapter::create_user(conn, dto).await?;
    Ok(User::from(user))
}

pub async fn set_current_game<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    game_id: i64,
) -> Result<(), DomainError> {
    users_adapter::set_current_game(conn, user_id, game_id).await?;
    Ok(())
}
