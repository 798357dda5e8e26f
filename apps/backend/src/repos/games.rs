//! Game repository functions for domain layer.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::games_sea as games_adapter;
use crate::domain::cards_parsing::{from_stored_format, to_stored_format};
use crate::domain::{AcesGame, PersistedGame};
use crate::entities::games;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// A stored game: row metadata around the engine state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    pub user_id: Option<i64>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub lock_version: i32,
    pub state: AcesGame,
}

impl TryFrom<games::Model> for Game {
    type Error = DomainError;

    fn try_from(m: games::Model) -> Result<Self, Self::Error> {
        let round = u8::try_from(m.round).map_err(|_| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Game {} has invalid round {}", m.id, m.round),
            )
        })?;
        let state = AcesGame::from_persisted(PersistedGame {
            deck: from_stored_format(&m.deck)?,
            hand: from_stored_format(&m.hand)?,
            finished: m.finished,
            user_won: m.user_won,
            round,
        })?;

        Ok(Self {
            id: m.id,
            user_id: m.user_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
            lock_version: m.lock_version,
            state,
        })
    }
}

/// Aggregate over a user's finished games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameCounts {
    pub played: u64,
    pub won: u64,
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    games_adapter::find_by_id(conn, game_id)
        .await?
        .map(Game::try_from)
        .transpose()
}

pub async fn require_game<C: ConnectionTrait>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    let game = games_adapter::require_game(conn, game_id).await?;
    Game::try_from(game)
}

pub async fn create_game<C: ConnectionTrait>(
    conn: &C,
    user_id: Option<i64>,
    state: &AcesGame,
) -> Result<Game, DomainError> {
    let dto = games_adapter::GameCreate {
        user_id,
        deck: to_stored_format(state.deck())?,
        hand: to_stored_format(state.hand())?,
        finished: state.finished(),
        user_won: state.user_won(),
        round: i16::from(state.round()),
    };
    let game = games_adapter::create_game(conn, dto).await?;
    Game::try_from(game)
}

/// Persist `game.state` if nobody saved since `game.lock_version` was read.
pub async fn save_game<C: ConnectionTrait>(conn: &C, game: &Game) -> Result<Game, DomainError> {
    let dto = games_adapter::GameUpdate {
        id: game.id,
        expected_version: game.lock_version,
        deck: to_stored_format(game.state.deck())?,
        hand: to_stored_format(game.state.hand())?,
        finished: game.state.finished(),
        user_won: game.state.user_won(),
        round: i16::from(game.state.round()),
    };
    let updated = games_adapter::update_game(conn, dto).await?;
    Game::try_from(updated)
}

pub async fn count_finished_since<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    since: OffsetDateTime,
) -> Result<GameCounts, DomainError> {
    let (played, won) = games_adapter::count_finished_since(conn, user_id, since).await?;
    Ok(GameCounts { played, won })
}
