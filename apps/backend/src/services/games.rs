use rand::Rng;
use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::domain::AcesGame;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::games::{self as games_repo, Game};
use crate::repos::users::{self as users_repo, User};

pub const RESET_MESSAGE: &str = "Your latest game has been reset successfully!";

/// A saved game plus the message to show the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub message: &'static str,
    pub game: Game,
}

pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    async fn load_user<C: ConnectionTrait>(&self, conn: &C, user_id: i64) -> Result<User, AppError> {
        users_repo::find_by_id(conn, user_id)
            .await?
            .ok_or_else(|| DomainError::invalid_session().into())
    }

    async fn load_current<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: i64,
    ) -> Result<Game, AppError> {
        let user = self.load_user(conn, user_id).await?;
        let game_id = user.current_game_id.ok_or_else(DomainError::no_active_game)?;
        let game = games_repo::find_by_id(conn, game_id)
            .await?
            .ok_or_else(DomainError::no_active_game)?;
        Ok(game)
    }

    /// Create a game for the user and make it their current one.
    pub async fn start_game<C, R>(&self, conn: &C, user_id: i64, rng: &mut R) -> Result<Game, AppError>
    where
        C: ConnectionTrait,
        R: Rng + ?Sized,
    {
        self.load_user(conn, user_id).await?;
        let state = AcesGame::new_game(rng);
        let game = games_repo::create_game(conn, Some(user_id), &state).await?;
        users_repo::set_current_game(conn, user_id, game.id).await?;
        info!(user_id, game_id = game.id, "game started");
        Ok(game)
    }

    pub async fn current_game<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: i64,
    ) -> Result<Game, AppError> {
        self.load_current(conn, user_id).await
    }

    /// Deal the next hand of the current game and save it.
    pub async fn deal<C, R>(&self, conn: &C, user_id: i64, rng: &mut R) -> Result<GameOutcome, AppError>
    where
        C: ConnectionTrait,
        R: Rng + ?Sized,
    {
        let mut game = self.load_current(conn, user_id).await?;
        let hand = game.state.deal(rng);
        debug!(game_id = game.id, drawn = hand.len(), round = game.state.round(), "dealt");

        let saved = games_repo::save_game(conn, &game).await?;
        let status = saved.state.status();
        info!(game_id = saved.id, ?status, "deal saved");
        Ok(GameOutcome {
            message: status.message(),
            game: saved,
        })
    }

    /// Reshuffle the current game in place.
    pub async fn reset<C, R>(&self, conn: &C, user_id: i64, rng: &mut R) -> Result<GameOutcome, AppError>
    where
        C: ConnectionTrait,
        R: Rng + ?Sized,
    {
        let mut game = self.load_current(conn, user_id).await?;
        game.state.reset(rng);
        let saved = games_repo::save_game(conn, &game).await?;
        info!(game_id = saved.id, "game reset");
        Ok(GameOutcome {
            message: RESET_MESSAGE,
            game: saved,
        })
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
