use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::Card;
use crate::repos::games::Game;
use crate::repos::users::User;
use crate::services::{GameOutcome, Stats};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub deck: Vec<Card>,
    pub hand: Vec<Card>,
    pub finished: bool,
    pub user_won: bool,
    pub round: u8,
    pub aces_in_deck: Vec<Card>,
}

impl From<&Game> for GameView {
    fn from(g: &Game) -> Self {
        Self {
            id: g.id,
            created_at: g.created_at,
            updated_at: g.updated_at,
            deck: g.state.deck().to_vec(),
            hand: g.state.hand().to_vec(),
            finished: g.state.finished(),
            user_won: g.state.user_won(),
            round: g.state.round(),
            aces_in_deck: g.state.aces_in_deck(),
        }
    }
}

/// Body of deal and reset responses.
#[derive(Debug, Clone, Serialize)]
pub struct GameStatusResponse {
    pub message: String,
    pub details: GameView,
}

impl From<GameOutcome> for GameStatusResponse {
    fn from(o: GameOutcome) -> Self {
        Self {
            message: o.message.to_string(),
            details: GameView::from(&o.game),
        }
    }
}

/// Public view of a user. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: i64,
    pub username: String,
    pub current_game_id: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<&User> for UserView {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            username: u.username.clone(),
            current_game_id: u.current_game_id,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    pub games_played: u64,
    pub games_won: u64,
    pub games_lost: u64,
}

impl From<Stats> for StatsView {
    fn from(s: Stats) -> Self {
        Self {
            games_played: s.games_played,
            games_won: s.games_won,
            games_lost: s.games_lost,
        }
    }
}
