//! DTOs for games_sea adapter. Card columns arrive already encoded.

#[derive(Debug, Clone)]
pub struct GameCreate {
    pub user_id: Option<i64>,
    pub deck: String,
    pub hand: String,
    pub finished: bool,
    pub user_won: bool,
    pub round: i16,
}

/// Full-state update guarded by `expected_version`.
#[derive(Debug, Clone)]
pub struct GameUpdate {
    pub id: i64,
    pub expected_version: i32,
    pub deck: String,
    pub hand: String,
    pub finished: bool,
    pub user_won: bool,
    pub round: i16,
}
