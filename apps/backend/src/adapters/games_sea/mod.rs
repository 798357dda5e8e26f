//! SeaORM adapter for the games table - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};
use time::OffsetDateTime;

use crate::entities::games;
use crate::infra::db_errors::OPTIMISTIC_LOCK_PREFIX;

pub mod dto;

pub use dto::{GameCreate, GameUpdate};

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Like [`find_by_id`] but a missing row is `RecordNotFound`.
pub async fn require_game<C: ConnectionTrait>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("Game {game_id} not found")))
}

pub async fn create_game<C: ConnectionTrait>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        deck: Set(dto.deck),
        hand: Set(dto.hand),
        finished: Set(dto.finished),
        user_won: Set(dto.user_won),
        round: Set(dto.round),
        lock_version: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
    };

    game_active.insert(conn).await
}

/// Write the full game state if `lock_version` still matches, bumping it.
///
/// Zero affected rows means either the game is gone (`RecordNotFound`) or
/// someone else saved first (`Custom("OPTIMISTIC_LOCK:{...}")`).
pub async fn update_game<C: ConnectionTrait>(
    conn: &C,
    dto: GameUpdate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();

    let result = games::Entity::update_many()
        .col_expr(games::Column::Deck, Expr::value(dto.deck))
        .col_expr(games::Column::Hand, Expr::value(dto.hand))
        .col_expr(games::Column::Finished, Expr::value(dto.finished))
        .col_expr(games::Column::UserWon, Expr::value(dto.user_won))
        .col_expr(games::Column::Round, Expr::value(dto.round))
        .col_expr(games::Column::UpdatedAt, Expr::value(now))
        .col_expr(
            games::Column::LockVersion,
            Expr::col(games::Column::LockVersion).add(1),
        )
        .filter(games::Column::Id.eq(dto.id))
        .filter(games::Column::LockVersion.eq(dto.expected_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return match find_by_id(conn, dto.id).await? {
            Some(current) => Err(sea_orm::DbErr::Custom(format!(
                "{OPTIMISTIC_LOCK_PREFIX}{{\"expected\":{},\"actual\":{}}}",
                dto.expected_version, current.lock_version
            ))),
            None => Err(sea_orm::DbErr::RecordNotFound(format!(
                "Game {} not found",
                dto.id
            ))),
        };
    }

    require_game(conn, dto.id).await
}

/// Finished games of `user_id` created at or after `since`: (played, won).
pub async fn count_finished_since<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    since: OffsetDateTime,
) -> Result<(u64, u64), sea_orm::DbErr> {
    let finished = games::Entity::find()
        .filter(games::Column::UserId.eq(user_id))
        .filter(games::Column::Finished.eq(true))
        .filter(games::Column::CreatedAt.gte(since));

    let played = finished.clone().count(conn).await?;
    let won = finished
        .filter(games::Column::UserWon.eq(true))
        .count(conn)
        .await?;
    Ok((played, won))
}
