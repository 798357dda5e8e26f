#![allow(dead_code)]

pub mod app_builder;

use backend::config::db::DbKind;
use backend::infra::state::build_state;
use backend::state::app_state::AppState;
use backend_test_support::unique_helpers::unique_username;
use sea_orm::DatabaseConnection;

/// Satisfies every registration rule.
pub const GOOD_PASSWORD: &str = "Secret#123";

/// Fresh in-memory SQLite database with migrations applied.
pub async fn test_state() -> AppState {
    build_state()
        .with_db(DbKind::SqliteMemory)
        .build()
        .await
        .expect("build in-memory test state")
}

pub fn db(state: &AppState) -> &DatabaseConnection {
    state.db().expect("test state has a database")
}

pub fn fresh_username() -> String {
    unique_username("player")
}
