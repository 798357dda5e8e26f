mod common;
mod support;

use backend::domain::{AcesGame, PersistedGame};
use backend::entities::games;
use backend::errors::ErrorCode;
use backend::repos::{games as games_repo, users as users_repo};
use backend::services::{LoginInput, RegisterInput, UserService};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use support::{db, fresh_username, test_state, GOOD_PASSWORD};
use time::{Duration, OffsetDateTime};

fn register_input(username: &str, password: &str) -> RegisterInput {
    RegisterInput {
        username: username.to_string(),
        password: password.to_string(),
    }
}

fn finished_game(won: bool) -> AcesGame {
    AcesGame::from_persisted(PersistedGame {
        deck: vec![],
        hand: vec![],
        finished: true,
        user_won: won,
        round: 11,
    })
    .expect("valid finished game")
}

#[tokio::test]
async fn register_hashes_and_login_verifies() {
    let state = test_state().await;
    let conn = db(&state);
    let svc = UserService::new();
    let name = fresh_username();

    let user = svc
        .register(conn, register_input(&name, GOOD_PASSWORD))
        .await
        .expect("register");
    assert_eq!(user.username, name);
    assert_ne!(user.password_hash, GOOD_PASSWORD);
    assert!(user.password_hash.starts_with("$argon2"));
    assert_eq!(user.current_game_id, None);

    let logged_in = svc
        .login(
            conn,
            LoginInput {
                username: name.clone(),
                password: GOOD_PASSWORD.to_string(),
            },
        )
        .await
        .expect("login");
    assert_eq!(logged_in.id, user.id);
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let state = test_state().await;
    let conn = db(&state);
    let svc = UserService::new();
    let name = fresh_username();

    svc.register(conn, register_input(&name, GOOD_PASSWORD))
        .await
        .expect("first register");
    let err = svc
        .register(conn, register_input(&name, GOOD_PASSWORD))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::UsernameTaken);
    assert_eq!(err.status().as_u16(), 409);
}

#[tokio::test]
async fn registration_rules_are_enforced() {
    let state = test_state().await;
    let conn = db(&state);
    let svc = UserService::new();

    for (username, password) in [
        ("abc", GOOD_PASSWORD),
        ("UpperCase", GOOD_PASSWORD),
        ("with space", GOOD_PASSWORD),
        ("validname", "Sh#1a"),
        ("validname", "nouppercase#1"),
        ("validname", "NOLOWERCASE#1"),
        ("validname", "NoDigits#here"),
        ("validname", "NoSpecial123"),
    ] {
        let err = svc
            .register(conn, register_input(username, password))
            .await
            .expect_err(username);
        assert_eq!(err.code(), ErrorCode::ValidationError, "{username}/{password}");
    }

    assert!(users_repo::find_by_username(conn, "validname")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn login_failures_are_distinguished() {
    let state = test_state().await;
    let conn = db(&state);
    let svc = UserService::new();
    let name = fresh_username();
    svc.register(conn, register_input(&name, GOOD_PASSWORD))
        .await
        .unwrap();

    let err = svc
        .login(
            conn,
            LoginInput {
                username: fresh_username(),
                password: GOOD_PASSWORD.to_string(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::UserNotFound);
    assert_eq!(err.detail(), "No user found with the specified username");

    let err = svc
        .login(
            conn,
            LoginInput {
                username: name,
                password: "Wrong#pass1".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::IncorrectPassword);
    assert_eq!(err.status().as_u16(), 401);
}

#[tokio::test]
async fn stats_count_recent_finished_games() {
    let state = test_state().await;
    let conn = db(&state);
    let svc = UserService::new();
    let user = svc
        .register(conn, register_input(&fresh_username(), GOOD_PASSWORD))
        .await
        .unwrap();
    let other = svc
        .register(conn, register_input(&fresh_username(), GOOD_PASSWORD))
        .await
        .unwrap();

    games_repo::create_game(conn, Some(user.id), &finished_game(true))
        .await
        .unwrap();
    games_repo::create_game(conn, Some(user.id), &finished_game(false))
        .await
        .unwrap();
    games_repo::create_game(conn, Some(user.id), &finished_game(false))
        .await
        .unwrap();
    // active games and other players' games don't count
    let mut rng = rand::rng();
    games_repo::create_game(conn, Some(user.id), &AcesGame::new_game(&mut rng))
        .await
        .unwrap();
    games_repo::create_game(conn, Some(other.id), &finished_game(true))
        .await
        .unwrap();

    // one old win, outside a week but inside a year
    let old = games_repo::create_game(conn, Some(user.id), &finished_game(true))
        .await
        .unwrap();
    let row = games::Entity::find_by_id(old.id)
        .one(conn)
        .await
        .unwrap()
        .unwrap();
    let mut am: games::ActiveModel = row.into();
    am.created_at = Set(OffsetDateTime::now_utc() - Duration::days(30));
    am.update(conn).await.unwrap();

    let week = svc.stats(conn, user.id, Duration::weeks(1)).await.unwrap();
    assert_eq!(week.games_played, 3);
    assert_eq!(week.games_won, 1);
    assert_eq!(week.games_lost, 2);

    let year = svc.stats(conn, user.id, Duration::days(365)).await.unwrap();
    assert_eq!(year.games_played, 4);
    assert_eq!(year.games_won, 2);
    assert_eq!(year.games_lost, 2);
}

#[tokio::test]
async fn require_user_reports_invalid_session() {
    let state = test_state().await;
    let err = UserService::new()
        .require_user(db(&state), 424_242)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidSession);
    assert_eq!(err.status().as_u16(), 401);
}
