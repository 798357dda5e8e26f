// Error mapping: pure domain errors in, HTTP status and code out.
use actix_web::body::to_bytes;
use actix_web::ResponseError;

use crate::error::AppError;
use crate::errors::domain::{
    AuthKind, ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;
use crate::trace_ctx;

#[test]
fn maps_validation_to_400() {
    let app: AppError =
        DomainError::validation(ValidationKind::InvalidPassword, "too short").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);

    let app: AppError =
        DomainError::validation(ValidationKind::InvalidDuration, "bad since").into();
    assert_eq!(app.code(), ErrorCode::InvalidDuration);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_conflicts() {
    let app: AppError = DomainError::conflict(ConflictKind::UsernameTaken, "taken").into();
    assert_eq!(app.code().as_str(), "USERNAME_TAKEN");
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError = DomainError::conflict(ConflictKind::OptimisticLock, "stale").into();
    assert_eq!(app.code().as_str(), "OPTIMISTIC_LOCK");

    let app: AppError =
        DomainError::conflict(ConflictKind::Other("x".into()), "generic conflict").into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::no_active_game().into();
    assert_eq!(app.code(), ErrorCode::NoActiveGame);
    assert_eq!(app.status().as_u16(), 404);
    assert_eq!(
        app.detail(),
        "You dont have any active game! Why dont you start one?"
    );

    let app: AppError = DomainError::not_found(NotFoundKind::User, "no user").into();
    assert_eq!(app.code().as_str(), "USER_NOT_FOUND");
}

#[test]
fn maps_auth_to_401() {
    let app: AppError = DomainError::invalid_session().into();
    assert_eq!(app.code(), ErrorCode::InvalidSession);
    assert_eq!(app.status().as_u16(), 401);

    let app: AppError = DomainError::auth(AuthKind::IncorrectPassword, "nope").into();
    assert_eq!(app.code(), ErrorCode::IncorrectPassword);
    assert_eq!(app.status().as_u16(), 401);
}

#[test]
fn maps_infra() {
    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "timeout").into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let app: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(app.status().as_u16(), 503);

    let app: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad").into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn constraint_failures_use_general_codes() {
    use sea_orm::{DbErr, RuntimeErr};

    let app: AppError = DomainError::from(DbErr::RecordNotFound("games".into())).into();
    assert_eq!(app.code(), ErrorCode::NotFound);
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::from(DbErr::Exec(RuntimeErr::Internal(
        "UNIQUE constraint failed: games.id".into(),
    )))
    .into();
    assert_eq!(app.code(), ErrorCode::Conflict);
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError = DomainError::from(DbErr::Exec(RuntimeErr::Internal(
        "FOREIGN KEY constraint failed".into(),
    )))
    .into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
}

#[tokio::test]
async fn problem_body_carries_trace_id() {
    let resp = trace_ctx::with_trace_id("trace-abc".to_string(), async {
        AppError::from(DomainError::no_active_game()).error_response()
    })
    .await;

    assert_eq!(resp.status().as_u16(), 404);
    assert_eq!(
        resp.headers().get("x-trace-id").unwrap().to_str().unwrap(),
        "trace-abc"
    );
    let body = to_bytes(resp.into_body()).await.unwrap();
    let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["code"], "NO_ACTIVE_GAME");
    assert_eq!(v["title"], "No Active Game");
    assert_eq!(v["trace_id"], "trace-abc");
    assert_eq!(v["status"], 404);
}

#[tokio::test]
async fn server_errors_hide_detail() {
    let resp = AppError::internal("secret connection string").error_response();
    let body = to_bytes(resp.into_body()).await.unwrap();
    let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["detail"], "An internal error occurred");
    assert_eq!(v["trace_id"], "unknown");
}
