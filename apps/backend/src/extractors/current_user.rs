//! Session-cookie extractors.
//!
//! `CurrentUser` rejects the request unless a live session points at an
//! existing user. `MaybeSession` never rejects; it only reports whether a
//! live session cookie came along.

use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::auth::session::{Session, SessionId};
use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::UserService;
use crate::state::app_state::AppState;

/// The authenticated caller, loaded from the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub session_id: SessionId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaybeSession(pub Option<(SessionId, Session)>);

fn app_state(req: &HttpRequest) -> Result<web::Data<AppState>, AppError> {
    req.app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| AppError::internal("AppState not available"))
}

async fn resolve_session(req: &HttpRequest, state: &AppState) -> Option<(SessionId, Session)> {
    let cookie = req.cookie(state.session_config.cookie_name)?;
    let sid = SessionId::from(cookie.value().to_string());
    let session = state.sessions.get(&sid).await?;
    Some((sid, session))
}

impl FromRequest for MaybeSession {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let state = app_state(&req)?;
            Ok(MaybeSession(resolve_session(&req, &state).await))
        })
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let state = app_state(&req)?;
            let (session_id, session) = resolve_session(&req, &state)
                .await
                .ok_or_else(AppError::unauthorized)?;

            let db = require_db(&state)?;
            match UserService::new().require_user(db, session.user_id).await {
                Ok(user) => Ok(CurrentUser {
                    id: user.id,
                    username: user.username,
                    session_id,
                }),
                Err(e) if e.code() == ErrorCode::InvalidSession => {
                    tracing::warn!(user_id = session.user_id, "session refers to a missing user");
                    state.sessions.destroy(&session_id).await;
                    Err(e)
                }
                // a failed lookup says nothing about the session; keep it
                Err(e) => Err(e),
            }
        })
    }
}
