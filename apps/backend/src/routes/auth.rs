use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{web, HttpResponse};
use tracing::info;

use crate::auth::session::SessionId;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::extractors::{CurrentUser, MaybeSession};
use crate::protocol::UserView;
use crate::services::{LoginInput, RegisterInput, UserService};
use crate::state::app_state::AppState;
use crate::state::session_config::SessionConfig;

const ALREADY_SIGNED_IN: &str = "You are already signed in";

fn session_cookie(cfg: &SessionConfig, sid: &SessionId) -> Cookie<'static> {
    let max_age = i64::try_from(cfg.max_age.as_secs()).unwrap_or(i64::MAX);
    Cookie::build(cfg.cookie_name, sid.as_str().to_owned())
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(CookieDuration::seconds(max_age))
        .secure(cfg.cookie_secure)
        .finish()
}

fn removal_cookie(cfg: &SessionConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build(cfg.cookie_name, "").path("/").finish();
    cookie.make_removal();
    cookie
}

/// Create an account and sign it in.
async fn register(
    app_state: web::Data<AppState>,
    body: web::Json<RegisterInput>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let input = body.into_inner();
    let user = with_txn(db, move |txn| {
        Box::pin(async move { UserService::new().register(txn, input).await })
    })
    .await?;

    let sid = app_state.sessions.create(user.id).await;
    Ok(HttpResponse::Ok()
        .cookie(session_cookie(&app_state.session_config, &sid))
        .json(UserView::from(&user)))
}

async fn login(
    app_state: web::Data<AppState>,
    session: MaybeSession,
    body: web::Json<LoginInput>,
) -> Result<HttpResponse, AppError> {
    if session.0.is_some() {
        return Err(DomainError::conflict(ConflictKind::AlreadySignedIn, ALREADY_SIGNED_IN).into());
    }

    let db = require_db(&app_state)?;
    let user = UserService::new().login(db, body.into_inner()).await?;

    let sid = app_state.sessions.create(user.id).await;
    Ok(HttpResponse::Ok()
        .cookie(session_cookie(&app_state.session_config, &sid))
        .json(UserView::from(&user)))
}

async fn logout(
    app_state: web::Data<AppState>,
    current_user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    app_state.sessions.destroy(&current_user.session_id).await;
    info!(user_id = current_user.id, "user logged out");
    Ok(HttpResponse::Ok()
        .cookie(removal_cookie(&app_state.session_config))
        .json(true))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register))
        .route("/login", web::post().to(login))
        .route("/logout", web::post().to(logout));
}
