use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::require_db;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::extractors::CurrentUser;
use crate::protocol::StatsView;
use crate::services::UserService;
use crate::state::app_state::AppState;
use crate::utils::duration::parse_duration;

#[derive(Debug, Deserialize)]
struct StatsQuery {
    since: Option<String>,
}

async fn stats(
    app_state: web::Data<AppState>,
    current_user: CurrentUser,
    query: web::Query<StatsQuery>,
) -> Result<HttpResponse, AppError> {
    let raw = query.since.as_deref().ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidDuration,
            "Query parameter `since` is required, e.g. since=7d",
        )
    })?;
    let since = parse_duration(raw)?;

    let db = require_db(&app_state)?;
    let stats = UserService::new().stats(db, current_user.id, since).await?;
    Ok(HttpResponse::Ok().json(StatsView::from(stats)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/stats", web::get().to(stats));
}
