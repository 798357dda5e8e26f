use actix_web::{web, HttpResponse};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::protocol::{GameStatusResponse, GameView};
use crate::services::GameService;
use crate::state::app_state::AppState;

async fn current_game(
    app_state: web::Data<AppState>,
    current_user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let game = GameService::new().current_game(db, current_user.id).await?;
    Ok(HttpResponse::Ok().json(GameView::from(&game)))
}

async fn start_game(
    app_state: web::Data<AppState>,
    current_user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let user_id = current_user.id;
    let game = with_txn(db, move |txn| {
        Box::pin(async move {
            let mut rng = StdRng::from_os_rng();
            GameService::new().start_game(txn, user_id, &mut rng).await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(GameView::from(&game)))
}

async fn deal(
    app_state: web::Data<AppState>,
    current_user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let user_id = current_user.id;
    let outcome = with_txn(db, move |txn| {
        Box::pin(async move {
            let mut rng = StdRng::from_os_rng();
            GameService::new().deal(txn, user_id, &mut rng).await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(GameStatusResponse::from(outcome)))
}

async fn reset(
    app_state: web::Data<AppState>,
    current_user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let user_id = current_user.id;
    let outcome = with_txn(db, move |txn| {
        Box::pin(async move {
            let mut rng = StdRng::from_os_rng();
            GameService::new().reset(txn, user_id, &mut rng).await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(GameStatusResponse::from(outcome)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(start_game))
        .route("/current", web::get().to(current_game))
        .route("/current/deal", web::post().to(deal))
        .route("/current/reset", web::post().to(reset));
}
