use actix_web::web;

pub mod auth;
pub mod games;
pub mod health;
pub mod users;

/// Register every route. `main.rs` and the test apps share this so both
/// serve the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::configure_routes));
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));
    cfg.service(web::scope("/api/user").configure(users::configure_routes));
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
