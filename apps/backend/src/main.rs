use actix_web::{web, App, HttpServer};
use backend::config::db::DbKind;
use backend::config::server::ServerConfig;
use backend::infra::state::build_state;
use backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use backend::routes;
use backend::state::session_config::SessionConfig;
use tracing::{error, info};

mod telemetry;

fn exit_with(what: &str, err: impl std::fmt::Display) -> ! {
    error!(error = %err, "{what}");
    eprintln!("{what}: {err}");
    std::process::exit(1);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment comes from the runtime (docker env_file, or a sourced .env locally).
    let server = ServerConfig::from_env().unwrap_or_else(|e| exit_with("invalid server config", e));
    let db_kind = DbKind::from_env().unwrap_or_else(|e| exit_with("invalid DATABASE_KIND", e));
    let session_config =
        SessionConfig::from_env().unwrap_or_else(|e| exit_with("invalid session config", e));

    let app_state = build_state()
        .with_db(db_kind)
        .with_session_config(session_config)
        .build()
        .await
        .unwrap_or_else(|e| exit_with("failed to build application state", e));

    info!(host = %server.host, port = server.port, ?db_kind, "starting aces backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
