use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use backend::routes;
use backend::state::app_state::AppState;
use serde_json::{json, Value};

/// The production route table behind the production middleware stack.
pub async fn build_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}

/// The session cookie set by a response, if any.
pub fn session_cookie(resp: &ServiceResponse<BoxBody>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "aces_sid")
        .map(|c| c.into_owned())
}

/// Register through the API and return the session cookie.
pub async fn register<S>(app: &S, username: &str, password: &str) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "username": username, "password": password }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success(), "register failed: {}", resp.status());
    session_cookie(&resp).expect("register sets a session cookie")
}

/// Authenticated call with an optional JSON body; returns status and parsed body.
pub async fn call_json<S>(
    app: &S,
    req: test::TestRequest,
    cookie: &Cookie<'static>,
) -> (u16, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let resp = test::call_service(app, req.cookie(cookie.clone()).to_request()).await;
    let status = resp.status().as_u16();
    let body = test::read_body(resp).await;
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}
