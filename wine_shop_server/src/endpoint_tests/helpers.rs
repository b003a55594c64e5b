use actix_web::{
    body::MessageBody,
    cookie::Cookie,
    http::StatusCode,
    test,
    test::TestRequest,
    web,
    web::ServiceConfig,
    App,
};
use serde_json::Value;

use crate::{config::ServerConfig, session::SESSION_COOKIE};

pub const TEST_SESSION: &str = "endpoint-test-session";

/// Fires a GET request at an app built from `configure`. `Ok` carries a successful response,
/// `Err` the status and message of a handler error.
pub async fn get_request(
    session: Option<&str>,
    path: &str,
    configure: fn(&mut ServiceConfig),
) -> Result<(StatusCode, String), (StatusCode, String)> {
    send(with_session(TestRequest::get().uri(path), session), configure).await
}

pub async fn post_request(
    session: Option<&str>,
    path: &str,
    configure: fn(&mut ServiceConfig),
) -> Result<(StatusCode, String), (StatusCode, String)> {
    send(with_session(TestRequest::post().uri(path), session), configure).await
}

pub async fn post_json(
    session: Option<&str>,
    path: &str,
    body: Value,
    configure: fn(&mut ServiceConfig),
) -> Result<(StatusCode, String), (StatusCode, String)> {
    send(with_session(TestRequest::post().uri(path).set_json(body), session), configure).await
}

pub async fn delete_request(
    session: Option<&str>,
    path: &str,
    configure: fn(&mut ServiceConfig),
) -> Result<(StatusCode, String), (StatusCode, String)> {
    send(with_session(TestRequest::delete().uri(path), session), configure).await
}

fn with_session(req: TestRequest, session: Option<&str>) -> TestRequest {
    match session {
        Some(sid) => req.cookie(Cookie::new(SESSION_COOKIE, sid.to_string())),
        None => req,
    }
}

async fn send(
    req: TestRequest,
    configure: fn(&mut ServiceConfig),
) -> Result<(StatusCode, String), (StatusCode, String)> {
    let app = App::new().app_data(web::Data::new(ServerConfig::default())).configure(configure);
    let service = test::init_service(app).await;
    match test::try_call_service(&service, req.to_request()).await {
        Ok(res) => {
            let (_, res) = res.into_parts();
            let status = res.status();
            let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
            Ok((status, body))
        },
        Err(e) => Err((e.as_response_error().status_code(), e.to_string())),
    }
}
