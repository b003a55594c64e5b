use std::future::{ready, Ready};

use actix_web::{cookie::Cookie, dev::Payload, FromRequest, HttpRequest};
use log::trace;
use rand::{distributions::Alphanumeric, Rng};

use crate::{config::ServerConfig, errors::ServerError};

pub const SESSION_COOKIE: &str = "wss_session";

/// The opaque per-client token identifying a shopper's basket.
///
/// The token lives in the `wss_session` cookie. When a request arrives without one, a fresh token
/// is minted and `is_new` is set; the handler is then responsible for creating the basket lazily
/// and attaching the cookie to its response. The engine only ever sees the token as a basket
/// lookup key.
#[derive(Debug, Clone)]
pub struct ShopperSession {
    pub id: String,
    pub is_new: bool,
}

impl ShopperSession {
    /// The Set-Cookie value that pins this session to the client.
    pub fn cookie(&self, config: &ServerConfig) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, self.id.clone())
            .path("/")
            .http_only(true)
            .secure(config.secure_cookies)
            .finish()
    }
}

impl FromRequest for ShopperSession {
    type Error = ServerError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let session = match req.cookie(SESSION_COOKIE) {
            Some(cookie) => Self { id: cookie.value().to_string(), is_new: false },
            None => {
                let session = Self { id: new_session_token(), is_new: true };
                trace!("💻️ No session cookie on the request. Minted session token {}", session.id);
                session
            },
        };
        ready(Ok(session))
    }
}

pub fn new_session_token() -> String {
    rand::thread_rng().sample_iter(&Alphanumeric).take(32).map(char::from).collect()
}
