use std::env;

use log::*;
use wss_common::parse_boolean_flag;

const DEFAULT_WSS_HOST: &str = "127.0.0.1";
const DEFAULT_WSS_PORT: u16 = 8240;
const DEFAULT_WSS_DATABASE_URL: &str = "sqlite://data/wine_shop.db";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// If true, the session cookie is marked `Secure` and will only be sent over TLS. Leave this
    /// off for local development over plain http.
    pub secure_cookies: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_WSS_HOST.to_string(),
            port: DEFAULT_WSS_PORT,
            database_url: DEFAULT_WSS_DATABASE_URL.to_string(),
            secure_cookies: false,
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("WSS_HOST").ok().unwrap_or_else(|| DEFAULT_WSS_HOST.into());
        let port = env::var("WSS_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for WSS_PORT. {e} Using the default, {DEFAULT_WSS_PORT}, instead."
                    );
                    DEFAULT_WSS_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_WSS_PORT);
        let database_url = env::var("WSS_DATABASE_URL").unwrap_or_else(|_| {
            info!("🪛️ WSS_DATABASE_URL is not set. Using the default, {DEFAULT_WSS_DATABASE_URL}.");
            DEFAULT_WSS_DATABASE_URL.to_string()
        });
        let secure_cookies = parse_boolean_flag(env::var("WSS_SECURE_COOKIES").ok(), false);
        if !secure_cookies {
            warn!("🪛️ Session cookies are not marked Secure. Set WSS_SECURE_COOKIES=1 when serving over TLS.");
        }
        Self { host, port, database_url, secure_cookies }
    }
}
