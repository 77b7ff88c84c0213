//! Server settings read from env vars.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `CRYPTOGRAM_ADDR` | unset | full bind address, e.g. `127.0.0.1:3000` |
//! | `PORT` | `8080` | port on 0.0.0.0 when `CRYPTOGRAM_ADDR` is unset |
//! | `CORS_ALLOW_ORIGIN` | `*` | single allowed origin |

use std::net::{Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use tower_http::cors::AllowOrigin;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub addr: SocketAddr,
    /// `None` allows any origin.
    pub cors_origin: Option<HeaderValue>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from any variable source. Malformed values are logged
    /// and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            addr: bind_addr(lookup("CRYPTOGRAM_ADDR").as_deref(), lookup("PORT").as_deref()),
            cors_origin: parse_origin(lookup("CORS_ALLOW_ORIGIN").as_deref()),
        }
    }

    pub fn allow_origin(&self) -> AllowOrigin {
        match &self.cors_origin {
            Some(origin) => AllowOrigin::exact(origin.clone()),
            None => AllowOrigin::any(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn bind_addr(addr: Option<&str>, port: Option<&str>) -> SocketAddr {
    if let Some(addr) = addr.map(str::trim).filter(|a| !a.is_empty()) {
        match addr.parse() {
            Ok(a) => return a,
            Err(err) => tracing::warn!(%addr, %err, "ignoring invalid CRYPTOGRAM_ADDR"),
        }
    }
    let port = match port.map(str::trim) {
        None | Some("") => DEFAULT_PORT,
        Some(p) => p.parse().unwrap_or_else(|err| {
            tracing::warn!(port = %p, %err, "ignoring invalid PORT");
            DEFAULT_PORT
        }),
    };
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))
}

fn parse_origin(value: Option<&str>) -> Option<HeaderValue> {
    match value.map(str::trim) {
        None | Some("") | Some("*") => None,
        Some(origin) => match HeaderValue::from_str(origin) {
            Ok(v) => Some(v),
            Err(err) => {
                tracing::warn!(%origin, %err, "ignoring invalid CORS_ALLOW_ORIGIN");
                None
            }
        },
    }
}
