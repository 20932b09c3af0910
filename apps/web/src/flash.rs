//! One-shot notice carrier for the POST-redirect-GET flow.
//!
//! Notices ride a signed cookie across exactly one redirect and are removed
//! when drained, so a page refresh never replays them. The jar is signed
//! with the key in `AppState`; a tampered or foreign cookie simply reads as
//! no notices.

use axum_extra::extract::cookie::{Cookie, SignedCookieJar};
use serde::{Deserialize, Serialize};

pub const NOTICE_COOKIE: &str = "portfolio_notices";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A one-time user-facing message attached to the next rendered response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Stores notices for the next response. Replaces any pending set; the
/// carrier never accumulates beyond one.
pub fn push_notices(jar: SignedCookieJar, notices: &[Notice]) -> SignedCookieJar {
    let payload = serde_json::to_string(notices).unwrap_or_default();
    let mut cookie = Cookie::new(NOTICE_COOKIE, payload);
    cookie.set_path("/");
    cookie.set_http_only(true);
    jar.add(cookie)
}

/// Drains pending notices and removes the cookie so they display once.
pub fn take_notices(jar: SignedCookieJar) -> (SignedCookieJar, Vec<Notice>) {
    match jar.get(NOTICE_COOKIE) {
        Some(cookie) => {
            let notices = serde_json::from_str(cookie.value()).unwrap_or_default();
            let mut removal = Cookie::new(NOTICE_COOKIE, "");
            removal.set_path("/");
            (jar.remove(removal), notices)
        }
        None => (jar, Vec::new()),
    }
}
