use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_]+$").unwrap();
}

/// The viewer as the contest hub sees them.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct UserDto {
    pub id: String,
    #[validate(length(min = 1, max = 30, message = "Username is required"))]
    #[validate(regex = "USERNAME_REGEX")]
    pub username: String,
    /// Whether the viewer has staff privileges
    #[serde(default)]
    pub is_staff: bool,
}

/// The viewer's session, as returned by `GET /api/auth/session`.
///
/// `user` is `None` for anonymous viewers; the CSRF token is always
/// present because the join form needs one even before sign-in redirects.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionDto {
    pub user: Option<UserDto>,
    pub csrf_token: String,
}

impl SessionDto {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
