// Re-export all API modules
pub mod auth;
pub mod cache;
pub mod contests;
pub mod utils;

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    let base_url = Config::api_base_url();
    if base_url.is_empty() {
        // Use relative URL
        path.to_string()
    } else {
        // Use absolute URL
        format!("{}{}", base_url, path)
    }
}

/// Contest detail page on the judge
pub fn contest_url(key: &str) -> String {
    format!("/contest/{}", key)
}

/// Contest scoreboard page on the judge
pub fn ranking_url(key: &str) -> String {
    format!("/contest/{}/ranking", key)
}

/// Join endpoint the join/spectate/virtual-join form posts to
pub fn join_url(key: &str) -> String {
    format!("/contest/{}/join", key)
}
