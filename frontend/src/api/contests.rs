use crate::api::api_url;
use crate::api::cache::cached_request;
use crate::api::utils::authenticated_get;
use log::debug;
use shared::ContestIndexResponse;

/// Builds a URL-encoded query string, safely handling spaces and special
/// characters in search terms.
pub fn build_query(params: &[(&str, String)]) -> String {
    let mut qs = String::new();
    if !params.is_empty() {
        qs.push('?');
        for (i, (k, v)) in params.iter().enumerate() {
            if i > 0 {
                qs.push('&');
            }
            qs.push_str(&urlencoding::encode(k));
            qs.push('=');
            qs.push_str(&urlencoding::encode(v));
        }
    }
    qs
}

/// Fetches the pre-computed contest index: active participations, ongoing
/// and upcoming contests, and the requested page of past contests. The
/// `q`/`page`/`sort_by`/`sort_dir` parameters apply to the past segment
/// only; everything else is fixed by the backend for this viewer.
pub async fn get_contest_index(
    params: &[(&str, String)],
) -> Result<ContestIndexResponse, String> {
    let url = format!("{}{}", api_url("/api/contests/index"), build_query(params));
    debug!("Fetching contest index: {}", url);

    let body = {
        let fetch_url = url.clone();
        cached_request(&url, move || async move {
            let resp = authenticated_get(&fetch_url)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(format!("HTTP {}", resp.status()));
            }
            resp.text().await.map_err(|e| e.to_string())
        })
        .await?
    };

    let index: ContestIndexResponse =
        serde_json::from_str(&body).map_err(|e| format!("Failed to parse contest index: {}", e))?;

    gloo::console::log!(
        "Contest index loaded:",
        index.current.len(),
        "ongoing,",
        index.future.len(),
        "upcoming,",
        index.past.items.len(),
        "past on this page"
    );
    Ok(index)
}
