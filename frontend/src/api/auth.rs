use crate::api::api_url;
use crate::api::utils::authenticated_get;
use log::debug;
use shared::{ErrorResponse, SessionDto};

/// Fetches the viewer's session: who is looking at the page, and the
/// anti-forgery token the join form must carry.
pub async fn get_session() -> Result<SessionDto, String> {
    debug!("Fetching viewer session");

    let response = authenticated_get(&api_url("/api/auth/session"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch session: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let session = response
        .json::<SessionDto>()
        .await
        .map_err(|e| format!("Failed to parse session response: {}", e))?;

    debug!(
        "Session loaded, authenticated: {}",
        session.is_authenticated()
    );
    Ok(session)
}
