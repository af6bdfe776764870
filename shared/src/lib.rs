pub mod dto {
    pub mod common;
    pub mod contest;
    pub mod taxonomy;
    pub mod user;
}

pub mod error;
pub mod time;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export DTOs
pub use dto::{
    common::ErrorResponse,
    contest::{ContestDto, ContestIndexResponse, ContestPage, ParticipationDto},
    taxonomy::{ClassDto, OrganizationDto, TagDto},
    user::{SessionDto, UserDto},
};

pub use time::{format_countdown, format_start, format_window};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_index_response_round_trip() {
        let json = r#"{
            "active_participations": [],
            "current": [],
            "future": [],
            "past": { "items": [], "total": 0, "page": 1, "page_size": 20 }
        }"#;
        let index: ContestIndexResponse = serde_json::from_str(json).unwrap();
        assert!(index.active_participations.is_empty());
        assert_eq!(index.past.total, 0);

        let back = serde_json::to_string(&index).unwrap();
        let again: ContestIndexResponse = serde_json::from_str(&back).unwrap();
        assert_eq!(again.past.page_size, 20);
    }

    #[test]
    fn test_session_without_viewer() {
        let json = r#"{ "user": null, "csrf_token": "tok" }"#;
        let session: SessionDto = serde_json::from_str(json).unwrap();
        assert!(session.user.is_none());
        assert_eq!(session.csrf_token, "tok");
    }
}
