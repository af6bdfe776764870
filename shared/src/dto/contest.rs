use crate::dto::taxonomy::{ClassDto, OrganizationDto, TagDto};
use crate::{Result, SharedError};
use chrono::{DateTime, FixedOffset};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref KEY_REGEX: Regex = Regex::new(r"^[a-z0-9][a-z0-9_-]*$").unwrap();
}

/// One contest as the list page sees it.
///
/// Everything here is pre-computed by the judge for the requesting
/// viewer: the capability booleans are answers to its access rules and
/// the `time_until_*` fields are countdown seeds derived from its clock.
/// The rendering layer never re-derives any of them.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct ContestDto {
    /// URL slug identifying the contest (contest, ranking, and join URLs
    /// are built from it)
    #[validate(regex(path = "KEY_REGEX", message = "Key must be a slug"))]
    pub key: String,

    #[validate(length(
        min = 1,
        max = 128,
        message = "Name must be between 1 and 128 characters"
    ))]
    pub name: String,

    /// Contest start time, in the viewer's offset
    pub start_time: DateTime<FixedOffset>,

    /// Contest end time, in the viewer's offset
    pub end_time: DateTime<FixedOffset>,

    /// Per-participant window length for flexible-window contests.
    /// `None` means the contest runs wall-clock start to end.
    #[serde(default)]
    pub time_limit_secs: Option<u64>,

    #[serde(default)]
    pub is_rated: bool,

    /// Restricted to members of `organizations` when set
    #[serde(default)]
    pub is_organization_private: bool,

    #[serde(default)]
    pub organizations: Vec<OrganizationDto>,

    /// Restricted to members of `classes` when set
    #[serde(default)]
    pub is_private: bool,

    #[serde(default)]
    pub classes: Vec<ClassDto>,

    #[serde(default)]
    pub tags: Vec<TagDto>,

    /// Live participant count
    #[serde(default)]
    pub user_count: u64,

    /// Whether this viewer may join the live contest
    #[serde(default)]
    pub can_join: bool,

    /// Whether this viewer may spectate
    #[serde(default)]
    pub can_spectate: bool,

    /// Whether this viewer may see the contest scoreboard
    #[serde(default)]
    pub can_see_own_scoreboard: bool,

    /// Seconds until the contest starts; set for upcoming contests
    #[serde(default)]
    pub time_until_start_secs: Option<u64>,

    /// Seconds until the contest ends; set for ongoing contests
    #[serde(default)]
    pub time_until_end_secs: Option<u64>,
}

impl ContestDto {
    /// Validates the contest data
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))
    }

    /// True for flexible-window contests
    pub fn has_window(&self) -> bool {
        self.time_limit_secs.is_some()
    }

    /// Seconds shown in the Length column: the participant window when
    /// one is set, otherwise the wall-clock span.
    pub fn length_secs(&self) -> u64 {
        match self.time_limit_secs {
            Some(window) => window,
            None => (self.end_time - self.start_time).num_seconds().max(0) as u64,
        }
    }
}

/// A viewer's active enrollment in a contest.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ParticipationDto {
    pub contest: ContestDto,
    /// Seconds left in this viewer's contest window
    pub time_remaining_secs: u64,
}

/// One page of the past-contest table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContestPage {
    pub items: Vec<ContestDto>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl ContestPage {
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size as u64) as u32
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

/// The whole view model for the contest hub page, segments in the order
/// the judge computed them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContestIndexResponse {
    pub active_participations: Vec<ParticipationDto>,
    pub current: Vec<ContestDto>,
    pub future: Vec<ContestDto>,
    pub past: ContestPage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;
    use validator::Validate;

    fn create_test_contest() -> ContestDto {
        ContestDto {
            key: "winter-open-2024".to_string(),
            name: "Winter Open 2024".to_string(),
            start_time: DateTime::parse_from_rfc3339("2024-01-20T17:00:00Z").unwrap(),
            end_time: DateTime::parse_from_rfc3339("2024-01-20T20:00:00Z").unwrap(),
            time_limit_secs: None,
            is_rated: true,
            is_organization_private: false,
            organizations: Vec::new(),
            is_private: false,
            classes: Vec::new(),
            tags: Vec::new(),
            user_count: 412,
            can_join: false,
            can_spectate: false,
            can_see_own_scoreboard: true,
            time_until_start_secs: None,
            time_until_end_secs: None,
        }
    }

    #[test]
    fn test_contest_validation_success() {
        assert!(create_test_contest().validate().is_ok());
    }

    #[test]
    fn test_contest_validation_empty_name() {
        let mut contest = create_test_contest();
        contest.name = String::new();
        let result = contest.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().field_errors().contains_key("name"));
    }

    #[test]
    fn test_contest_validation_very_long_name() {
        let mut contest = create_test_contest();
        contest.name = "A".repeat(129);
        assert!(contest.validate().is_err());
    }

    #[test]
    fn test_contest_validation_key_is_slug() {
        let mut contest = create_test_contest();
        contest.key = "Winter Open".to_string();
        let result = contest.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().field_errors().contains_key("key"));
    }

    #[test]
    fn test_validate_fields_maps_to_shared_error() {
        let mut contest = create_test_contest();
        contest.name = String::new();
        match contest.validate_fields() {
            Err(SharedError::Validation(_)) => {}
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_length_secs_wall_clock() {
        let contest = create_test_contest();
        assert!(!contest.has_window());
        assert_eq!(contest.length_secs(), 3 * 3_600);
    }

    #[test]
    fn test_length_secs_prefers_window() {
        let mut contest = create_test_contest();
        contest.time_limit_secs = Some(7_200);
        assert!(contest.has_window());
        assert_eq!(contest.length_secs(), 7_200);
    }

    #[test]
    fn test_length_secs_clamps_inverted_range() {
        let mut contest = create_test_contest();
        contest.end_time = contest.start_time - chrono::Duration::hours(1);
        assert_eq!(contest.length_secs(), 0);
    }

    #[test]
    fn test_contest_serialization_round_trip() {
        let contest = create_test_contest();
        let json = serde_json::to_string(&contest).unwrap();
        let deserialized: ContestDto = serde_json::from_str(&json).unwrap();
        assert_eq!(contest, deserialized);
    }

    #[test]
    fn test_contest_deserializes_sparse_payload() {
        // The judge omits capability fields for anonymous viewers.
        let json = r#"{
            "key": "old-contest",
            "name": "Old Contest",
            "start_time": "2020-05-01T10:00:00Z",
            "end_time": "2020-05-01T13:00:00Z"
        }"#;
        let contest: ContestDto = serde_json::from_str(json).unwrap();
        assert!(!contest.can_join);
        assert!(!contest.is_rated);
        assert!(contest.organizations.is_empty());
        assert_eq!(contest.user_count, 0);
    }

    #[test]
    fn test_page_total_pages_ceiling() {
        let page = ContestPage {
            items: Vec::new(),
            total: 41,
            page: 1,
            page_size: 20,
        };
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_page_total_pages_empty() {
        let page = ContestPage {
            items: Vec::new(),
            total: 0,
            page: 1,
            page_size: 20,
        };
        assert_eq!(page.total_pages(), 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_page_last_page_has_no_next() {
        let page = ContestPage {
            items: Vec::new(),
            total: 60,
            page: 3,
            page_size: 20,
        };
        assert_eq!(page.total_pages(), 3);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn test_participation_round_trip() {
        let participation = ParticipationDto {
            contest: create_test_contest(),
            time_remaining_secs: 5_400,
        };
        let json = serde_json::to_string(&participation).unwrap();
        let deserialized: ParticipationDto = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.time_remaining_secs, 5_400);
        assert_eq!(deserialized.contest.key, "winter-open-2024");
    }
}
