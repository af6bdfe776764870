//! Fixed view-model fixtures the rendering tests are driven by.

use chrono::DateTime;
use shared::{
    ClassDto, ContestDto, ContestIndexResponse, ContestPage, OrganizationDto, ParticipationDto,
    TagDto,
};

/// A neutral contest; tests tweak the fields they care about.
pub fn create_test_contest(key: &str, name: &str) -> ContestDto {
    ContestDto {
        key: key.to_string(),
        name: name.to_string(),
        start_time: DateTime::parse_from_rfc3339("2024-01-20T17:00:00Z").unwrap(),
        end_time: DateTime::parse_from_rfc3339("2024-01-20T20:00:00Z").unwrap(),
        time_limit_secs: None,
        is_rated: false,
        is_organization_private: false,
        organizations: Vec::new(),
        is_private: false,
        classes: Vec::new(),
        tags: Vec::new(),
        user_count: 0,
        can_join: false,
        can_spectate: false,
        can_see_own_scoreboard: false,
        time_until_start_secs: None,
        time_until_end_secs: None,
    }
}

/// A rated, live-joinable contest in progress.
pub fn create_ongoing_contest() -> ContestDto {
    ContestDto {
        is_rated: true,
        user_count: 412,
        can_join: true,
        can_see_own_scoreboard: true,
        time_until_end_secs: Some(5_400),
        ..create_test_contest("winter-open-2024", "Winter Open 2024")
    }
}

/// A contest that has not started yet.
pub fn create_upcoming_contest() -> ContestDto {
    ContestDto {
        is_rated: true,
        time_until_start_secs: Some(2 * 86_400 + 30),
        ..create_test_contest("spring-qualifier", "Spring Qualifier")
    }
}

/// A finished contest as it appears in the past table.
pub fn create_past_contest() -> ContestDto {
    ContestDto {
        user_count: 1_987,
        ..create_test_contest("autumn-open-2023", "Autumn Open 2023")
    }
}

/// An organization-private contest visible to two organizations.
pub fn create_org_private_contest() -> ContestDto {
    ContestDto {
        is_organization_private: true,
        organizations: vec![
            OrganizationDto {
                key: "north-campus".to_string(),
                name: "North Campus".to_string(),
            },
            OrganizationDto {
                key: "south-campus".to_string(),
                name: "South Campus".to_string(),
            },
        ],
        ..create_test_contest("campus-cup", "Campus Cup")
    }
}

pub fn create_class_private_contest() -> ContestDto {
    ContestDto {
        is_private: true,
        classes: vec![ClassDto {
            key: "algo-101".to_string(),
            name: "Algorithms 101".to_string(),
        }],
        ..create_test_contest("algo-homework", "Algorithms Homework Round")
    }
}

pub fn create_tagged_contest() -> ContestDto {
    ContestDto {
        tags: vec![
            TagDto {
                name: "icpc".to_string(),
                color: Some("#e74c3c".to_string()),
            },
            TagDto {
                name: "beginner".to_string(),
                color: None,
            },
        ],
        ..create_test_contest("tagged-round", "Tagged Round")
    }
}

pub fn create_participation(contest: ContestDto, time_remaining_secs: u64) -> ParticipationDto {
    ParticipationDto {
        contest,
        time_remaining_secs,
    }
}

pub fn create_page(items: Vec<ContestDto>, total: u64, page: u32, page_size: u32) -> ContestPage {
    ContestPage {
        items,
        total,
        page,
        page_size,
    }
}

pub fn create_empty_page() -> ContestPage {
    create_page(Vec::new(), 0, 1, 20)
}

/// An index with every segment populated.
pub fn create_full_index() -> ContestIndexResponse {
    ContestIndexResponse {
        active_participations: vec![create_participation(create_ongoing_contest(), 3_600)],
        current: vec![create_ongoing_contest()],
        future: vec![create_upcoming_contest()],
        past: create_page(vec![create_past_contest()], 1, 1, 20),
    }
}

/// An index for a site with nothing going on.
pub fn create_empty_index() -> ContestIndexResponse {
    ContestIndexResponse {
        active_participations: Vec::new(),
        current: Vec::new(),
        future: Vec::new(),
        past: create_empty_page(),
    }
}
