//! Golden-output tests for the past-contest table: sort indicators,
//! pagination window, and the empty state.

use anyhow::Result;
use frontend::components::contest::past_table::{PastContestsTable, PastContestsTableProps};
use pretty_assertions::assert_eq;
use shared::ContestPage;
use testing::fixtures::*;
use testing::{count_occurrences, render_component};
use yew::Callback;

fn table_props(page: ContestPage, sort_by: &str, sort_dir: &str) -> PastContestsTableProps {
    PastContestsTableProps {
        page,
        sort_by: sort_by.to_string(),
        sort_dir: sort_dir.to_string(),
        authenticated: true,
        csrf_token: "tok-123".to_string(),
        on_sort_change: Callback::noop(),
        on_page_change: Callback::noop(),
    }
}

fn many_contests(count: usize) -> Vec<shared::ContestDto> {
    (0..count)
        .map(|i| create_test_contest(&format!("round-{}", i), &format!("Round {}", i)))
        .collect()
}

#[tokio::test]
async fn headers_show_the_applied_sort_indicator() -> Result<()> {
    let page = create_page(many_contests(3), 3, 1, 20);
    let html = render_component::<PastContestsTable>(table_props(page, "start", "desc")).await;

    assert!(html.contains("Name"));
    assert!(html.contains("Start"));
    assert!(html.contains("Length"));
    assert!(html.contains("Users"));
    assert_eq!(count_occurrences(&html, "↓"), 1);
    assert_eq!(count_occurrences(&html, "↑"), 0);
    Ok(())
}

#[tokio::test]
async fn ascending_sort_flips_the_indicator() -> Result<()> {
    let page = create_page(many_contests(3), 3, 1, 20);
    let html = render_component::<PastContestsTable>(table_props(page, "name", "asc")).await;

    assert_eq!(count_occurrences(&html, "↑"), 1);
    assert_eq!(count_occurrences(&html, "↓"), 0);
    Ok(())
}

#[tokio::test]
async fn single_page_hides_pagination() -> Result<()> {
    let page = create_page(many_contests(5), 5, 1, 20);
    let html = render_component::<PastContestsTable>(table_props(page, "start", "desc")).await;

    assert!(!html.contains("Previous"));
    assert!(!html.contains("Next"));
    Ok(())
}

#[tokio::test]
async fn middle_page_renders_its_window() -> Result<()> {
    // Page 5 of 10: window is pages 3 through 7, nothing disabled
    let page = create_page(many_contests(20), 200, 5, 20);
    let html = render_component::<PastContestsTable>(table_props(page, "start", "desc")).await;

    assert!(html.contains("Showing "));
    assert!(html.contains(">81<"));
    assert!(html.contains(">100<"));
    for page_num in 3..=7 {
        assert!(
            html.contains(&format!(">{}<", page_num)),
            "page {} missing",
            page_num
        );
    }
    assert!(!html.contains(">2<"));
    assert!(!html.contains(">8<"));
    assert!(!html.contains("disabled"));
    Ok(())
}

#[tokio::test]
async fn first_page_disables_previous() -> Result<()> {
    let page = create_page(many_contests(20), 200, 1, 20);
    let html = render_component::<PastContestsTable>(table_props(page, "start", "desc")).await;

    assert!(html.contains("Previous"));
    assert!(html.contains("disabled"));
    Ok(())
}

#[tokio::test]
async fn rows_carry_virtual_join_and_facts() -> Result<()> {
    let page = create_page(vec![create_past_contest()], 1, 1, 20);
    let html = render_component::<PastContestsTable>(table_props(page, "start", "desc")).await;

    assert!(html.contains("Autumn Open 2023"));
    assert!(html.contains("href=\"/contest/autumn-open-2023\""));
    assert!(html.contains("20/01/2024 17:00"));
    assert!(html.contains("3:00"));
    assert!(html.contains(">1987<"));
    assert!(html.contains(">Virtual join<"));
    assert!(html.contains("action=\"/contest/autumn-open-2023/join\""));
    Ok(())
}

#[tokio::test]
async fn empty_page_renders_the_empty_state() -> Result<()> {
    let html =
        render_component::<PastContestsTable>(table_props(create_empty_page(), "start", "desc"))
            .await;

    assert!(html.contains("No Contests Found"));
    assert!(!html.contains("<table"));
    Ok(())
}
