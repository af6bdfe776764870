use crate::api::{contest_url, ranking_url};
use crate::components::contest::countdown::Countdown;
use crate::components::contest::join_form::JoinControls;
use crate::components::contest::labels::ContestLabels;
use shared::{format_start, format_window, ContestDto, ParticipationDto};
use yew::prelude::*;

/// Which segment a contest row is rendered in; decides the countdown
/// seed and its caption.
#[derive(Clone, Copy, PartialEq)]
pub enum ContestPhase {
    Ongoing,
    Upcoming,
}

/// User count, linked to the scoreboard when the viewer may see it.
fn user_count_html(contest: &ContestDto) -> Html {
    let text = format!(
        "{} user{}",
        contest.user_count,
        if contest.user_count == 1 { "" } else { "s" }
    );
    if contest.can_see_own_scoreboard {
        html! {
            <a href={ranking_url(&contest.key)} class="text-blue-600 hover:text-blue-800">
                {text}
            </a>
        }
    } else {
        html! { <span class="text-gray-500">{text}</span> }
    }
}

fn length_html(contest: &ContestDto) -> Html {
    let caption = if contest.has_window() { "window" } else { "length" };
    html! {
        <span class="text-xs text-gray-600">
            {caption}{": "}{format_window(contest.length_secs())}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContestRowProps {
    pub contest: ContestDto,
    pub phase: ContestPhase,
    #[prop_or_default]
    pub authenticated: bool,
    #[prop_or_default]
    pub csrf_token: String,
}

/// One ongoing or upcoming contest: name link, labels, schedule facts on
/// the left; countdown and join controls on the right.
#[function_component(ContestRow)]
pub fn contest_row(props: &ContestRowProps) -> Html {
    let contest = &props.contest;

    let (caption, seconds) = match props.phase {
        ContestPhase::Ongoing => ("Ends in", contest.time_until_end_secs.unwrap_or(0)),
        ContestPhase::Upcoming => ("Starting in", contest.time_until_start_secs.unwrap_or(0)),
    };

    html! {
        <div class="contest-row flex flex-col md:flex-row md:items-center justify-between gap-3 px-6 py-4">
            <div class="min-w-0">
                <a href={contest_url(&contest.key)} class="text-sm font-medium text-gray-900 hover:text-blue-700">
                    {contest.name.clone()}
                </a>
                <div class="mt-1 flex flex-wrap items-center gap-2">
                    <ContestLabels contest={contest.clone()} />
                </div>
                <div class="mt-1 flex flex-wrap items-center gap-3 text-xs text-gray-600">
                    <span>{format_start(&contest.start_time)}</span>
                    {length_html(contest)}
                    {user_count_html(contest)}
                </div>
            </div>
            <div class="flex items-center gap-4 shrink-0">
                <div class="text-right">
                    <div class="text-xs text-gray-500">{caption}</div>
                    <Countdown seconds={seconds} class={classes!("text-sm", "text-gray-900")} />
                </div>
                <JoinControls
                    contest={contest.clone()}
                    authenticated={props.authenticated}
                    csrf_token={props.csrf_token.clone()}
                />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticipationRowProps {
    pub participation: ParticipationDto,
}

/// One of the viewer's active enrollments: the contest and how long they
/// have left in their window.
#[function_component(ParticipationRow)]
pub fn participation_row(props: &ParticipationRowProps) -> Html {
    let contest = &props.participation.contest;

    html! {
        <div class="participation-row flex flex-col md:flex-row md:items-center justify-between gap-3 px-6 py-4">
            <div class="min-w-0">
                <a href={contest_url(&contest.key)} class="text-sm font-medium text-gray-900 hover:text-blue-700">
                    {contest.name.clone()}
                </a>
                <div class="mt-1 flex flex-wrap items-center gap-2">
                    <ContestLabels contest={contest.clone()} />
                </div>
                <div class="mt-1 text-xs text-gray-600">
                    {user_count_html(contest)}
                </div>
            </div>
            <div class="text-right shrink-0">
                <div class="text-xs text-gray-500">{"Time remaining"}</div>
                <Countdown
                    seconds={props.participation.time_remaining_secs}
                    class={classes!("text-sm", "text-gray-900")}
                />
            </div>
        </div>
    }
}
