use crate::api::join_url;
use shared::ContestDto;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct JoinControlsProps {
    pub contest: ContestDto,
    /// Whether this row belongs to the past segment (virtual join)
    #[prop_or_default]
    pub past: bool,
    #[prop_or_default]
    pub authenticated: bool,
    /// Anti-forgery token carried by the form post
    #[prop_or_default]
    pub csrf_token: String,
}

/// The join/spectate/virtual-join action: a plain form post to the
/// judge's join endpoint for this contest, carrying the CSRF token.
/// Button precedence is live join, then spectate; past contests offer a
/// virtual join to any signed-in viewer. Renders nothing when the viewer
/// has no way in.
#[function_component(JoinControls)]
pub fn join_controls(props: &JoinControlsProps) -> Html {
    let contest = &props.contest;

    let button = if props.past {
        if props.authenticated {
            Some((
                "Virtual join",
                "px-3 py-1 text-sm border border-gray-300 rounded-lg text-gray-700 hover:bg-gray-50",
            ))
        } else {
            None
        }
    } else if contest.can_join {
        Some((
            "Join",
            "px-3 py-1 text-sm bg-blue-600 text-white rounded-lg hover:bg-blue-700",
        ))
    } else if contest.can_spectate {
        Some((
            "Spectate",
            "px-3 py-1 text-sm border border-gray-300 rounded-lg text-gray-700 hover:bg-gray-50",
        ))
    } else {
        None
    };

    match button {
        Some((label, class)) => html! {
            <form method="post" action={join_url(&contest.key)} class="inline">
                <input type="hidden" name="csrf_token" value={props.csrf_token.clone()} />
                <button type="submit" class={class}>{label}</button>
            </form>
        },
        None => html! {},
    }
}
