use shared::ContestDto;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContestLabelsProps {
    pub contest: ContestDto,
}

/// Badges describing a contest: rating status, the organizations or
/// classes a private contest is restricted to, and its tags.
#[function_component(ContestLabels)]
pub fn contest_labels(props: &ContestLabelsProps) -> Html {
    let contest = &props.contest;

    let mut badges: Vec<Html> = Vec::new();

    if contest.is_rated {
        badges.push(html! {
            <span class="inline-flex px-2 py-1 text-xs font-medium bg-amber-100 text-amber-800 rounded contest-label-rated">
                {"rated"}
            </span>
        });
    }

    if contest.is_organization_private {
        for org in &contest.organizations {
            badges.push(html! {
                <span class="inline-flex items-center gap-1 px-2 py-1 text-xs font-medium bg-gray-100 text-gray-800 rounded contest-label-lock">
                    <span aria-hidden="true">{"🔒"}</span>
                    {org.name.clone()}
                </span>
            });
        }
    }

    if contest.is_private {
        for class in &contest.classes {
            badges.push(html! {
                <span class="inline-flex items-center gap-1 px-2 py-1 text-xs font-medium bg-purple-100 text-purple-800 rounded contest-label-class">
                    {class.name.clone()}
                </span>
            });
        }
    }

    for tag in &contest.tags {
        let style = tag
            .color
            .as_ref()
            .map(|c| format!("background-color: {}", c));
        badges.push(html! {
            <span class="inline-flex px-2 py-1 text-xs font-medium bg-blue-100 text-blue-800 rounded contest-tag" style={style}>
                {tag.name.clone()}
            </span>
        });
    }

    html! {
        <div class="flex flex-wrap gap-1">
            { for badges }
        </div>
    }
}
