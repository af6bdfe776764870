use crate::api::contest_url;
use crate::components::contest::join_form::JoinControls;
use crate::components::contest::labels::ContestLabels;
use shared::{format_start, format_window, ContestDto, ContestPage};
use yew::prelude::*;

/// Page-number window shown in the pagination bar: the current page and
/// up to two neighbors on each side, clamped to the valid range.
pub fn page_window(current: u32, total_pages: u32) -> (u32, u32) {
    if total_pages == 0 {
        return (1, 0);
    }
    let start = if current <= 3 { 1 } else { current - 2 };
    let end = if current + 2 >= total_pages {
        total_pages
    } else {
        current + 2
    };
    (start, end)
}

/// Next sort state after clicking a column header: clicking the active
/// ascending column flips it to descending, anything else starts
/// ascending.
pub fn toggle_sort(sort_by: &str, sort_dir: &str, column: &str) -> (String, String) {
    if sort_by == column && sort_dir == "asc" {
        (column.to_string(), "desc".to_string())
    } else {
        (column.to_string(), "asc".to_string())
    }
}

#[derive(Properties, PartialEq)]
pub struct PastContestsTableProps {
    pub page: ContestPage,
    pub sort_by: String,
    pub sort_dir: String,
    #[prop_or_default]
    pub authenticated: bool,
    #[prop_or_default]
    pub csrf_token: String,
    #[prop_or_default]
    pub on_sort_change: Callback<(String, String)>,
    #[prop_or_default]
    pub on_page_change: Callback<u32>,
}

/// The past-contest table: sortable Name / Start / Length / Users
/// columns, a virtual-join control per row, and a windowed pagination
/// bar. The backend does the actual sorting and paging; this component
/// renders the returned page and echoes the requested order.
#[function_component(PastContestsTable)]
pub fn past_contests_table(props: &PastContestsTableProps) -> Html {
    let page = &props.page;
    let current_page = page.page;
    let total_pages = page.total_pages();

    let header = |column: &'static str, title: &'static str| -> Html {
        let on_sort_change = props.on_sort_change.clone();
        let sort_by = props.sort_by.clone();
        let sort_dir = props.sort_dir.clone();
        let indicator = if props.sort_by == column {
            if props.sort_dir == "asc" {
                "↑"
            } else {
                "↓"
            }
        } else {
            ""
        };
        html! {
            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                <button
                    onclick={Callback::from(move |_| {
                        on_sort_change.emit(toggle_sort(&sort_by, &sort_dir, column));
                    })}
                    class="flex items-center gap-1 hover:text-gray-700"
                >
                    {title}
                    {indicator}
                </button>
            </th>
        }
    };

    if page.items.is_empty() {
        return html! {
            <div class="bg-white rounded-lg shadow-sm p-12 text-center">
                <div class="text-6xl mb-4">{"🏆"}</div>
                <h3 class="text-2xl font-bold text-gray-900 mb-4">{"No Contests Found"}</h3>
                <p class="text-gray-600">
                    {"No past contests match your search. Try a different query."}
                </p>
            </div>
        };
    }

    let render_row = |contest: &ContestDto| -> Html {
        html! {
            <tr class="hover:bg-gray-50">
                <td class="px-6 py-4">
                    <a href={contest_url(&contest.key)} class="text-sm font-medium text-gray-900 hover:text-blue-700">
                        {contest.name.clone()}
                    </a>
                    <div class="mt-1">
                        <ContestLabels contest={contest.clone()} />
                    </div>
                </td>
                <td class="px-6 py-4 whitespace-nowrap text-xs text-gray-600">
                    {format_start(&contest.start_time)}
                </td>
                <td class="px-6 py-4 whitespace-nowrap text-xs text-gray-600">
                    {format_window(contest.length_secs())}
                </td>
                <td class="px-6 py-4 whitespace-nowrap text-xs text-gray-600">
                    {contest.user_count}
                </td>
                <td class="px-6 py-4 whitespace-nowrap text-right">
                    <JoinControls
                        contest={contest.clone()}
                        past={true}
                        authenticated={props.authenticated}
                        csrf_token={props.csrf_token.clone()}
                    />
                </td>
            </tr>
        }
    };

    html! {
        <div class="bg-white rounded-lg shadow-sm overflow-hidden">
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            {header("name", "Name")}
                            {header("start", "Start")}
                            {header("duration", "Length")}
                            {header("user_count", "Users")}
                            <th class="px-6 py-3"></th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        { for page.items.iter().map(render_row) }
                    </tbody>
                </table>
            </div>

            // Pagination
            if total_pages > 1 {
                <div class="bg-white px-4 py-3 flex items-center justify-between border-t border-gray-200 sm:px-6">
                    <div>
                        <p class="text-sm text-gray-700">
                            {"Showing "}
                            <span class="font-medium">{(current_page - 1) * page.page_size + 1}</span>
                            {" to "}
                            <span class="font-medium">{(current_page as u64 * page.page_size as u64).min(page.total)}</span>
                            {" of "}
                            <span class="font-medium">{page.total}</span>
                            {" results"}
                        </p>
                    </div>
                    <nav class="relative z-0 inline-flex rounded-md shadow-sm -space-x-px">
                        <button
                            onclick={props.on_page_change.reform(move |_| if current_page > 1 { current_page - 1 } else { 1 })}
                            disabled={!page.has_previous()}
                            class="relative inline-flex items-center px-2 py-2 rounded-l-md border border-gray-300 bg-white text-sm font-medium text-gray-500 hover:bg-gray-50"
                        >
                            {"Previous"}
                        </button>

                        // Page numbers
                        {{
                            let (start_page, end_page) = page_window(current_page, total_pages);
                            (start_page..=end_page).map(|page_num| {
                                let is_current = page_num == current_page;
                                html! {
                                    <button
                                        onclick={props.on_page_change.reform(move |_| page_num)}
                                        class={classes!(
                                            "relative", "inline-flex", "items-center", "px-4", "py-2", "border", "text-sm", "font-medium",
                                            if is_current {
                                                classes!("z-10", "bg-indigo-50", "border-indigo-500", "text-indigo-600")
                                            } else {
                                                classes!("bg-white", "border-gray-300", "text-gray-500", "hover:bg-gray-50")
                                            }
                                        )}
                                    >
                                        {page_num}
                                    </button>
                                }
                            }).collect::<Vec<_>>()
                        }}

                        <button
                            onclick={props.on_page_change.reform(move |_| current_page + 1)}
                            disabled={!page.has_next()}
                            class="relative inline-flex items-center px-2 py-2 rounded-r-md border border-gray-300 bg-white text-sm font-medium text-gray-500 hover:bg-gray-50"
                        >
                            {"Next"}
                        </button>
                    </nav>
                </div>
            }
        </div>
    }
}
