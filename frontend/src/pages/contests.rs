use crate::api::contests::get_contest_index;
use crate::auth::AuthContext;
use crate::components::contest::past_table::PastContestsTable;
use crate::components::contest::row::{ContestPhase, ContestRow, ParticipationRow};
use shared::ContestIndexResponse;
use yew::prelude::*;

/// Query state for the past-contest table. The draft lives separately in
/// the page; this is the applied state the index was fetched with.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub page: u32,
    pub page_size: u32,
    pub sort_by: String,
    pub sort_dir: String,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            page_size: 20,
            sort_by: "start".to_string(),
            sort_dir: "desc".to_string(),
        }
    }
}

impl SearchState {
    /// Query parameters for the contest index fetch
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.query.is_empty() {
            params.push(("q", self.query.clone()));
        }
        params.push(("page", self.page.to_string()));
        params.push(("page_size", self.page_size.to_string()));
        params.push(("sort_by", self.sort_by.clone()));
        params.push(("sort_dir", self.sort_dir.clone()));
        params
    }
}

#[derive(Properties, PartialEq)]
pub struct ContestIndexViewProps {
    pub index: ContestIndexResponse,
    #[prop_or_default]
    pub authenticated: bool,
    #[prop_or_default]
    pub csrf_token: String,
    #[prop_or_default]
    pub search_draft: String,
    #[prop_or_default]
    pub sort_by: String,
    #[prop_or_default]
    pub sort_dir: String,
    #[prop_or_default]
    pub on_search_input: Callback<InputEvent>,
    #[prop_or_default]
    pub on_search_submit: Callback<()>,
    #[prop_or_default]
    pub on_sort_change: Callback<(String, String)>,
    #[prop_or_default]
    pub on_page_change: Callback<u32>,
}

/// The four segments of the contest hub, rendered purely from props so
/// the same markup is reachable from server-side rendering.
#[function_component(ContestIndexView)]
pub fn contest_index_view(props: &ContestIndexViewProps) -> Html {
    let index = &props.index;

    html! {
        <div class="space-y-8">
            // Active participations
            if !index.active_participations.is_empty() {
                <section class="contest-segment-active">
                    <h2 class="text-lg font-semibold text-gray-900 mb-3">{"Active Contests"}</h2>
                    <div class="bg-white rounded-lg shadow-sm divide-y divide-gray-200">
                        { for index.active_participations.iter().map(|participation| html! {
                            <ParticipationRow participation={participation.clone()} />
                        })}
                    </div>
                </section>
            }

            // Ongoing contests
            if !index.current.is_empty() {
                <section class="contest-segment-ongoing">
                    <h2 class="text-lg font-semibold text-gray-900 mb-3">{"Ongoing Contests"}</h2>
                    <div class="bg-white rounded-lg shadow-sm divide-y divide-gray-200">
                        { for index.current.iter().map(|contest| html! {
                            <ContestRow
                                contest={contest.clone()}
                                phase={ContestPhase::Ongoing}
                                authenticated={props.authenticated}
                                csrf_token={props.csrf_token.clone()}
                            />
                        })}
                    </div>
                </section>
            }

            // Upcoming contests
            <section class="contest-segment-upcoming">
                <h2 class="text-lg font-semibold text-gray-900 mb-3">{"Upcoming Contests"}</h2>
                if index.future.is_empty() {
                    <div class="bg-white rounded-lg shadow-sm p-6 text-sm text-gray-600">
                        {"There are no scheduled contests at this time."}
                    </div>
                } else {
                    <div class="bg-white rounded-lg shadow-sm divide-y divide-gray-200">
                        { for index.future.iter().map(|contest| html! {
                            <ContestRow
                                contest={contest.clone()}
                                phase={ContestPhase::Upcoming}
                                authenticated={props.authenticated}
                                csrf_token={props.csrf_token.clone()}
                            />
                        })}
                    </div>
                }
            </section>

            // Past contests
            <section class="contest-segment-past">
                <h2 class="text-lg font-semibold text-gray-900 mb-3">{"Past Contests"}</h2>
                <div class="bg-white rounded-lg shadow-sm p-4 mb-4">
                    <div class="flex gap-2">
                        <input
                            type="text"
                            placeholder="Search past contests..."
                            value={props.search_draft.clone()}
                            oninput={props.on_search_input.clone()}
                            class="flex-1 px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                        />
                        <button
                            onclick={props.on_search_submit.reform(|_| ())}
                            class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"
                        >
                            {"Search"}
                        </button>
                    </div>
                </div>
                <PastContestsTable
                    page={index.past.clone()}
                    sort_by={props.sort_by.clone()}
                    sort_dir={props.sort_dir.clone()}
                    authenticated={props.authenticated}
                    csrf_token={props.csrf_token.clone()}
                    on_sort_change={props.on_sort_change.clone()}
                    on_page_change={props.on_page_change.clone()}
                />
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContestHubProps {}

/// The contest listing page: fetches the pre-computed view model and
/// renders the four segments, holding the past-table query state.
#[function_component(ContestHub)]
pub fn contest_hub(_props: &ContestHubProps) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");

    // Applied filters used for querying; the draft is edited in the UI
    // until the viewer submits it
    let search_state = use_state(SearchState::default);
    let search_draft = use_state(String::new);
    let index = use_state(|| None::<ContestIndexResponse>);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Fetch takes the state to query explicitly so a set() followed by an
    // emit() never reads a stale snapshot.
    let perform_fetch = {
        let index = index.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |state: SearchState| {
            let index = index.clone();
            let loading = loading.clone();
            let error = error.clone();

            loading.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let params = state.to_params();
                match get_contest_index(&params).await {
                    Ok(response) => {
                        index.set(Some(response));
                        loading.set(false);
                    }
                    Err(e) => {
                        error.set(Some(e));
                        loading.set(false);
                    }
                }
            });
        })
    };

    // Initial fetch on mount
    {
        let perform_fetch = perform_fetch.clone();
        use_effect_with((), move |_| {
            perform_fetch.emit(SearchState::default());
        });
    }

    let on_search_input = {
        let search_draft = search_draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search_draft.set(input.value());
        })
    };

    let on_search_submit = {
        let search_draft = search_draft.clone();
        let search_state = search_state.clone();
        let perform_fetch = perform_fetch.clone();
        Callback::from(move |_: ()| {
            let mut next = (*search_state).clone();
            next.query = (*search_draft).clone();
            next.page = 1; // reset to first page on a new search
            search_state.set(next.clone());
            perform_fetch.emit(next);
        })
    };

    let on_sort_change = {
        let search_state = search_state.clone();
        let perform_fetch = perform_fetch.clone();
        Callback::from(move |(sort_by, sort_dir): (String, String)| {
            let mut next = (*search_state).clone();
            next.sort_by = sort_by;
            next.sort_dir = sort_dir;
            next.page = 1; // Reset to first page
            search_state.set(next.clone());
            perform_fetch.emit(next);
        })
    };

    let on_page_change = {
        let search_state = search_state.clone();
        let perform_fetch = perform_fetch.clone();
        Callback::from(move |page: u32| {
            let mut next = (*search_state).clone();
            next.page = page;
            search_state.set(next.clone());
            perform_fetch.emit(next);
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="p-4 sticky top-0 z-40 bg-white shadow-sm">
                <div class="container mx-auto flex justify-between items-center">
                    <h1 class="text-xl font-medium">{"Contests"}</h1>
                    if *loading {
                        <span class="text-sm text-gray-500">{"Loading..."}</span>
                    }
                </div>
            </header>

            <main class="container mx-auto px-4 py-6">
                if let Some(error) = &*error {
                    <div class="bg-red-50 border border-red-200 rounded-lg p-4 mb-6">
                        <div class="flex">
                            <div class="text-red-400">{"⚠️"}</div>
                            <div class="ml-3">
                                <h3 class="text-sm font-medium text-red-800">{"Error"}</h3>
                                <div class="mt-1 text-sm text-red-700">{error}</div>
                            </div>
                        </div>
                    </div>
                } else if let Some(index) = &*index {
                    <ContestIndexView
                        index={index.clone()}
                        authenticated={auth.state.is_authenticated()}
                        csrf_token={auth.state.csrf_token()}
                        search_draft={(*search_draft).clone()}
                        sort_by={search_state.sort_by.clone()}
                        sort_dir={search_state.sort_dir.clone()}
                        on_search_input={on_search_input}
                        on_search_submit={on_search_submit}
                        on_sort_change={on_sort_change}
                        on_page_change={on_page_change}
                    />
                }
            </main>
        </div>
    }
}
