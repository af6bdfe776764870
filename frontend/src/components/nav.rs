use crate::auth::AuthContext;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Nav)]
pub fn nav() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let is_mobile_menu_open = use_state(|| false);

    let toggle_mobile_menu = {
        let is_mobile_menu_open = is_mobile_menu_open.clone();
        Callback::from(move |_| {
            is_mobile_menu_open.set(!*is_mobile_menu_open);
        })
    };

    let viewer_html = match auth.state.viewer() {
        Some(user) => html! {
            <a href={format!("/user/{}", user.username)} class="text-blue-100 hover:text-white text-sm font-medium">
                {user.username.clone()}
            </a>
        },
        None => html! {
            <a href="/accounts/login" class="text-blue-100 hover:text-white text-sm font-medium">
                {"Sign in"}
            </a>
        },
    };

    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-50", "bg-gradient-to-r", "from-slate-800", "to-blue-600",
            "text-white", "shadow-lg", "backdrop-blur-sm"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center")}>
                    // Left side - Logo and main nav
                    <div class="flex items-center gap-6">
                        <Link<Route> to={Route::Home} classes="text-xl font-bold tracking-tight">
                            {"AlgoArena"}
                        </Link<Route>>
                        <div class="hidden md:flex items-center gap-4">
                            <Link<Route> to={Route::Contests} classes="text-blue-100 hover:text-white text-sm font-medium">
                                {"Contests"}
                            </Link<Route>>
                            <a href="/problems" class="text-blue-100 hover:text-white text-sm font-medium">
                                {"Problems"}
                            </a>
                            <a href="/submissions" class="text-blue-100 hover:text-white text-sm font-medium">
                                {"Submissions"}
                            </a>
                        </div>
                    </div>

                    // Right side - viewer
                    <div class="hidden md:flex items-center gap-4">
                        {viewer_html.clone()}
                    </div>

                    // Mobile menu button
                    <button
                        onclick={toggle_mobile_menu}
                        class="md:hidden p-2 rounded-md text-blue-100 hover:text-white hover:bg-white/10"
                    >
                        {"☰"}
                    </button>
                </div>
            </div>

            if *is_mobile_menu_open {
                <div class="md:hidden px-4 pb-4 space-y-2">
                    <Link<Route> to={Route::Contests} classes="block text-blue-100 hover:text-white text-sm font-medium">
                        {"Contests"}
                    </Link<Route>>
                    <a href="/problems" class="block text-blue-100 hover:text-white text-sm font-medium">
                        {"Problems"}
                    </a>
                    <a href="/submissions" class="block text-blue-100 hover:text-white text-sm font-medium">
                        {"Submissions"}
                    </a>
                    <div class="pt-2 border-t border-white/20">
                        {viewer_html}
                    </div>
                </div>
            }
        </nav>
    }
}
