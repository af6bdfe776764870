use crate::components::version_display::VersionDisplay;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gradient-to-r from-slate-800 to-blue-600 text-white mt-auto">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    // Brand Section
                    <div class="text-center md:text-left">
                        <div class="flex items-center justify-center md:justify-start mb-4">
                            <span class="text-2xl font-bold tracking-tight mr-2">{"AlgoArena"}</span>
                        </div>
                        <p class="text-blue-100 text-sm leading-relaxed max-w-md mx-auto md:mx-0">
                            {"Practice, compete, and climb the rating ladder on contests from the community."}
                        </p>
                    </div>

                    // Quick Links
                    <div class="text-center md:text-left">
                        <h3 class="text-lg font-semibold mb-4">{"Quick Links"}</h3>
                        <ul class="space-y-2">
                            <li>
                                <a href="/contests" class="text-blue-100 hover:text-white transition-colors duration-200 text-sm">
                                    {"Contests"}
                                </a>
                            </li>
                            <li>
                                <a href="/problems" class="text-blue-100 hover:text-white transition-colors duration-200 text-sm">
                                    {"Problems"}
                                </a>
                            </li>
                            <li>
                                <a href="/about" class="text-blue-100 hover:text-white transition-colors duration-200 text-sm">
                                    {"About"}
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="mt-8 pt-4 border-t border-white/20 flex items-center justify-between">
                    <span class="text-blue-100 text-xs">
                        {"© 2026 AlgoArena"}
                    </span>
                    <VersionDisplay />
                </div>
            </div>
        </footer>
    }
}
