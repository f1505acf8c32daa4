use leptos::prelude::*;

use super::ThemeContext;
use crate::portfolio::profile;

const SECTIONS: [(&str, &str); 4] = [
    ("About", "/#about"),
    ("Skills", "/#skills"),
    ("Projects", "/#projects"),
    ("Contact", "/#contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ThemeContext { theme, set_theme } = expect_context::<ThemeContext>();

    view! {
        <nav class="fixed top-0 left-0 w-full z-50 bg-white/10 backdrop-blur-md py-4 px-4 md:px-8">
            <div class="max-w-7xl mx-auto flex items-center justify-between">
                <h1 class="text-xl font-bold">
                    <a href="/">{profile().name}</a>
                </h1>
                <div class="flex items-center space-x-4">
                    {SECTIONS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=*href
                                    class="hover:text-gray-400 transition duration-300"
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        type="button"
                        class="ml-2 w-8 h-8 rounded-full border border-current/30 hover:bg-white/20 transition duration-300"
                        aria-label=move || theme.get().toggle_label()
                        on:click=move |_| set_theme.update(|t| *t = t.toggle())
                    >
                        {move || theme.get().icon()}
                    </button>
                </div>
            </div>
        </nav>
    }
}
