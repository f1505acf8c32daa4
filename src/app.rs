mod background;
mod cursor;
mod footer;
mod homepage;
mod links;
mod navbar;
mod projects;
mod reveal;
mod skills;

use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::storage::{use_session_storage_with_options, UseStorageOptions};

use crate::portfolio::{profile, structured_data};
use crate::theme::{Theme, READ_AFTER_HYDRATION, STORAGE_KEY};

use background::ParticleBackground;
use cursor::CursorRing;
use homepage::HomePage;
use navbar::Navbar;

const OG_IMAGE_WIDTH: &str = "1200";
const OG_IMAGE_HEIGHT: &str = "630";

/// Theme shared with every component that renders theme-dependent output.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script type="application/ld+json" inner_html=structured_data()></script>
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (theme, set_theme, _) = use_session_storage_with_options::<Theme, FromToStringCodec>(
        STORAGE_KEY,
        UseStorageOptions::default().delay_during_hydration(READ_AFTER_HYDRATION),
    );
    provide_context(ThemeContext { theme, set_theme });

    let p = profile();

    view! {
        <Meta name="description" content=p.description />
        <Meta name="author" content=p.name />
        <Meta name="robots" content="index, follow" />
        <Meta property="og:type" content="website" />
        <Meta property="og:locale" content="en_US" />
        <Meta property="og:url" content=p.site_url />
        <Meta property="og:title" content=p.page_title() />
        <Meta property="og:description" content=p.description />
        <Meta property="og:image" content=p.portrait_absolute_url() />
        <Meta property="og:image:width" content=OG_IMAGE_WIDTH />
        <Meta property="og:image:height" content=OG_IMAGE_HEIGHT />
        <Meta property="og:image:alt" content=p.og_image_alt() />

        <Router>
            <div class=move || theme.get().root_class()>
                <ParticleBackground />
                <CursorRing />
                <Navbar />
                <main class="relative z-10">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
            res.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=format!("Not Found | {}", profile().page_title()) />
        <section class="h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="text-4xl font-bold">"Page not found."</h1>
            <a href="/" class="text-blue-400 hover:text-blue-300">"Back to the portfolio"</a>
        </section>
    }
}
