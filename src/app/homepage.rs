use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};

use super::footer::Footer;
use super::projects::Projects;
use super::reveal::Reveal;
use super::skills::Skills;
use crate::effects::motion::{parallax, scroll_progress, Motion};
use crate::portfolio::profile;

/// Distance the hero text drifts up over the first viewport of scrolling.
const HERO_PARALLAX: f64 = -100.0;

pub(super) const SECTION_CLASS: &str =
    "py-20 px-4 md:px-20 relative bg-white/10 backdrop-blur-sm";
pub(super) const HEADING_CLASS: &str = "text-4xl font-bold mb-10 text-center";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=profile().page_title() />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Footer />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();
    let offset = move || {
        let progress = scroll_progress(scroll_y.get(), 0.0, height.get());
        format!("transform: translateY({}px);", parallax(progress, 0.0, HERO_PARALLAX))
    };
    let p = profile();

    view! {
        <section class="h-screen flex items-center justify-center relative overflow-hidden">
            <Reveal class="text-center z-10">
                <div style=offset>
                    <Reveal motion=Motion::fade().from_y(-50.0).duration(800)>
                        <h1 class="text-6xl font-bold mb-4">{p.name}</h1>
                    </Reveal>
                    <Reveal motion=Motion::fade().from_y(50.0).duration(800).delay(200)>
                        <p class="text-2xl opacity-75">{p.tagline}</p>
                    </Reveal>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let p = profile();

    view! {
        <section id="about" class=format!("{SECTION_CLASS} tracking-wide")>
            <Reveal motion=Motion::fade().from_y(-20.0).duration(500)>
                <h2 class=HEADING_CLASS>"ABOUT ME"</h2>
            </Reveal>
            <div class="flex flex-col md:flex-row items-center justify-between">
                <Reveal
                    class="md:w-1/2 mb-10 md:mb-0"
                    motion=Motion::fade().from_x(-50.0).duration(500).delay(200)
                >
                    <div class="relative w-64 h-64 mx-auto">
                        <div class="absolute inset-0 bg-gradient-to-r from-blue-500 to-purple-500 rounded-full animate-pulse" />
                        <img
                            src=p.portrait_url
                            alt=p.name
                            width="500"
                            height="500"
                            class="relative z-10 rounded-full w-full h-full object-cover"
                        />
                    </div>
                </Reveal>
                <Reveal
                    class="md:w-1/2"
                    motion=Motion::fade().from_x(50.0).duration(500).delay(400)
                >
                    {p
                        .about
                        .iter()
                        .enumerate()
                        .map(|(i, paragraph)| {
                            let class = if i == 0 {
                                "text-lg leading-relaxed opacity-80"
                            } else {
                                "text-lg leading-relaxed mt-4 opacity-80"
                            };
                            view! { <p class=class>{*paragraph}</p> }
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}
