use leptos::{either::Either, html, prelude::*};
use leptos_use::{use_scroll, use_window_size, UseScrollReturn, UseWindowSizeReturn};

use super::homepage::{HEADING_CLASS, SECTION_CLASS};
use super::reveal::Reveal;
use crate::effects::carousel::{max_offset, scroll_target, Direction, ScrollAffordance};
use crate::effects::motion::Motion;
use crate::portfolio::{skills, Skill};

#[component]
pub fn Skills() -> impl IntoView {
    let track = NodeRef::<html::Div>::new();
    let UseScrollReturn { x, set_x, .. } = use_scroll(track);
    let UseWindowSizeReturn { width, .. } = use_window_size();

    let affordance = Memo::new(move |_| {
        let offset = x.get();
        // the max offset moves with the viewport
        width.track();
        track
            .get()
            .map(|el| {
                ScrollAffordance::measure(offset, el.scroll_width() as f64, el.client_width() as f64)
            })
            .unwrap_or_default()
    });

    let scroll = move |direction: Direction| {
        let Some(el) = track.get_untracked() else {
            return;
        };
        let client_width = el.client_width() as f64;
        let max = max_offset(el.scroll_width() as f64, client_width);
        set_x(scroll_target(x.get_untracked(), direction, client_width, max));
    };

    let control = move |direction: Direction| {
        let scroll = scroll.clone();
        let (label, glyph, side) = match direction {
            Direction::Left => ("Scroll skills left", "‹", "left-0"),
            Direction::Right => ("Scroll skills right", "›", "right-0"),
        };
        view! {
            <button
                type="button"
                aria-label=label
                class=format!(
                    "absolute {side} top-1/2 -translate-y-1/2 z-20 w-10 h-10 rounded-full bg-white/20 backdrop-blur-sm text-2xl hover:bg-white/30 transition duration-300",
                )
                class:hidden=move || !affordance.get().can_scroll(direction)
                disabled=move || !affordance.get().can_scroll(direction)
                on:click=move |_| scroll(direction)
            >
                {glyph}
            </button>
        }
    };

    view! {
        <section id="skills" class=SECTION_CLASS>
            <Reveal motion=Motion::fade().from_y(-20.0).duration(500)>
                <h2 class=HEADING_CLASS>"MY SKILLS"</h2>
            </Reveal>
            <div class="relative">
                {control(Direction::Left)}
                <div
                    node_ref=track
                    class="flex gap-6 overflow-x-auto scroll-smooth px-12 py-4 no-scrollbar [scrollbar-width:none]"
                >
                    {skills().iter().map(|skill| view! { <SkillCard skill=*skill /> }).collect_view()}
                </div>
                {control(Direction::Right)}
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    let failed = RwSignal::new(false);
    let img_ref = NodeRef::<html::Img>::new();

    // errors that fired before hydration never reach on:error
    Effect::new(move || {
        if let Some(img) = img_ref.get() {
            if img.complete() && img.natural_width() == 0 {
                log::debug!("logo for {} failed before hydration", skill.name);
                failed.set(true);
            }
        }
    });

    view! {
        <Reveal
            class="flex-shrink-0"
            motion=Motion::fade().from_scale(0.95).duration(500)
        >
            <div class="w-32 h-32 rounded-lg bg-white/10 backdrop-blur-sm shadow-lg flex flex-col items-center justify-center p-4 transition-transform duration-300 hover:scale-105">
                {move || {
                    if failed.get() {
                        Either::Left(
                            view! {
                                <span
                                    class="w-16 h-16 mb-2 flex items-center justify-center rounded-full bg-white/20 text-3xl font-bold"
                                    aria-hidden="true"
                                >
                                    {skill.fallback_glyph()}
                                </span>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <img
                                    node_ref=img_ref
                                    src=skill.image_url
                                    alt=format!("{} logo", skill.name)
                                    class="w-16 h-16 object-contain mb-2"
                                    on:error=move |_| {
                                        log::debug!("logo for {} failed to load", skill.name);
                                        failed.set(true);
                                    }
                                />
                            },
                        )
                    }
                }}
                <span class="text-sm font-medium text-center">{skill.name}</span>
            </div>
        </Reveal>
    }
}
