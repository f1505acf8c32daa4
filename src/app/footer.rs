use leptos::{either::EitherOf3, prelude::*};

use super::links::SiteLink;
use super::reveal::Reveal;
use crate::build_info::last_updated;
use crate::effects::motion::Motion;
use crate::portfolio::{social_links, SocialIcon};

const GITHUB_PATH: &str = "M12 2C6.477 2 2 6.484 2 12.017c0 4.425 2.865 8.18 6.839 9.504.5.092.682-.217.682-.483 0-.237-.008-.868-.013-1.703-2.782.605-3.369-1.343-3.369-1.343-.454-1.158-1.11-1.466-1.11-1.466-.908-.62.069-.608.069-.608 1.003.07 1.531 1.032 1.531 1.032.892 1.53 2.341 1.088 2.91.832.092-.647.35-1.088.636-1.338-2.22-.253-4.555-1.113-4.555-4.951 0-1.093.39-1.988 1.029-2.688-.103-.253-.446-1.272.098-2.65 0 0 .84-.27 2.75 1.026A9.564 9.564 0 0112 6.844c.85.004 1.705.115 2.504.337 1.909-1.296 2.747-1.027 2.747-1.027.546 1.379.202 2.398.1 2.651.64.7 1.028 1.595 1.028 2.688 0 3.848-2.339 4.695-4.566 4.943.359.309.678.92.678 1.855 0 1.338-.012 2.419-.012 2.747 0 .268.18.58.688.482A10.019 10.019 0 0022 12.017C22 6.484 17.522 2 12 2z";
const LINKEDIN_PATH: &str = "M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z";
const EMAIL_PATH: &str = "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z";

#[component]
fn SocialIconSvg(icon: SocialIcon) -> impl IntoView {
    match icon {
        SocialIcon::GitHub => EitherOf3::A(view! {
            <svg class="w-6 h-6" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                <path fill-rule="evenodd" d=GITHUB_PATH clip-rule="evenodd" />
            </svg>
        }),
        SocialIcon::LinkedIn => EitherOf3::B(view! {
            <svg class="w-6 h-6" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                <path fill-rule="evenodd" d=LINKEDIN_PATH clip-rule="evenodd" />
            </svg>
        }),
        SocialIcon::Email => EitherOf3::C(view! {
            <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=EMAIL_PATH />
            </svg>
        }),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="py-10 text-center bg-white/10 backdrop-blur-sm">
            <Reveal
                class="flex justify-center space-x-6 mb-6"
                motion=Motion::fade().from_y(20.0).duration(500).delay(200)
            >
                {social_links()
                    .iter()
                    .map(|link| {
                        view! {
                            <SiteLink
                                href=link.href
                                label=link.label
                                class="hover:opacity-70 transition duration-300"
                            >
                                <SocialIconSvg icon=link.icon />
                            </SiteLink>
                        }
                    })
                    .collect_view()}
            </Reveal>
            <Reveal motion=Motion::fade().from_y(20.0).duration(500).delay(400)>
                <p class="opacity-80">"Contact Me ^^"</p>
                {last_updated()
                    .map(|date| {
                        view! { <p class="mt-2 text-xs opacity-50">"Last updated " {date}</p> }
                    })}
            </Reveal>
        </footer>
    }
}
