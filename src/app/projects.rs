use leptos::prelude::*;

use super::homepage::{HEADING_CLASS, SECTION_CLASS};
use super::links::SiteLink;
use super::reveal::Reveal;
use crate::effects::motion::Motion;
use crate::portfolio::{projects, Project};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class=SECTION_CLASS>
            <Reveal motion=Motion::fade().from_y(-20.0).duration(500)>
                <h2 class=HEADING_CLASS>"Projects"</h2>
            </Reveal>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                {projects()
                    .iter()
                    .map(|project| view! { <ProjectCard project=*project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <Reveal motion=Motion::fade().from_y(50.0).duration(500)>
            <div class="h-full bg-white/10 backdrop-blur-sm rounded-lg p-6 shadow-lg transition-transform duration-300 hover:scale-105">
                <h3 class="text-2xl font-bold mb-2">{project.title}</h3>
                <p class="mb-4 opacity-80">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <Reveal
                                    class="inline-block"
                                    motion=Motion::fade().from_scale(0.8).duration(300)
                                >
                                    <span class="bg-white/20 px-2 py-1 rounded text-sm">{*tech}</span>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <SiteLink
                    href=project.link
                    class="inline-flex items-center text-blue-400 hover:text-blue-300 transition-transform hover:scale-105 active:scale-95"
                >
                    "View Project"
                    <ExternalLinkIcon />
                </SiteLink>
            </div>
        </Reveal>
    }
}

#[component]
fn ExternalLinkIcon() -> impl IntoView {
    view! {
        <svg
            class="ml-1"
            width="16"
            height="16"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M15 3h6v6" />
            <path d="M10 14 21 3" />
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
        </svg>
    }
}
