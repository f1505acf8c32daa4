use leptos::prelude::*;

use crate::effects::motion::Motion;

/// Wraps children in a div that animates from `motion`'s initial state
/// into place on the first frame after mount.
#[component]
pub fn Reveal(
    #[prop(optional)] motion: Motion,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let shown = RwSignal::new(false);
    Effect::new(move || {
        request_animation_frame(move || shown.set(true));
    });

    view! {
        <div class=class style=move || motion.style(shown.get())>
            {children()}
        </div>
    }
}
