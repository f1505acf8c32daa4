use leptos::prelude::*;

use crate::effects::cursor::CursorStyle;
#[cfg(feature = "hydrate")]
use crate::effects::cursor::{CursorFollower, FOLLOW_EASING};

#[cfg(feature = "hydrate")]
fn hovered_cursor(ev: &leptos::ev::MouseEvent) -> CursorStyle {
    use wasm_bindgen::JsCast;

    let Some(el) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
    else {
        return CursorStyle::Default;
    };
    window()
        .get_computed_style(&el)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("cursor").ok())
        .map(|cursor| CursorStyle::from_css(&cursor))
        .unwrap_or_default()
}

/// Ring that trails the pointer and reacts to what it hovers.
#[component]
pub fn CursorRing() -> impl IntoView {
    #[allow(unused_variables)]
    let (transform, set_transform) = signal(String::new());
    #[allow(unused_variables)]
    let (visible, set_visible) = signal(false);
    #[allow(unused_variables)]
    let (style, set_style) = signal(CursorStyle::Default);

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::{mousemove, mouseover};
        use leptos_use::{use_event_listener, use_raf_fn, use_window};

        let follower = StoredValue::new(CursorFollower::default());
        let _ = use_event_listener(use_window(), mousemove, move |ev| {
            follower.update_value(|f| f.point_at(ev.client_x() as f64, ev.client_y() as f64));
            set_visible.set(true);
        });
        let _ = use_event_listener(use_window(), mouseover, move |ev| {
            set_style.set(hovered_cursor(&ev));
        });
        let _ = use_raf_fn(move |_| {
            let moved = follower
                .try_update_value(|f| f.ease(FOLLOW_EASING))
                .unwrap_or(false);
            if moved {
                set_transform.set(follower.with_value(CursorFollower::transform));
            }
        });
    }

    view! {
        <div
            aria-hidden="true"
            class=move || {
                format!(
                    "pointer-events-none fixed top-0 left-0 z-[100] hidden md:block rounded-full border-2 transition-[width,height,background-color,opacity] duration-200 {}",
                    style.get().ring_class(),
                )
            }
            style=move || {
                format!("{}; opacity: {};", transform.get(), if visible.get() { 1 } else { 0 })
            }
        ></div>
    }
}
