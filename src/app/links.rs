use leptos::prelude::*;

use crate::portfolio::LinkAttrs;

/// Anchor whose `target`/`rel` follow from where it points.
#[component]
pub fn SiteLink(
    href: &'static str,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let LinkAttrs { target, rel } = LinkAttrs::for_href(href);
    view! {
        <a href=href target=target rel=rel class=class aria-label=label>
            {children()}
        </a>
    }
}
