//! Sidebar navigation. Receives the current page as data and reports clicks
//! through a callback; it never touches the router itself.

use crate::shared::icons::icon;
use contracts::shared::router::Page;
use leptos::prelude::*;

#[component]
pub fn Sidebar(
    #[prop(into)]
    current: Signal<Page>,
    on_select: Callback<Page>,
) -> impl IntoView {
    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                {icon("leaf")}
                <span>"EcoMCF"</span>
            </div>
            <nav class="app-sidebar__nav">
                {Page::ALL.into_iter().map(|page| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || current.get() == page
                            on:click=move |_| on_select.run(page)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(page.icon())}
                                <span>{page.label()}</span>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}
