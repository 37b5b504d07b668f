use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter panel with an active-filter badge
#[component]
pub fn FilterPanel(
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    #[prop(optional, into)]
    title: Option<String>,

    /// Filter content (form fields)
    #[prop(into)]
    filter_content: ViewFn,

    /// Active filter chips, shown even while the panel is collapsed
    #[prop(optional, into)]
    filter_tags: Option<ViewFn>,

    /// Resets every filter; the button shows only while filters are active
    #[prop(optional, into)]
    on_clear: Option<Callback<()>>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Filters".to_string());
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class=move || {
                            if is_expanded.get() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        }
                    >
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                    {icon("filter")}
                    <span class="filter-panel__title">{title}</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                {on_clear.map(|clear| view! {
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <button
                            class="filter-panel__clear"
                            on:click=move |_| clear.run(())
                        >
                            "Clear all"
                        </button>
                    </Show>
                })}
            </div>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">
                    {filter_content.run()}
                </div>
            </Show>
            {filter_tags.map(|tags| view! {
                <div class="filter-panel__tags">{tags.run()}</div>
            })}
        </div>
    }
}

/// Individual filter tag/chip
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
