use crate::layout::global_context::use_app_context;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::routes::registry::render_page;
use contracts::shared::router::Page;
use leptos::prelude::*;

/// Shell with the sidebar on the left and the selected page in the centre.
///
/// The sidebar gets the current page as a read-only signal and reports
/// clicks through `on_select`; the router in the app context is the only
/// owner of the selection.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();
    let current = Memo::new(move |_| ctx.page());
    let on_select = Callback::new(move |page: Page| ctx.select_page(page.key()));

    view! {
        <Shell
            left=move || view! { <Sidebar current=current on_select=on_select /> }.into_any()
            center=move || {
                // Re-rendered only when the page changes, so page-local state
                // (filters, drafts, the settings banner timer) resets on navigation.
                view! { {move || render_page(current.get())} }.into_any()
            }
        />
    }
}
