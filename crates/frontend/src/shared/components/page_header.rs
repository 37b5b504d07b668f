use contracts::shared::router::Page;
use leptos::prelude::*;

/// Page title block with optional actions on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Children content (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}

/// Header with the title and subtitle registered for `page`
#[component]
pub fn PageTitle(page: Page, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <PageHeader title=page.title() subtitle=page.subtitle().to_string()>
            {children.map(|c| c())}
        </PageHeader>
    }
}
