//! Settings page: MCF credentials, warehouse address and notification toggles.
//!
//! Saving has no effect on the data model. It logs the settings with secrets
//! masked and shows a success banner for a configured time.

use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageTitle;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::shared::error::FormError;
use contracts::shared::router::Page;
use contracts::system::settings::{NotificationKind, SettingsState};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::*;

/// Which part of [`SettingsState`] a text field writes to
#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Mcf,
    Warehouse,
}

fn read_field(state: &SettingsState, section: Section, name: &str) -> String {
    let value = match (section, name) {
        (Section::Mcf, "sellerId") => &state.mcf.seller_id,
        (Section::Mcf, "accessKey") => &state.mcf.access_key,
        (Section::Mcf, "secretKey") => &state.mcf.secret_key,
        (Section::Warehouse, "name") => &state.warehouse.name,
        (Section::Warehouse, "address") => &state.warehouse.address,
        (Section::Warehouse, "city") => &state.warehouse.city,
        (Section::Warehouse, "state") => &state.warehouse.state,
        (Section::Warehouse, "zip") => &state.warehouse.zip,
        _ => return String::new(),
    };
    value.clone()
}

fn write_field(
    state: &mut SettingsState,
    section: Section,
    name: &str,
    value: String,
) -> Result<(), FormError> {
    match section {
        Section::Mcf => state.set_mcf_field(name, value),
        Section::Warehouse => state.set_warehouse_field(name, value),
    }
}

#[component]
fn SettingsInput(
    settings: RwSignal<SettingsState>,
    section: Section,
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)]
    secret: bool,
) -> impl IntoView {
    let id = format!("settings-{}", name);
    let input_type = if secret { "password" } else { "text" };
    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <input
                type=input_type
                id=id
                name=name
                placeholder=placeholder
                prop:value=move || settings.with(|s| read_field(s, section, name))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    settings.update(|s| {
                        if let Err(e) = write_field(s, section, name, value) {
                            log::warn!("settings: {}", e);
                        }
                    });
                }
            />
        </div>
    }
}

#[component]
fn NotificationToggle(settings: RwSignal<SettingsState>, kind: NotificationKind) -> impl IntoView {
    view! {
        <div class="settings-toggle">
            <div class="settings-toggle__text">
                <div class="settings-toggle__title">{kind.title()}</div>
                <div class="settings-toggle__description">{kind.description()}</div>
            </div>
            <label class="toggle">
                <input
                    type="checkbox"
                    name=kind.key()
                    prop:checked=move || settings.with(|s| s.notification(kind))
                    on:change=move |_| {
                        settings.update(|s| {
                            s.toggle_notification(kind);
                        });
                    }
                />
                <span class="toggle__slider"></span>
            </label>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_app_context();
    let banner_ms = ctx.config.with_value(|c| c.settings.success_banner_ms);

    let settings = RwSignal::new(SettingsState::default());
    let saved = RwSignal::new(false);
    // Timeout holds a JS closure, so it lives in local storage
    let banner_timer = StoredValue::new_local(None::<Timeout>);

    on_cleanup(move || {
        // Dropping the pending timeout cancels it
        banner_timer.try_update_value(|t| t.take());
    });

    let save = move |_| {
        let snapshot = settings.with_untracked(|s| s.redacted());
        match serde_json::to_string(&snapshot) {
            Ok(json) => log::info!("Settings saved: {}", json),
            Err(e) => log::error!("Failed to serialize settings: {}", e),
        }

        saved.set(true);
        let timeout = Timeout::new(banner_ms, move || saved.set(false));
        // Replacing the previous timeout cancels it, so the banner restarts
        banner_timer.set_value(Some(timeout));
    };

    view! {
        <PageFrame page_id="settings--system" category=PAGE_CAT_SYSTEM>
            <PageTitle page=Page::Settings />

            <div class="page__content settings">
                <div class="details-section">
                    <h2 class="details-section__title">"Amazon MCF Credentials"</h2>
                    <div class="details-form">
                        <SettingsInput settings=settings section=Section::Mcf name="sellerId"
                            label="Seller ID" placeholder="Enter your Amazon Seller ID" />
                        <SettingsInput settings=settings section=Section::Mcf name="accessKey"
                            label="Access Key" placeholder="Enter your Access Key" secret=true />
                        <SettingsInput settings=settings section=Section::Mcf name="secretKey"
                            label="Secret Key" placeholder="Enter your Secret Key" secret=true />
                    </div>
                </div>

                <div class="details-section">
                    <h2 class="details-section__title">"Warehouse Information"</h2>
                    <div class="details-form">
                        <SettingsInput settings=settings section=Section::Warehouse name="name"
                            label="Warehouse Name" placeholder="Enter warehouse name" />
                        <SettingsInput settings=settings section=Section::Warehouse name="address"
                            label="Address" placeholder="Enter street address" />
                        <div class="form-row">
                            <SettingsInput settings=settings section=Section::Warehouse name="city"
                                label="City" placeholder="Enter city" />
                            <SettingsInput settings=settings section=Section::Warehouse name="state"
                                label="State" placeholder="Enter state" />
                        </div>
                        <SettingsInput settings=settings section=Section::Warehouse name="zip"
                            label="ZIP Code" placeholder="Enter ZIP code" />
                    </div>
                </div>

                <div class="details-section">
                    <h2 class="details-section__title">"Notification Settings"</h2>
                    {NotificationKind::ALL.into_iter().map(|kind| view! {
                        <NotificationToggle settings=settings kind=kind />
                    }).collect_view()}
                </div>

                <div class="settings__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=save>
                        {icon("save")}
                        " Save Settings"
                    </Button>
                    <Show when=move || saved.get()>
                        <div class="alert alert--success">
                            {icon("check-circle")}
                            <span>"Settings saved successfully"</span>
                        </div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_access_by_section() {
        let mut state = SettingsState::default();
        write_field(&mut state, Section::Warehouse, "city", "Portland".into()).unwrap();
        assert_eq!(read_field(&state, Section::Warehouse, "city"), "Portland");
        assert_eq!(read_field(&state, Section::Mcf, "sellerId"), "");
        assert_eq!(read_field(&state, Section::Mcf, "city"), "");
    }

    #[test]
    fn test_write_to_wrong_section_fails() {
        let mut state = SettingsState::default();
        assert!(write_field(&mut state, Section::Mcf, "zip", "97201".into()).is_err());
        assert!(state.warehouse.zip.is_empty());
    }
}
