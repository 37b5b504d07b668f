//! "Add New Product" dialog bound to a [`ProductForm`].

use contracts::enums::product_category::PRODUCT_CATEGORIES;
use contracts::shared::form_state::{DraftField, ProductForm};
use leptos::prelude::*;
use thaw::*;

fn input_type(field: DraftField) -> &'static str {
    match field {
        DraftField::Price | DraftField::Stock | DraftField::AmazonStock => "number",
        DraftField::Image => "url",
        _ => "text",
    }
}

#[component]
fn DraftInput(form: RwSignal<ProductForm>, field: DraftField) -> impl IntoView {
    let id = format!("product-{}", field.name());
    view! {
        <div class="form-group">
            <label for=id.clone()>{field.label()}</label>
            <input
                type=input_type(field)
                id=id
                name=field.name()
                required=field.is_required()
                step=(field == DraftField::Price).then_some("0.01")
                prop:value=move || form.with(|f| f.draft().get(field).to_string())
                on:input=move |ev| {
                    form.update(|f| f.set_field(field, event_target_value(&ev)));
                }
            />
        </div>
    }
}

#[component]
pub fn ProductFormDialog(
    form: RwSignal<ProductForm>,
    /// Dialog visibility, mirrored into the form's open flag
    open: RwSignal<bool>,
    #[prop(into)]
    error: Signal<Option<String>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Add New Product"</DialogTitle>
                    <DialogContent>
                        // Enter goes through the browser's required and url checks
                        <form
                            class="details-form"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                on_submit.run(());
                            }
                        >
                            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                            <DraftInput form=form field=DraftField::Name />
                            <DraftInput form=form field=DraftField::Sku />
                            <DraftInput form=form field=DraftField::Price />
                            <DraftInput form=form field=DraftField::Stock />
                            <DraftInput form=form field=DraftField::AmazonStock />
                            <div class="form-group">
                                <label for="product-category">{DraftField::Category.label()}</label>
                                <select
                                    id="product-category"
                                    name=DraftField::Category.name()
                                    required=true
                                    prop:value=move || form.with(|f| f.draft().category.clone())
                                    on:change=move |ev| {
                                        form.update(|f| f.set_field(DraftField::Category, event_target_value(&ev)));
                                    }
                                >
                                    <option value="">"Select a category"</option>
                                    {PRODUCT_CATEGORIES.into_iter().map(|category| view! {
                                        <option value=category>{category}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <DraftInput form=form field=DraftField::Image />
                            <button type="submit" hidden=true></button>
                        </form>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_submit.run(())
                        >
                            "Add Product"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
