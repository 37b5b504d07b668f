pub mod state;

use self::state::create_state;
use super::details::ProductFormDialog;
use crate::layout::global_context::use_app_context;
use crate::shared::components::badge::Badge;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::page_header::PageTitle;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_product::Product;
use contracts::enums::product_category::{category_filter_options, ALL_CATEGORIES};
use contracts::shared::filter::{apply_filter, FilterCriteria};
use contracts::shared::form_state::ProductForm;
use contracts::shared::router::Page;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductList() -> impl IntoView {
    let ctx = use_app_context();
    let (threshold, policy) = ctx.config.with_value(|c| {
        (c.inventory.low_stock_threshold, c.forms.numeric_policy)
    });

    let state = create_state();
    let filters_expanded = RwSignal::new(false);

    let form = RwSignal::new(ProductForm::new(policy));
    let dialog_open = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    // The dialog can also be dismissed from its backdrop; keep the form flag in step.
    Effect::new(move |_| {
        let open = dialog_open.get();
        form.update(|f| if open { f.open() } else { f.close() });
    });

    let filtered = Memo::new(move |_| {
        let criteria = state.with(|s| s.filter.clone());
        ctx.catalog.with(|catalog| apply_filter(catalog.items(), &criteria))
    });
    let active_filters_count = Signal::derive(move || state.with(|s| s.filter.active_count()));
    let search_term = Signal::derive(move || state.with(|s| s.filter.search.clone()));
    let low_stock = Memo::new(move |_| ctx.catalog.with(|c| c.low_stock_count(threshold)));

    let submit = Callback::new(move |_: ()| {
        let mut result = None;
        ctx.catalog.update(|catalog| {
            result = Some(form.try_update(|f| f.submit(catalog)));
        });
        match result.flatten() {
            Some(Ok(submission)) => {
                log!("Added product {}", submission.product.id);
                form_error.set(None);
                notice.set((!submission.warnings.is_empty()).then(|| {
                    submission
                        .warnings
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("; ")
                }));
                dialog_open.set(false);
            }
            Some(Err(e)) => form_error.set(Some(e.to_string())),
            None => {}
        }
    });

    let open_dialog = move |_| {
        form_error.set(None);
        dialog_open.set(true);
    };

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <PageTitle page=Page::Inventory>
                <Button appearance=ButtonAppearance::Primary on_click=open_dialog>
                    {icon("plus")}
                    " Add Product"
                </Button>
            </PageTitle>

            <div class="page__content">
                <div class="list-toolbar">
                    <SearchInput
                        value=search_term
                        on_change=Callback::new(move |term: String| state.update(|s| s.set_search(term)))
                        placeholder="Search products..."
                    />
                    <Show when=move || { low_stock.get() > 0 }>
                        <Badge variant="warning".to_string()>
                            {icon("alert-triangle")}
                            {move || format!(" {} low stock", low_stock.get())}
                        </Badge>
                    </Show>
                </div>

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=active_filters_count
                    title="Filter by Category"
                    on_clear=Callback::new(move |_| state.update(|s| s.clear_filters()))
                    filter_content=move || view! {
                        <div class="filter-chips">
                            {category_filter_options().into_iter().map(|label| view! {
                                <button
                                    class="filter-chip"
                                    class:filter-chip--active=move || {
                                        state.with(|s| s.filter.category.category_label() == label)
                                    }
                                    on:click=move |_| state.update(|s| s.select_category(label))
                                >
                                    {label}
                                </button>
                            }).collect_view()}
                        </div>
                    }
                    filter_tags=move || view! {
                        {move || {
                            let label = state.with(|s| s.filter.category.category_label().to_string());
                            (label != ALL_CATEGORIES).then(|| view! {
                                <FilterTag
                                    label=label
                                    on_remove=Callback::new(move |_| state.update(|s| s.select_category(ALL_CATEGORIES)))
                                />
                            })
                        }}
                    }
                />

                {move || notice.get().map(|n| view! {
                    <div class="alert alert--warning">{n}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Product"</TableHeaderCell>
                                <TableHeaderCell>"SKU"</TableHeaderCell>
                                <TableHeaderCell>"Price"</TableHeaderCell>
                                <TableHeaderCell>"Stock"</TableHeaderCell>
                                <TableHeaderCell>"Amazon MCF"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || filtered.get()
                                key=|product: &Product| product.id.clone()
                                children=move |product: Product| {
                                    let stock_variant = if product.is_low_stock(threshold) { "error" } else { "success" };
                                    let name = product.name.clone();
                                    let sku = product.sku.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <div class="product-cell">
                                                    <img class="product-cell__image" src=product.image.clone() alt=product.name.clone() />
                                                    <span class="product-cell__name">
                                                        {move || highlight_matches(&name, &search_term.get())}
                                                    </span>
                                                </div>
                                            </TableCell>
                                            <TableCell>
                                                {move || highlight_matches(&sku, &search_term.get())}
                                            </TableCell>
                                            <TableCell>{format_money(product.price, "$")}</TableCell>
                                            <TableCell>
                                                <Badge variant=stock_variant.to_string()>
                                                    {product.stock}
                                                </Badge>
                                            </TableCell>
                                            <TableCell>{product.amazon_stock}</TableCell>
                                            <TableCell>
                                                <Badge>{product.category.clone()}</Badge>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || filtered.with(|rows| rows.is_empty())>
                        <div class="table-empty">"No products match the current filters"</div>
                    </Show>
                </div>
            </div>

            <ProductFormDialog
                form=form
                open=dialog_open
                error=form_error
                on_submit=submit
            />
        </PageFrame>
    }
}
