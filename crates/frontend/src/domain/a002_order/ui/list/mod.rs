pub mod state;

use self::state::create_state;
use crate::layout::global_context::use_app_context;
use crate::shared::components::badge::Badge;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::page_header::PageTitle;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_order::Order;
use contracts::enums::OrderStatus;
use contracts::shared::filter::{apply_filter, FilterCriteria, ALL_STATUSES};
use contracts::shared::router::Page;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

fn status_chips() -> Vec<(&'static str, &'static str)> {
    std::iter::once((ALL_STATUSES, "All"))
        .chain(OrderStatus::all().into_iter().map(|s| (s.code(), s.display_name())))
        .collect()
}

#[component]
pub fn OrderList() -> impl IntoView {
    let ctx = use_app_context();
    let state = create_state();
    let filters_expanded = RwSignal::new(false);
    let date_dialog_open = RwSignal::new(false);

    let filtered = Memo::new(move |_| {
        let criteria = state.with(|s| s.filter.clone());
        ctx.orders.with_value(|orders| apply_filter(orders, &criteria))
    });
    let active_filters_count = Signal::derive(move || state.with(|s| s.filter.active_count()));
    let search_term = Signal::derive(move || state.with(|s| s.filter.search.clone()));

    let open_date_dialog = move |_| date_dialog_open.set(true);

    // The range already filters while typing; "Apply" only closes the dialog.
    let apply_dates = move |_| {
        state.with_untracked(|s| {
            log!(
                "Order date range: {:?}..{:?}",
                s.filter.date_range.start,
                s.filter.date_range.end
            )
        });
        date_dialog_open.set(false);
    };

    view! {
        <PageFrame page_id="a002_order--list" category=PAGE_CAT_LIST>
            <PageTitle page=Page::Orders>
                <Button appearance=ButtonAppearance::Secondary on_click=open_date_dialog>
                    {icon("calendar")}
                    " Date Range"
                </Button>
            </PageTitle>

            <div class="page__content">
                <div class="list-toolbar">
                    <SearchInput
                        value=search_term
                        on_change=Callback::new(move |term: String| state.update(|s| s.set_search(term)))
                        placeholder="Search orders..."
                    />
                </div>

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=active_filters_count
                    title="Filter by Status"
                    on_clear=Callback::new(move |_| state.update(|s| s.clear_filters()))
                    filter_content=move || view! {
                        <div class="filter-chips">
                            {status_chips().into_iter().map(|(code, label)| view! {
                                <button
                                    class="filter-chip"
                                    class:filter-chip--active=move || {
                                        state.with(|s| s.filter.status.status_code() == code)
                                    }
                                    on:click=move |_| state.update(|s| s.select_status(code))
                                >
                                    {label}
                                </button>
                            }).collect_view()}
                        </div>
                    }
                    filter_tags=move || view! {
                        {move || {
                            let code = state.with(|s| s.filter.status.status_code());
                            OrderStatus::from_code(code).map(|status| view! {
                                <FilterTag
                                    label=status.display_name()
                                    on_remove=Callback::new(move |_| state.update(|s| s.select_status(ALL_STATUSES)))
                                />
                            })
                        }}
                        {move || {
                            let range = state.with(|s| s.filter.date_range);
                            match (range.start, range.end) {
                                (Some(start), Some(end)) => Some(view! {
                                    <FilterTag
                                        label=format!("{} - {}", format_date(start), format_date(end))
                                        on_remove=Callback::new(move |_| state.update(|s| s.clear_dates()))
                                    />
                                }),
                                _ => None,
                            }
                        }}
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Order ID"</TableHeaderCell>
                                <TableHeaderCell>"Customer"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>"Tracking"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || filtered.get()
                                key=|order: &Order| order.id.clone()
                                children=move |order: Order| {
                                    let id = order.id.to_string();
                                    let customer = order.customer_name.clone();
                                    let items_hint = format!("{} items", order.item_count());
                                    let tracking = order
                                        .tracking_number
                                        .clone()
                                        .unwrap_or_else(|| "Not available".to_string());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                {move || highlight_matches(&id, &search_term.get())}
                                            </TableCell>
                                            <TableCell>
                                                {move || highlight_matches(&customer, &search_term.get())}
                                            </TableCell>
                                            <TableCell>
                                                <Badge variant=order.status.badge_modifier().to_string()>
                                                    {order.status.display_name()}
                                                </Badge>
                                            </TableCell>
                                            <TableCell>
                                                <div>{format_money(order.total, "$")}</div>
                                                <div class="table-cell__hint">{items_hint}</div>
                                            </TableCell>
                                            <TableCell>{format_date(order.date)}</TableCell>
                                            <TableCell>{tracking}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || filtered.with(|rows| rows.is_empty())>
                        <div class="table-empty">"No orders match the current filters"</div>
                    </Show>
                </div>
            </div>

            <Dialog open=date_dialog_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Select Date Range"</DialogTitle>
                        <DialogContent>
                            <div class="details-form">
                                <div class="form-group">
                                    <label for="orders-start-date">"Start Date"</label>
                                    <input
                                        type="date"
                                        id="orders-start-date"
                                        prop:value=move || state.with(|s| s.start_input.clone())
                                        on:input=move |ev| state.update(|s| s.set_start_input(event_target_value(&ev)))
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="orders-end-date">"End Date"</label>
                                    <input
                                        type="date"
                                        id="orders-end-date"
                                        prop:value=move || state.with(|s| s.end_input.clone())
                                        on:input=move |ev| state.update(|s| s.set_end_input(event_target_value(&ev)))
                                    />
                                </div>
                            </div>
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| date_dialog_open.set(false)
                            >
                                "Cancel"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=apply_dates>
                                "Apply"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_chips_start_with_all() {
        let chips = status_chips();
        assert_eq!(chips.len(), 5);
        assert_eq!(chips[0], (ALL_STATUSES, "All"));
        assert_eq!(chips[2], ("processing", "Processing"));
    }
}
