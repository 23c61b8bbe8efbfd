use super::statistics_page::filter_params;
use crate::shared::components::fetch_status::FetchStatus;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::rows_table::RowsTable;
use crate::shared::filters_store::use_filters_store;
use crate::shared::payload::{extract_rows, filter_rows};
use crate::shared::use_api::UseApi;
use contracts::shared::endpoint::Endpoint;
use contracts::shared::fetch_state::SettlePolicy;
use contracts::shared::filters::{FilterPatch, FilterSet};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Product id to show: `nm_id` first, then the `nmId` slot.
pub fn selected_nm_id(filters: &FilterSet) -> String {
    if filters.nm_id.is_empty() {
        filters.nm_id_compat.clone()
    } else {
        filters.nm_id.clone()
    }
}

/// Orders of one product over the selected period.
#[component]
pub fn DetailsPage() -> impl IntoView {
    let filters = use_filters_store();
    filters.ensure_date_range();

    // Quick filter edits overlap in-flight requests; keep only the newest.
    let orders = UseApi::<serde_json::Value>::with_policy(Endpoint::ORDERS, SettlePolicy::LatestOnly);

    Effect::new(move |_| {
        let params = filters.with_filters(filter_params);
        spawn_local(async move {
            orders.fetch_data(params).await;
        });
    });

    let nm_id = Signal::derive(move || filters.with_filters(selected_nm_id));
    let data = orders.data();
    let rows = move || {
        data.get()
            .map(|payload| filter_rows(extract_rows(&payload), "nm_id", &nm_id.get()))
    };

    view! {
        <div class="details-page">
            <PageHeader title="Детализация по товару">
                <input
                    type="text"
                    placeholder="Артикул WB (nm_id)"
                    prop:value=nm_id
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.set_filters(FilterPatch::new().nm_id(value.clone()).nm_id_compat(value));
                    }
                />
            </PageHeader>
            <FetchStatus loading=orders.loading() error=orders.error() />
            {move || rows().map(|rows| view! { <RowsTable rows=rows /> })}
        </div>
    }
}
