use crate::shared::components::fetch_status::FetchStatus;
use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::rows_table::RowsTable;
use crate::shared::filters_store::use_filters_store;
use crate::shared::payload::extract_rows;
use crate::shared::use_api::use_api;
use contracts::shared::endpoint::Endpoint;
use contracts::shared::filters::FilterSet;
use contracts::shared::query_params::QueryParams;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Rows requested per page from the list endpoints.
pub const PAGE_LIMIT: u32 = 500;

/// Default request parameters: the shared filters plus the first page.
pub fn filter_params(filters: &FilterSet) -> QueryParams {
    QueryParams::from_filters(filters).paged(1, PAGE_LIMIT)
}

/// List page for one statistics endpoint.
///
/// Re-fetches whenever the filters that `build_params` reads change.
#[component]
pub fn StatisticsPage(
    #[prop(into)] title: String,
    endpoint: Endpoint,
    /// Turns the current filters into request parameters
    build_params: fn(&FilterSet) -> QueryParams,
) -> impl IntoView {
    let filters = use_filters_store();
    filters.ensure_date_range();

    let api = use_api::<serde_json::Value>(endpoint);

    Effect::new(move |_| {
        let params = filters.with_filters(build_params);
        spawn_local(async move {
            api.fetch_data(params).await;
        });
    });

    let data = api.data();
    let rows = move || data.get().map(|payload| extract_rows(&payload));

    view! {
        <div class="statistics-page">
            <PageHeader title=title>
                <FilterBar />
            </PageHeader>
            <FetchStatus loading=api.loading() error=api.error() />
            {move || rows().map(|rows| view! { <RowsTable rows=rows /> })}
        </div>
    }
}
