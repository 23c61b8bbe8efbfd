use super::statistics_page::{StatisticsPage, PAGE_LIMIT};
use contracts::shared::endpoint::Endpoint;
use contracts::shared::filters::{today, FilterSet, DATE_FORMAT};
use contracts::shared::query_params::QueryParams;
use leptos::prelude::*;

/// Stocks are a snapshot: the API only accepts the current day as `dateFrom`.
fn stocks_params(filters: &FilterSet) -> QueryParams {
    let mut params = QueryParams::from_filters(filters);
    params.remove("dateTo");
    params
        .with("dateFrom", today().format(DATE_FORMAT))
        .paged(1, PAGE_LIMIT)
}

#[component]
pub fn StocksPage() -> impl IntoView {
    view! { <StatisticsPage title="Склады" endpoint=Endpoint::STOCKS build_params=stocks_params /> }
}
