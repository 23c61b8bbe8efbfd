use super::statistics_page::{filter_params, PAGE_LIMIT};
use crate::shared::components::fetch_status::FetchStatus;
use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{CardFormat, StatCard};
use crate::shared::filters_store::use_filters_store;
use crate::shared::payload::{extract_rows, sum_field};
use crate::shared::use_api::{use_api, UseApi};
use contracts::shared::endpoint::Endpoint;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Summary over orders and sales for the selected period.
#[component]
pub fn HomePage() -> impl IntoView {
    let filters = use_filters_store();
    filters.ensure_date_range();

    let orders = use_api::<serde_json::Value>(Endpoint::ORDERS);
    let sales = use_api::<serde_json::Value>(Endpoint::SALES);

    Effect::new(move |_| {
        let params = filters.with_filters(filter_params);
        for api in [orders, sales] {
            let params = params.clone();
            spawn_local(async move {
                api.fetch_data(params).await;
            });
        }
    });

    let loading = Signal::derive({
        let (orders_loading, sales_loading) = (orders.loading(), sales.loading());
        move || orders_loading.get() || sales_loading.get()
    });
    let error = Signal::derive({
        let (orders_error, sales_error) = (orders.error(), sales.error());
        move || orders_error.get().or_else(|| sales_error.get())
    });

    view! {
        <div class="home-page">
            <PageHeader title="Сводка">
                <FilterBar />
            </PageHeader>
            <FetchStatus loading=loading error=error />
            <div class="stat-cards">
                <StatCard label=first_page_label("Заказов") value=row_count(orders) format=CardFormat::Integer href="/orders" />
                <StatCard label=first_page_label("Сумма заказов") value=field_total(orders, "total_price") format=CardFormat::Money href="/orders" />
                <StatCard label=first_page_label("Продаж") value=row_count(sales) format=CardFormat::Integer href="/sales" />
                <StatCard label=first_page_label("Сумма продаж") value=field_total(sales, "for_pay") format=CardFormat::Money href="/sales" />
            </div>
        </div>
    }
}

/// Cards are computed from the first page only (`page=1`, `limit=PAGE_LIMIT`).
pub fn first_page_label(title: &str) -> String {
    format!("{} (первые {} строк)", title, PAGE_LIMIT)
}

fn row_count(api: UseApi<serde_json::Value>) -> Signal<Option<f64>> {
    let data = api.data();
    Signal::derive(move || data.get().map(|payload| extract_rows(&payload).len() as f64))
}

fn field_total(api: UseApi<serde_json::Value>, field: &'static str) -> Signal<Option<f64>> {
    let data = api.data();
    Signal::derive(move || data.get().map(|payload| sum_field(&extract_rows(&payload), field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_label_names_the_page_size() {
        assert_eq!(first_page_label("Заказов"), "Заказов (первые 500 строк)");
    }
}
