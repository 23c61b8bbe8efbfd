use super::statistics_page::{filter_params, StatisticsPage};
use contracts::shared::endpoint::Endpoint;
use leptos::prelude::*;

#[component]
pub fn OrdersPage() -> impl IntoView {
    view! { <StatisticsPage title="Заказы" endpoint=Endpoint::ORDERS build_params=filter_params /> }
}
