use super::statistics_page::{filter_params, StatisticsPage};
use contracts::shared::endpoint::Endpoint;
use leptos::prelude::*;

#[component]
pub fn SalesPage() -> impl IntoView {
    view! { <StatisticsPage title="Продажи" endpoint=Endpoint::SALES build_params=filter_params /> }
}
