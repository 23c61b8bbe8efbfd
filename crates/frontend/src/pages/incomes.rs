use super::statistics_page::{filter_params, StatisticsPage};
use contracts::shared::endpoint::Endpoint;
use leptos::prelude::*;

#[component]
pub fn IncomesPage() -> impl IntoView {
    view! { <StatisticsPage title="Поставки" endpoint=Endpoint::INCOMES build_params=filter_params /> }
}
