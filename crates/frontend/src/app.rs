use crate::routes::routes::AppRoutes;
use crate::shared::filters_store::provide_filters_store;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The one filter store of the session, shared with every page via context.
    provide_filters_store();

    view! {
        <AppRoutes />
    }
}
