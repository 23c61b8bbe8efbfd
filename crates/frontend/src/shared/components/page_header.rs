use crate::shared::date_utils::format_range;
use crate::shared::filters_store::use_filters_store;
use leptos::prelude::*;

/// Page title with the active period underneath and an actions slot.
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Children content (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    let filters = use_filters_store();
    let period = move || filters.with_filters(|f| format_range(&f.date_from, &f.date_to));

    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    <div class="page-header__subtitle">{period}</div>
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
