use crate::shared::filters_store::use_filters_store;
use contracts::enums::compare_period::ComparePeriod;
use contracts::shared::filters::FilterPatch;
use leptos::prelude::*;
use thaw::*;

const INPUT_STYLE: &str = "padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff;";

/// Text filter bound to one field of the shared filters.
#[component]
fn FilterInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: impl Fn(String) + Send + 'static,
) -> impl IntoView {
    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <Label>{label}</Label>
            <input
                type="text"
                prop:value=value
                on:change=move |ev| on_change(event_target_value(&ev))
                style=INPUT_STYLE
            />
        </Flex>
    }
}

/// Period, comparison granularity and attribute filters shared by every
/// statistics page. Edits go straight into the global filters.
#[component]
pub fn FilterBar() -> impl IntoView {
    let filters = use_filters_store();

    let date_from = Signal::derive(move || filters.with_filters(|f| f.date_from.clone()));
    let date_to = Signal::derive(move || filters.with_filters(|f| f.date_to.clone()));
    let brand = Signal::derive(move || filters.with_filters(|f| f.brand.clone()));
    let category = Signal::derive(move || filters.with_filters(|f| f.category.clone()));
    let oblast = Signal::derive(move || filters.with_filters(|f| f.oblast.clone()));
    let compare_period =
        Signal::derive(move || filters.with_filters(|f| f.compare_period.code().to_string()));

    view! {
        <Flex class="filter-bar" align=FlexAlign::End gap=FlexGap::Medium>
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Период"</Label>
                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                    <input
                        type="date"
                        prop:value=date_from
                        on:input=move |ev| {
                            filters.set_filters(FilterPatch::new().date_from(event_target_value(&ev)));
                        }
                        style=INPUT_STYLE
                    />
                    <div>"—"</div>
                    <input
                        type="date"
                        prop:value=date_to
                        on:input=move |ev| {
                            filters.set_filters(FilterPatch::new().date_to(event_target_value(&ev)));
                        }
                        style=INPUT_STYLE
                    />
                </Flex>
            </Flex>

            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Сравнение"</Label>
                <select
                    prop:value=compare_period
                    on:change=move |ev| {
                        filters.set_filters(
                            FilterPatch::new().compare_period(event_target_value(&ev)),
                        );
                    }
                    style=INPUT_STYLE
                >
                    {ComparePeriod::all()
                        .into_iter()
                        .map(|p| view! { <option value=p.code().to_string()>{p.display_name().to_string()}</option> })
                        .collect_view()}
                </select>
            </Flex>

            <FilterInput
                label="Бренд"
                value=brand
                on_change=move |v| filters.set_filters(FilterPatch::new().brand(v))
            />
            <FilterInput
                label="Категория"
                value=category
                on_change=move |v| filters.set_filters(FilterPatch::new().category(v))
            />
            <FilterInput
                label="Регион"
                value=oblast
                on_change=move |v| filters.set_filters(FilterPatch::new().oblast(v))
            />

            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| filters.reset_filters()
            >
                "Сбросить"
            </Button>
        </Flex>
    }
}
