use contracts::shared::fetch_state::FetchError;
use leptos::prelude::*;
use thaw::*;

/// Spinner while a request is in flight, error text after a failed one.
#[component]
pub fn FetchStatus(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<FetchError>>,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class="fetch-status fetch-status--loading">
                <Spinner />
                <span>"Загрузка данных..."</span>
            </div>
        </Show>
        {move || error.get().map(|err| view! {
            <div class="fetch-status fetch-status--error">
                {format!("Ошибка загрузки: {}", err)}
            </div>
        })}
    }
}
