use leptos::prelude::*;
use leptos_router::components::A;

/// Navigation entries: (route, title)
pub const NAV_ITEMS: [(&str, &str); 6] = [
    ("/home", "Сводка"),
    ("/details", "Детализация"),
    ("/incomes", "Поставки"),
    ("/orders", "Заказы"),
    ("/sales", "Продажи"),
    ("/stocks", "Склады"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <ul>
                {NAV_ITEMS
                    .into_iter()
                    .map(|(href, title)| {
                        view! {
                            <li>
                                <A href=href>{title}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
