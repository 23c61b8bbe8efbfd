use crate::layout::Shell;
use crate::pages::details::DetailsPage;
use crate::pages::home::HomePage;
use crate::pages::incomes::IncomesPage;
use crate::pages::orders::OrdersPage;
use crate::pages::sales::SalesPage;
use crate::pages::stocks::StocksPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

/// URL path -> page. The router never touches the filters or the API.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <div class="not-found">"Страница не найдена"</div> }>
                    <Route path=path!("/home") view=HomePage />
                    <Route path=path!("/details") view=DetailsPage />
                    <Route path=path!("/incomes") view=IncomesPage />
                    <Route path=path!("/orders") view=OrdersPage />
                    <Route path=path!("/sales") view=SalesPage />
                    <Route path=path!("/stocks") view=StocksPage />
                    <Route path=path!("/") view=|| view! { <Redirect path="/home" /> } />
                </Routes>
            </Shell>
        </Router>
    }
}
