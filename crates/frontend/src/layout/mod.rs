pub mod navbar;

use leptos::prelude::*;
use navbar::Navbar;

/// Application shell: navigation on the left, routed page in the center.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <aside class="app-shell__left">
                <Navbar />
            </aside>
            <main class="app-shell__center">{children()}</main>
        </div>
    }
}
