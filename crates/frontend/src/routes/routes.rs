use crate::domain::a001_shopcart::ui::form::ShopcartForm;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="page">
                <Routes fallback=|| view! { <div class="page">{"Page not found"}</div> }>
                    <Route path=path!("/") view=ShopcartForm />
                </Routes>
            </main>
        </Router>
    }
}
