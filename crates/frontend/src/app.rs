use crate::routes::routes::AppRoutes;
use crate::shared::config::Config;
use leptos::prelude::*;

#[component]
pub fn App(config: Config) -> impl IntoView {
    // Provide the loaded configuration to the whole app via context.
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
