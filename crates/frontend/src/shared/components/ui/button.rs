use leptos::prelude::*;

/// Form action button (primary, secondary, danger)
#[component]
pub fn Button(
    /// DOM id; the page's buttons are addressed by id
    #[prop(into)]
    id: String,
    /// Button variant: "primary" (default), "secondary", or "danger"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "danger" => "button--danger",
        _ => "button--primary",
    };

    view! {
        <button
            id=id
            type="button"
            class=move || format!("button {}", variant_class())
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
