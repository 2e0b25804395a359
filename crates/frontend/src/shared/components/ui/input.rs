use leptos::prelude::*;

/// Labelled text input bound to a string signal
///
/// Uses `prop:value` so that values written by the controller (populate/clear)
/// replace whatever the user typed.
#[component]
pub fn Input(
    /// ID for the input element, also used as the field name
    #[prop(into)]
    id: String,
    /// Label text
    #[prop(into)]
    label: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
            </label>
            <input
                id=id.clone()
                name=id
                class="form__input"
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
