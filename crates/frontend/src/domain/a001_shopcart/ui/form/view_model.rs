use super::controller::{Dispatch, FormController, Operation};
use super::state::{Field, ResultTable};
use crate::shared::config::Config;
use crate::shared::http::{self, ApiRequest};
use leptos::prelude::*;

/// ViewModel for the shopcart page
#[derive(Clone, Copy)]
pub struct ShopcartFormViewModel {
    pub controller: RwSignal<FormController>,
    api_base: StoredValue<String>,
}

impl ShopcartFormViewModel {
    pub fn new(config: &Config) -> Self {
        Self {
            controller: RwSignal::new(FormController::new(&config.controller)),
            api_base: StoredValue::new(config.api.base_url.clone()),
        }
    }

    pub fn item_support(&self) -> bool {
        self.controller.with_untracked(|c| c.item_support())
    }

    pub fn field(&self, field: Field) -> Memo<String> {
        let controller = self.controller;
        Memo::new(move |_| controller.with(|c| c.state.field(field).to_string()))
    }

    pub fn set_field(&self, field: Field, value: String) {
        self.controller.update(|c| c.state.set_field(field, value));
    }

    pub fn flash(&self) -> Memo<String> {
        let controller = self.controller;
        Memo::new(move |_| controller.with(|c| c.state.flash.clone()))
    }

    pub fn shopcart_results(&self) -> Memo<Option<ResultTable>> {
        let controller = self.controller;
        Memo::new(move |_| controller.with(|c| c.state.shopcart_results.clone()))
    }

    pub fn item_results(&self) -> Memo<Option<ResultTable>> {
        let controller = self.controller;
        Memo::new(move |_| controller.with(|c| c.state.item_results.clone()))
    }

    /// Run one button's operation; the response is applied when it arrives
    pub fn run(&self, op: Operation) {
        let mut dispatch = Dispatch::Done;
        self.controller.update(|c| dispatch = c.dispatch(op));

        let Dispatch::Request(pending) = dispatch else {
            return;
        };

        let controller = self.controller;
        let base = self.api_base.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = http::send(&base, &pending.request).await;

            let mut follow_ups = Vec::new();
            controller.update(|c| follow_ups = c.complete(&pending, outcome).follow_ups);

            for request in follow_ups {
                fire_and_forget(base.clone(), request);
            }
        });
    }
}

/// Send without waiting or reporting back to the form; the log is the only witness
fn fire_and_forget(base: String, request: ApiRequest) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = http::send(&base, &request)
            .await
            .and_then(|response| response.ensure_success());
        match result {
            Ok(()) => log::debug!("{} {} done", request.method.as_str(), request.path),
            Err(e) => log::warn!("{} {} failed: {}", request.method.as_str(), request.path, e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_typing_does_not_recompute_result_tables() {
        let owner = Owner::new();
        owner.set();

        let vm = ShopcartFormViewModel::new(&Config::default());
        let name = vm.field(Field::ShopcartName);
        let results = vm.shopcart_results();

        let runs = Arc::new(AtomicUsize::new(0));
        let table_view = {
            let runs = Arc::clone(&runs);
            Memo::new(move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                results.get().is_some()
            })
        };
        assert!(!table_view.get_untracked());
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        vm.set_field(Field::ShopcartName, "milk".into());
        assert_eq!(name.get_untracked(), "milk");
        assert!(!table_view.get_untracked());
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
