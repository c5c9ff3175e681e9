use leptos::*;

use crate::{pages::home::view_model::HomeViewModel, state::HrStore};

/// Runs `f` inside a throwaway reactive runtime.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let out = f();
    runtime.dispose();
    out
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders `view` with a home view model whose store was prepared by `seed`.
pub fn render_with_store<F, N>(seed: impl FnOnce(HrStore) + 'static, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        let store = HrStore::new();
        seed(store);
        provide_context(HomeViewModel::with_store(store));
        view()
    })
}
