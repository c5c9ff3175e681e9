use leptos::*;

use crate::{
    components::layout::{ErrorMessage, SuccessMessage},
    state::messages::Flash,
};

#[component]
pub fn MessageBanners(
    error: Signal<Option<Flash>>,
    success: Signal<Option<Flash>>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {move || error.get().map(|flash| view! { <ErrorMessage message=flash.text /> })}
            {move || success.get().map(|flash| view! { <SuccessMessage message=flash.text /> })}
        </div>
    }
}
