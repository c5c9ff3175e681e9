use leptos::*;

use crate::state::Tab;

#[component]
pub fn TabNav(active: Signal<Tab>, on_select: Callback<Tab>) -> impl IntoView {
    view! {
        <nav class="flex gap-2 border-b border-border" role="tablist">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let is_active = move || active.get() == tab;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            aria-selected=move || is_active().to_string()
                            class=move || {
                                if is_active() {
                                    "px-4 py-2 text-sm font-semibold border-b-2 border-action-primary-bg text-fg"
                                } else {
                                    "px-4 py-2 text-sm font-medium text-fg-muted hover:text-fg"
                                }
                            }
                            on:click=move |_| on_select.call(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
