use leptos::ev::KeyboardEvent;
use leptos::*;

const CONFIRM_CLASS: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50";

fn label_or(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

/// Modal asking the user to confirm an action. Escape, the backdrop and
/// the close button all cancel.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_class = format!(
        "{} {}",
        CONFIRM_CLASS,
        if destructive {
            "bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
        } else {
            "bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
        }
    );
    let title = Signal::derive(move || title.get());
    let message = Signal::derive(move || message.get());
    let confirm_label = Signal::derive(move || label_or(confirm_label.get(), "Confirm"));
    let cancel_label = Signal::derive(move || label_or(cancel_label.get(), "Cancel"));
    let confirm_disabled = Signal::derive(move || confirm_disabled.get());
    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.call(());
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=on_keydown
                >
                    <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                    <p class="text-sm text-fg-muted">{move || message.get()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| on_cancel.call(())
                        >
                            {move || cancel_label.get()}
                        </button>
                        <button
                            type="button"
                            class=confirm_class.clone()
                            disabled=move || confirm_disabled.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || confirm_label.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
