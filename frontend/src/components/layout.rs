use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-5">
                <h1 class="text-2xl font-bold text-fg">"HRMS Lite"</h1>
                <p class="text-sm text-fg-muted">"Employee & Attendance Management System"</p>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8 space-y-6">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status" aria-live="polite">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded"
            role="alert"
        >
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded"
            role="status"
        >
            <p class="text-sm">{message}</p>
        </div>
    }
}
