use leptos::{ev::SubmitEvent, *};

use crate::{
    api::ApiClient,
    state::{
        commands,
        forms::{AttendanceEdit, EmployeeField, FilterField},
        HrStore, Tab,
    },
};

#[derive(Clone)]
pub struct HomeViewModel {
    pub api: ApiClient,
    pub store: HrStore,
    /// Business key awaiting delete confirmation.
    pub pending_delete: RwSignal<Option<String>>,
}

impl HomeViewModel {
    pub fn new() -> Self {
        Self::with_store(HrStore::new())
    }

    pub fn with_store(store: HrStore) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        Self {
            api,
            store,
            pending_delete: create_rw_signal(None),
        }
    }

    pub fn load_initial(&self) {
        let api = self.api.clone();
        let store = self.store;
        spawn_local(async move {
            commands::load_all(&api, store).await;
        });
    }

    pub fn on_select_tab(&self) -> impl Fn(Tab) {
        let store = self.store;
        move |tab| commands::select_tab(store, tab)
    }

    pub fn on_employee_input(&self) -> impl Fn((EmployeeField, String)) {
        let store = self.store;
        move |(field, value)| commands::edit_employee_field(store, field, value)
    }

    pub fn on_submit_employee(&self) -> impl Fn(SubmitEvent) {
        let api = self.api.clone();
        let store = self.store;
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if store.with(|state| state.loading()) {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                let _ = commands::submit_employee(&api, store).await;
            });
        }
    }

    pub fn on_request_delete(&self) -> impl Fn(String) {
        let pending_delete = self.pending_delete;
        move |employee_id| pending_delete.set(Some(employee_id))
    }

    pub fn on_confirm_delete(&self) -> impl Fn(()) {
        let api = self.api.clone();
        let store = self.store;
        let pending_delete = self.pending_delete;
        move |_| {
            let Some(employee_id) = pending_delete.get_untracked() else {
                return;
            };
            pending_delete.set(None);
            let api = api.clone();
            spawn_local(async move {
                let _ = commands::delete_employee(&api, store, &employee_id).await;
            });
        }
    }

    pub fn on_cancel_delete(&self) -> impl Fn(()) {
        let pending_delete = self.pending_delete;
        move |_| pending_delete.set(None)
    }

    pub fn on_attendance_edit(&self) -> impl Fn(AttendanceEdit) {
        let store = self.store;
        move |edit| commands::edit_attendance_form(store, edit)
    }

    pub fn on_submit_attendance(&self) -> impl Fn(SubmitEvent) {
        let api = self.api.clone();
        let store = self.store;
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if store.with(|state| state.loading()) {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                let _ = commands::submit_attendance(&api, store).await;
            });
        }
    }

    pub fn on_filter_change(&self) -> impl Fn((FilterField, String)) {
        let store = self.store;
        move |(field, value)| commands::change_filter(store, field, value)
    }

    pub fn on_apply_filters(&self) -> impl Fn(()) {
        let api = self.api.clone();
        let store = self.store;
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                commands::apply_filters(&api, store).await;
            });
        }
    }

    pub fn on_clear_filters(&self) -> impl Fn(()) {
        let api = self.api.clone();
        let store = self.store;
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                commands::clear_filters(&api, store).await;
            });
        }
    }
}

impl Default for HomeViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_home_view_model() -> HomeViewModel {
    match use_context::<HomeViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = HomeViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
