use futures::join;
use log::{error, info, warn};

use super::{
    forms::{AttendanceEdit, EmployeeField, FilterField},
    messages::MessageKind,
    store::{HrStore, RequestToken, Resource, StoreEvent, Tab},
};
use crate::{api::ApiClient, utils::time};

pub const FETCH_EMPLOYEES_FAILED: &str = "Failed to fetch employees";
pub const FETCH_ATTENDANCE_FAILED: &str = "Failed to fetch attendance";
pub const ADD_EMPLOYEE_FAILED: &str = "Failed to add employee";
pub const DELETE_EMPLOYEE_FAILED: &str = "Failed to delete employee";
pub const MARK_ATTENDANCE_FAILED: &str = "Failed to mark attendance";

pub const EMPLOYEE_ADDED: &str = "Employee added successfully!";
pub const EMPLOYEE_DELETED: &str = "Employee deleted successfully!";
pub const ATTENDANCE_MARKED: &str = "Attendance marked successfully!";

// Settles a failed load; only the latest request for the resource may raise a message.
fn fail_load(store: HrStore, token: RequestToken, message: &str) {
    let current = store.with(|state| state.is_current(token));
    store.dispatch(StoreEvent::RequestFailed(token));
    if current {
        store.notify_load_error(token.resource, message);
    }
}

pub async fn load_employees(api: &ApiClient, store: HrStore) -> Result<(), String> {
    let token = store.begin(Resource::Employees);
    match api.list_employees().await {
        Ok(employees) => {
            store.dispatch(StoreEvent::EmployeesLoaded(token, employees));
            Ok(())
        }
        Err(err) => {
            error!("{}: {}", FETCH_EMPLOYEES_FAILED, err);
            fail_load(store, token, FETCH_EMPLOYEES_FAILED);
            Err(FETCH_EMPLOYEES_FAILED.to_string())
        }
    }
}

/// Loads attendance for the current filter fields.
pub async fn load_attendance(api: &ApiClient, store: HrStore) -> Result<(), String> {
    let filter = match store.with(|state| state.filters.to_filter()) {
        Ok(filter) => filter,
        Err(err) => {
            let message = err.to_string();
            store.notify(MessageKind::Error, message.clone());
            return Err(message);
        }
    };
    let token = store.begin(Resource::Attendance);
    match api.list_attendance(&filter).await {
        Ok(records) => {
            store.dispatch(StoreEvent::AttendanceLoaded(token, records));
            Ok(())
        }
        Err(err) => {
            error!("{}: {}", FETCH_ATTENDANCE_FAILED, err);
            fail_load(store, token, FETCH_ATTENDANCE_FAILED);
            Err(FETCH_ATTENDANCE_FAILED.to_string())
        }
    }
}

pub async fn load_stats(api: &ApiClient, store: HrStore) -> Result<(), String> {
    let token = store.begin(Resource::Stats);
    match api.get_stats().await {
        Ok(stats) => {
            store.dispatch(StoreEvent::StatsLoaded(token, stats));
            Ok(())
        }
        Err(err) => {
            warn!("Failed to fetch stats: {}", err);
            store.dispatch(StoreEvent::RequestFailed(token));
            Err(err.to_string())
        }
    }
}

pub async fn load_today_stats(api: &ApiClient, store: HrStore) -> Result<(), String> {
    let token = store.begin(Resource::TodayStats);
    match api.get_today_stats().await {
        Ok(stats) => {
            store.dispatch(StoreEvent::TodayStatsLoaded(token, stats));
            Ok(())
        }
        Err(err) => {
            warn!("Failed to fetch today's stats: {}", err);
            store.dispatch(StoreEvent::RequestFailed(token));
            Err(err.to_string())
        }
    }
}

/// Summary for the employee selected in the filter; cleared when none is.
pub async fn load_employee_summary(api: &ApiClient, store: HrStore) -> Result<(), String> {
    let Some(employee_id) = store.with(|state| state.filters.selected_employee()) else {
        store.dispatch(StoreEvent::EmployeeSummaryCleared);
        return Ok(());
    };
    let token = store.begin(Resource::EmployeeSummary);
    match api.get_employee_summary(&employee_id).await {
        Ok(summary) => {
            store.dispatch(StoreEvent::EmployeeSummaryLoaded(token, summary));
            Ok(())
        }
        Err(err) => {
            warn!("Failed to fetch summary for {}: {}", employee_id, err);
            let current = store.with(|state| state.is_current(token));
            store.dispatch(StoreEvent::RequestFailed(token));
            if current {
                store.dispatch(StoreEvent::EmployeeSummaryCleared);
            }
            Err(err.to_string())
        }
    }
}

/// Initial page load; the four requests run concurrently.
pub async fn load_all(api: &ApiClient, store: HrStore) {
    let _ = join!(
        load_employees(api, store),
        load_attendance(api, store),
        load_stats(api, store),
        load_today_stats(api, store),
    );
}

pub async fn submit_employee(api: &ApiClient, store: HrStore) -> Result<(), String> {
    let draft = match store.with(|state| state.employee_form.to_draft()) {
        Ok(draft) => draft,
        Err(err) => {
            let message = err.to_string();
            store.notify(MessageKind::Error, message.clone());
            return Err(message);
        }
    };

    store.dispatch(StoreEvent::MutationStarted);
    let result = api.create_employee(&draft).await;
    store.dispatch(StoreEvent::MutationFinished);

    match result {
        Ok(created) => {
            info!("Created employee {}", created.employee_id);
            store.dispatch(StoreEvent::EmployeeFormReset);
            store.notify(MessageKind::Success, EMPLOYEE_ADDED);
            let _ = join!(
                load_employees(api, store),
                load_stats(api, store),
                load_today_stats(api, store),
            );
            Ok(())
        }
        Err(err) => {
            error!("{}: {}", ADD_EMPLOYEE_FAILED, err);
            let message = err.user_message(ADD_EMPLOYEE_FAILED);
            store.notify(MessageKind::Error, message.clone());
            Err(message)
        }
    }
}

/// Deletes by business key. The caller is responsible for confirming first.
pub async fn delete_employee(
    api: &ApiClient,
    store: HrStore,
    employee_id: &str,
) -> Result<(), String> {
    store.dispatch(StoreEvent::MutationStarted);
    let result = api.delete_employee(employee_id).await;
    store.dispatch(StoreEvent::MutationFinished);

    match result {
        Ok(()) => {
            info!("Deleted employee {}", employee_id);
            store.notify(MessageKind::Success, EMPLOYEE_DELETED);
            let _ = join!(
                load_employees(api, store),
                load_attendance(api, store),
                load_stats(api, store),
                load_today_stats(api, store),
            );
            Ok(())
        }
        Err(err) => {
            error!("{} {}: {}", DELETE_EMPLOYEE_FAILED, employee_id, err);
            let message = err.user_message(DELETE_EMPLOYEE_FAILED);
            store.notify(MessageKind::Error, message.clone());
            Err(message)
        }
    }
}

pub async fn submit_attendance(api: &ApiClient, store: HrStore) -> Result<(), String> {
    let draft = match store.with(|state| state.attendance_form.to_draft()) {
        Ok(draft) => draft,
        Err(err) => {
            let message = err.to_string();
            store.notify(MessageKind::Error, message.clone());
            return Err(message);
        }
    };

    store.dispatch(StoreEvent::MutationStarted);
    let result = api.create_attendance(&draft).await;
    store.dispatch(StoreEvent::MutationFinished);

    match result {
        Ok(record) => {
            info!(
                "Marked {} {} on {}",
                record.employee_id, record.status, record.date
            );
            store.dispatch(StoreEvent::AttendanceFormReset(time::today()));
            store.notify(MessageKind::Success, ATTENDANCE_MARKED);
            let _ = join!(
                load_attendance(api, store),
                load_stats(api, store),
                load_today_stats(api, store),
                load_employee_summary(api, store),
            );
            Ok(())
        }
        Err(err) => {
            error!("{}: {}", MARK_ATTENDANCE_FAILED, err);
            let message = err.user_message(MARK_ATTENDANCE_FAILED);
            store.notify(MessageKind::Error, message.clone());
            Err(message)
        }
    }
}

pub fn edit_employee_field(store: HrStore, field: EmployeeField, value: String) {
    store.dispatch(StoreEvent::EmployeeFormEdited(field, value));
}

pub fn edit_attendance_form(store: HrStore, edit: AttendanceEdit) {
    store.dispatch(StoreEvent::AttendanceFormEdited(edit));
}

/// Updates one filter field without reloading.
pub fn change_filter(store: HrStore, field: FilterField, value: String) {
    store.dispatch(StoreEvent::FilterEdited(field, value));
}

pub async fn apply_filters(api: &ApiClient, store: HrStore) {
    let _ = join!(load_attendance(api, store), load_employee_summary(api, store));
}

pub async fn clear_filters(api: &ApiClient, store: HrStore) {
    store.dispatch(StoreEvent::FiltersCleared);
    apply_filters(api, store).await;
}

pub fn select_tab(store: HrStore, tab: Tab) {
    store.dispatch(StoreEvent::TabSelected(tab));
}
