use leptos::{ev::SubmitEvent, *};

use super::summary::EmployeeSummaryCard;
use crate::{
    api::{AttendanceRecord, AttendanceStatus, Employee, EmployeeAttendanceSummary},
    components::{
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        layout::LoadingSpinner,
    },
    state::forms::{AttendanceEdit, AttendanceForm, FilterField, FilterState},
    utils::time::format_display_date,
};

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-border px-3 py-2 text-sm";

#[component]
fn EmployeeOptions(employees: Signal<Vec<Employee>>, selected: Signal<String>) -> impl IntoView {
    view! {
        <For
            each=move || employees.get()
            key=|employee| employee.id.clone()
            children=move |employee: Employee| {
                let value = employee.employee_id.clone();
                let is_selected = move || selected.with(|current| *current == value);
                view! {
                    <option value=employee.employee_id.clone() selected=is_selected>
                        {format!("{} - {}", employee.employee_id, employee.full_name)}
                    </option>
                }
            }
        />
    }
}

#[component]
pub fn AttendanceFormSection(
    form: Signal<AttendanceForm>,
    employees: Signal<Vec<Employee>>,
    loading: Signal<bool>,
    on_edit: Callback<AttendanceEdit>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let selected_employee = Signal::derive(move || form.with(|f| f.employee_id.clone()));

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Mark Attendance"</h2>
            <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
                    <div>
                        <label for="attendance-employee" class="block text-sm font-medium text-fg">"Employee *"</label>
                        <select
                            id="attendance-employee"
                            required=true
                            class=INPUT_CLASS
                            on:change=move |ev| on_edit.call(AttendanceEdit::Employee(event_target_value(&ev)))
                        >
                            <option value="" selected=move || selected_employee.with(String::is_empty)>
                                "Select Employee"
                            </option>
                            <EmployeeOptions employees=employees selected=selected_employee />
                        </select>
                    </div>
                    <div>
                        <label for="attendance-date" class="block text-sm font-medium text-fg">"Date *"</label>
                        <input
                            id="attendance-date"
                            type="date"
                            required=true
                            class=INPUT_CLASS
                            prop:value=move || form.with(|f| f.date.clone())
                            on:input=move |ev| on_edit.call(AttendanceEdit::Date(event_target_value(&ev)))
                        />
                    </div>
                    <div>
                        <label for="attendance-status" class="block text-sm font-medium text-fg">"Status *"</label>
                        <select
                            id="attendance-status"
                            required=true
                            class=INPUT_CLASS
                            on:change=move |ev| {
                                if let Some(status) = AttendanceStatus::parse(&event_target_value(&ev)) {
                                    on_edit.call(AttendanceEdit::Status(status));
                                }
                            }
                        >
                            {AttendanceStatus::ALL
                                .into_iter()
                                .map(|status| {
                                    view! {
                                        <option
                                            value=status.as_str()
                                            selected=move || form.with(|f| f.status == status)
                                        >
                                            {status.as_str()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>
                <Button button_type="submit" loading=loading>
                    {move || if loading.get() { "Marking..." } else { "Mark Attendance" }}
                </Button>
            </form>
        </section>
    }
}

#[component]
pub fn AttendanceFilterSection(
    filters: Signal<FilterState>,
    employees: Signal<Vec<Employee>>,
    summary: Signal<Option<EmployeeAttendanceSummary>>,
    on_change: Callback<(FilterField, String)>,
    on_apply: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let selected_employee = Signal::derive(move || filters.with(|f| f.employee_id.clone()));

    view! {
        <div class="rounded-lg bg-surface-muted p-4 space-y-4">
            <h3 class="text-sm font-semibold text-fg">"Filters"</h3>
            <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                <div>
                    <label for="filter-employee" class="block text-sm font-medium text-fg">"Employee"</label>
                    <select
                        id="filter-employee"
                        name="employee_id"
                        class=INPUT_CLASS
                        on:change=move |ev| on_change.call((FilterField::EmployeeId, event_target_value(&ev)))
                    >
                        <option value="" selected=move || selected_employee.with(String::is_empty)>
                            "All Employees"
                        </option>
                        <EmployeeOptions employees=employees selected=selected_employee />
                    </select>
                </div>
                <div>
                    <label for="filter-date" class="block text-sm font-medium text-fg">"Date"</label>
                    <input
                        id="filter-date"
                        type="date"
                        name="date"
                        class=INPUT_CLASS
                        prop:value=move || filters.with(|f| f.date.clone())
                        on:input=move |ev| on_change.call((FilterField::Date, event_target_value(&ev)))
                    />
                </div>
            </div>
            <div class="flex gap-4">
                <Button on_click=on_apply>"Apply Filters"</Button>
                <Button variant=ButtonVariant::Secondary on_click=on_clear>"Clear Filters"</Button>
            </div>
            <EmployeeSummaryCard summary=summary />
        </div>
    }
}

#[component]
pub fn StatusBadge(status: AttendanceStatus) -> impl IntoView {
    let class = match status {
        AttendanceStatus::Present => "bg-status-success-bg text-status-success-text",
        AttendanceStatus::Absent => "bg-status-error-bg text-status-error-text",
    };
    view! {
        <span class=format!("inline-flex rounded-full px-2 py-0.5 text-xs font-semibold {}", class)>
            {status.as_str()}
        </span>
    }
}

#[component]
pub fn AttendanceListSection(
    records: Signal<Vec<AttendanceRecord>>,
    loading: Signal<bool>,
) -> impl IntoView {
    let body = move || {
        if loading.get() {
            view! {
                <LoadingSpinner/>
                <p class="text-center text-sm text-fg-muted">"Loading attendance records..."</p>
            }
            .into_view()
        } else if records.with(Vec::is_empty) {
            view! {
                <EmptyState
                    title="No attendance records found"
                    description="Start marking attendance to see records here"
                />
            }
            .into_view()
        } else {
            view! {
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead class="bg-surface-muted text-left text-xs uppercase text-fg-muted">
                            <tr>
                                <th class="px-4 py-2">"Employee ID"</th>
                                <th class="px-4 py-2">"Full Name"</th>
                                <th class="px-4 py-2">"Date"</th>
                                <th class="px-4 py-2">"Status"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || records.get()
                                key=|record| record.id.clone()
                                children=move |record: AttendanceRecord| {
                                    view! {
                                        <tr>
                                            <td class="px-4 py-2 font-medium">{record.employee_id}</td>
                                            <td class="px-4 py-2">{record.full_name}</td>
                                            <td class="px-4 py-2">{format_display_date(record.date)}</td>
                                            <td class="px-4 py-2"><StatusBadge status=record.status /></td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            }
            .into_view()
        }
    };

    view! {
        <section class="space-y-4">
            {body}
        </section>
    }
}
