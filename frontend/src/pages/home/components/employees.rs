use leptos::{ev::SubmitEvent, *};

use crate::{
    api::Employee,
    components::{
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        layout::LoadingSpinner,
    },
    state::forms::{EmployeeField, EmployeeForm},
};

#[component]
pub fn EmployeeFormSection(
    form: Signal<EmployeeForm>,
    loading: Signal<bool>,
    on_input: Callback<(EmployeeField, String)>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let fields = EmployeeField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <div>
                    <label for=field.input_id() class="block text-sm font-medium text-fg">
                        {format!("{} *", field.label())}
                    </label>
                    <input
                        id=field.input_id()
                        type=field.input_type()
                        required=true
                        placeholder=field.placeholder()
                        class="mt-1 block w-full rounded-md border border-border px-3 py-2 text-sm"
                        prop:value=move || form.with(|f| f.value(field).to_string())
                        on:input=move |ev| on_input.call((field, event_target_value(&ev)))
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Add New Employee"</h2>
            <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">{fields}</div>
                <Button button_type="submit" loading=loading>
                    {move || if loading.get() { "Adding..." } else { "Add Employee" }}
                </Button>
            </form>
        </section>
    }
}

#[component]
pub fn EmployeeListSection(
    employees: Signal<Vec<Employee>>,
    loading: Signal<bool>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let body = move || {
        if loading.get() {
            view! {
                <LoadingSpinner/>
                <p class="text-center text-sm text-fg-muted">"Loading employees..."</p>
            }
            .into_view()
        } else if employees.with(Vec::is_empty) {
            view! {
                <EmptyState
                    title="No employees found"
                    description="Add your first employee to get started"
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
                                <th class="px-4 py-2">"Email"</th>
                                <th class="px-4 py-2">"Department"</th>
                                <th class="px-4 py-2">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || employees.get()
                                key=|employee| employee.id.clone()
                                children=move |employee: Employee| {
                                    let employee_id = employee.employee_id.clone();
                                    view! {
                                        <tr>
                                            <td class="px-4 py-2 font-medium">{employee.employee_id}</td>
                                            <td class="px-4 py-2">{employee.full_name}</td>
                                            <td class="px-4 py-2">{employee.email}</td>
                                            <td class="px-4 py-2">{employee.department}</td>
                                            <td class="px-4 py-2">
                                                <Button
                                                    variant=ButtonVariant::Danger
                                                    disabled=loading
                                                    on_click=Callback::new(move |_| on_delete.call(employee_id.clone()))
                                                >
                                                    "Delete"
                                                </Button>
                                            </td>
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
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Employee List"</h2>
            {body}
        </section>
    }
}
