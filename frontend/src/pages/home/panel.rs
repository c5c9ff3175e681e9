use leptos::*;

use crate::{
    components::{confirm_dialog::ConfirmDialog, layout::Layout},
    pages::home::{
        components::{
            AttendanceFilterSection, AttendanceFormSection, AttendanceListSection,
            EmployeeFormSection, EmployeeListSection, MessageBanners, StatsCards, TabNav,
            TodayStatsCard,
        },
        view_model::use_home_view_model,
    },
    state::{messages::MessageKind, Tab},
};

#[component]
pub fn HomePage() -> impl IntoView {
    let vm = use_home_view_model();
    {
        let vm = vm.clone();
        create_effect(move |ran: Option<()>| {
            if ran.is_none() {
                vm.load_initial();
            }
        });
    }

    let state = vm.store.state();
    let loading = Signal::derive(move || state.with(|s| s.loading()));
    let employees = Signal::derive(move || state.with(|s| s.employees.clone()));
    let is_employees_tab = move || state.with(|s| s.active_tab == Tab::Employees);

    let employees_tab = {
        let vm = vm.clone();
        move || {
            view! {
                <div class="space-y-6">
                    <EmployeeFormSection
                        form=Signal::derive(move || state.with(|s| s.employee_form.clone()))
                        loading=loading
                        on_input=Callback::new(vm.on_employee_input())
                        on_submit=Callback::new(vm.on_submit_employee())
                    />
                    <EmployeeListSection
                        employees=employees
                        loading=loading
                        on_delete=Callback::new(vm.on_request_delete())
                    />
                </div>
            }
        }
    };

    let attendance_tab = {
        let vm = vm.clone();
        move || {
            view! {
                <div class="space-y-6">
                    <AttendanceFormSection
                        form=Signal::derive(move || state.with(|s| s.attendance_form.clone()))
                        employees=employees
                        loading=loading
                        on_edit=Callback::new(vm.on_attendance_edit())
                        on_submit=Callback::new(vm.on_submit_attendance())
                    />
                    <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                        <h2 class="text-lg font-semibold text-fg">"Attendance Records"</h2>
                        <AttendanceFilterSection
                            filters=Signal::derive(move || state.with(|s| s.filters.clone()))
                            employees=employees
                            summary=Signal::derive(move || state.with(|s| s.employee_summary.clone()))
                            on_change=Callback::new(vm.on_filter_change())
                            on_apply=Callback::new(vm.on_apply_filters())
                            on_clear=Callback::new(vm.on_clear_filters())
                        />
                        <AttendanceListSection
                            records=Signal::derive(move || state.with(|s| s.attendance.clone()))
                            loading=loading
                        />
                    </section>
                </div>
            }
        }
    };

    let pending_delete = vm.pending_delete;

    view! {
        <Layout>
            <div class="space-y-6">
                <MessageBanners
                    error=Signal::derive(move || state.with(|s| s.message(MessageKind::Error).cloned()))
                    success=Signal::derive(move || state.with(|s| s.message(MessageKind::Success).cloned()))
                />
                <StatsCards stats=Signal::derive(move || state.with(|s| s.stats.clone())) />
                <TodayStatsCard today=Signal::derive(move || state.with(|s| s.today_stats.clone())) />
                <TabNav
                    active=Signal::derive(move || state.with(|s| s.active_tab))
                    on_select=Callback::new(vm.on_select_tab())
                />
                <Show when=is_employees_tab fallback=attendance_tab>
                    {employees_tab.clone()}
                </Show>
            </div>
            <ConfirmDialog
                is_open=Signal::derive(move || pending_delete.with(Option::is_some))
                title="Delete Employee"
                message="Are you sure you want to delete this employee?"
                confirm_label="Delete"
                destructive=true
                on_confirm=Callback::new(vm.on_confirm_delete())
                on_cancel=Callback::new(vm.on_cancel_delete())
            />
        </Layout>
    }
}
