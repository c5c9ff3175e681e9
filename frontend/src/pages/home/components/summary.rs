use leptos::*;

use crate::{
    api::{EmployeeAttendanceSummary, StatsSummary, TodayStats},
    utils::time::{format_display_date, format_percentage},
};

#[component]
pub fn StatsCards(stats: Signal<Option<StatsSummary>>) -> impl IntoView {
    move || {
        stats.get().map(|stats| {
            view! {
                <div class="grid grid-cols-2 gap-4 lg:grid-cols-4">
                    <StatCard label="Total Employees" value=stats.total_employees.to_string() />
                    <StatCard label="Total Records" value=stats.total_attendance_records.to_string() />
                    <StatCard label="Total Present" value=stats.total_present.to_string() />
                    <StatCard label="Total Absent" value=stats.total_absent.to_string() />
                </div>
            }
        })
    }
}

#[component]
pub fn TodayStatsCard(today: Signal<Option<TodayStats>>) -> impl IntoView {
    move || {
        today.get().map(|today| {
            let heading = match today.date {
                Some(date) => format!("Today's Attendance ({})", format_display_date(date)),
                None => "Today's Attendance".to_string(),
            };
            view! {
                <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-1">
                    <h3 class="text-sm font-semibold uppercase tracking-wide text-fg-muted">{heading}</h3>
                    <p class="text-sm text-fg">{format!("Present: {}", today.present_today)}</p>
                    <p class="text-sm text-fg">{format!("Absent: {}", today.absent_today)}</p>
                    <p class="text-sm text-fg">
                        {format!("Attendance %: {}", format_percentage(today.attendance_percentage))}
                    </p>
                </section>
            }
        })
    }
}

/// Per-employee totals shown while the attendance filter targets one employee.
#[component]
pub fn EmployeeSummaryCard(summary: Signal<Option<EmployeeAttendanceSummary>>) -> impl IntoView {
    move || {
        summary.get().map(|summary| {
            view! {
                <div class="rounded-lg border border-border bg-surface-muted p-4">
                    <p class="text-sm font-semibold text-fg">
                        {format!("{} - {}", summary.employee_id, summary.full_name)}
                    </p>
                    <div class="mt-2 grid grid-cols-3 gap-4 text-sm">
                        <StatCard label="Total Days" value=summary.total_days.to_string() />
                        <StatCard label="Present Days" value=summary.present_days.to_string() />
                        <StatCard label="Absent Days" value=summary.absent_days.to_string() />
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn StatCard(#[prop(into)] label: String, value: String) -> impl IntoView {
    view! {
        <div class="p-6 rounded-lg bg-surface-elevated border border-border shadow-sm">
            <p class="text-xs font-bold uppercase tracking-widest text-fg-muted">{label}</p>
            <p class="mt-2 text-3xl font-extrabold text-fg">{value}</p>
        </div>
    }
}
