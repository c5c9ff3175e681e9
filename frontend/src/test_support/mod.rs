#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod fake_api;
#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use chrono::NaiveDate;

    use crate::api::{AttendanceRecord, AttendanceStatus, Employee, StatsSummary, TodayStats};

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    pub fn employee(employee_id: &str, full_name: &str) -> Employee {
        Employee {
            id: format!("id-{}", employee_id.to_lowercase()),
            employee_id: employee_id.into(),
            full_name: full_name.into(),
            email: format!("{}@example.com", employee_id.to_lowercase()),
            department: "Engineering".into(),
        }
    }

    pub fn record(employee_id: &str, on: NaiveDate, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: format!("att-{}-{}", employee_id.to_lowercase(), on),
            employee_id: employee_id.into(),
            full_name: "John Doe".into(),
            date: on,
            status,
        }
    }

    pub fn stats(total_employees: u64, present: u64, absent: u64) -> StatsSummary {
        StatsSummary {
            total_employees,
            employees_with_attendance: total_employees.min(present + absent),
            total_attendance_records: present + absent,
            total_present: present,
            total_absent: absent,
        }
    }

    pub fn today_stats(present: u64, absent: u64, percentage: f64) -> TodayStats {
        TodayStats {
            date: None,
            present_today: present,
            absent_today: absent,
            attendance_marked: present + absent,
            attendance_percentage: percentage,
        }
    }
}
