use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn unknown_employee_name() -> String {
    "Unknown".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub id: String,
    pub employee_id: String,
    #[serde(default = "unknown_employee_name")]
    pub full_name: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceDraft {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Query for `GET /api/attendance`. `None` fields are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub employee_id: Option<String>,
    pub date: Option<NaiveDate>,
}

impl AttendanceFilter {
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(employee_id) = &self.employee_id {
            if !employee_id.trim().is_empty() {
                params.push(("employee_id", employee_id.trim().to_string()));
            }
        }
        if let Some(date) = self.date {
            params.push(("date_filter", date.format("%Y-%m-%d").to_string()));
        }
        params
    }

    pub fn is_empty(&self) -> bool {
        self.query_params().is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_employees: u64,
    #[serde(default)]
    pub employees_with_attendance: u64,
    pub total_attendance_records: u64,
    pub total_present: u64,
    pub total_absent: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TodayStats {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub present_today: u64,
    pub absent_today: u64,
    #[serde(default)]
    pub attendance_marked: u64,
    pub attendance_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeAttendanceSummary {
    pub employee_id: String,
    pub full_name: String,
    pub total_days: u64,
    pub present_days: u64,
    pub absent_days: u64,
}

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const REQUEST_FAILED: &str = "REQUEST_FAILED";
pub const UNKNOWN: &str = "UNKNOWN";

/// Failure of a single API call.
///
/// `error` is the text shown to the user. `details` keeps the raw `detail`
/// value from the server so handlers can prefer it over their own fallback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    pub status: Option<u16>,
    pub details: Option<Value>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            status: None,
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, VALIDATION_ERROR)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_code(msg, NOT_FOUND)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, REQUEST_FAILED)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, UNKNOWN)
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Builds the error for a non-success response from its status and raw body.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let details = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.detail);
        let message = details
            .as_ref()
            .and_then(detail_text)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        let error = match status {
            400 | 409 | 422 => Self::validation(message),
            404 => Self::not_found(message),
            _ => Self::request_failed(message),
        };
        Self {
            details,
            ..error.with_status(status)
        }
    }

    pub fn is_validation(&self) -> bool {
        self.code == VALIDATION_ERROR
    }

    pub fn is_not_found(&self) -> bool {
        self.code == NOT_FOUND
    }

    /// Message supplied by the server, if any.
    pub fn detail_message(&self) -> Option<String> {
        self.details.as_ref().and_then(detail_text)
    }

    pub fn user_message(&self, fallback: &str) -> String {
        self.detail_message()
            .unwrap_or_else(|| fallback.to_string())
    }
}

// `detail` is a plain string for 400/404 and a list of `{loc, msg, type}` for 422.
fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(detail_text).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        Value::Object(map) => map.get("msg").and_then(detail_text),
        _ => None,
    }
}
