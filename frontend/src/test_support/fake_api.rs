//! In-process stand-in for the HR backend, answering the client's requests
//! with the same status codes and `detail` bodies the real server produces.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex, MutexGuard,
};

use chrono::NaiveDate;
use percent_encoding::percent_decode_str;
use reqwest::{Method, Request};
use serde_json::{json, Value};

use crate::api::{
    register_mock, ApiClient, ApiError, AttendanceStatus, Employee, MockResponse, TestResponder,
};

#[derive(Clone)]
struct StoredAttendance {
    id: String,
    employee_id: String,
    date: NaiveDate,
    status: AttendanceStatus,
}

#[derive(Default)]
struct FakeDb {
    employees: Vec<Employee>,
    attendance: Vec<StoredAttendance>,
    next_id: u64,
    failing: Vec<(Method, String)>,
    requests: Vec<String>,
}

impl FakeDb {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", prefix, self.next_id)
    }

    fn employee(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.employee_id == employee_id)
    }

    fn attendance_json(&self, record: &StoredAttendance) -> Value {
        let full_name = self
            .employee(&record.employee_id)
            .map(|e| e.full_name.clone())
            .unwrap_or_else(|| "Unknown".to_string());
        json!({
            "id": record.id,
            "employee_id": record.employee_id,
            "full_name": full_name,
            "date": record.date.format("%Y-%m-%d").to_string(),
            "status": record.status.as_str(),
        })
    }
}

#[derive(Clone)]
pub struct FakeHrApi {
    db: Arc<Mutex<FakeDb>>,
    base: String,
    today: NaiveDate,
}

impl FakeHrApi {
    /// Starts an empty backend whose "today" is `today`.
    pub fn start(today: NaiveDate) -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(1);
        let api = Self {
            db: Arc::new(Mutex::new(FakeDb::default())),
            base: format!("http://fake-hr-{}", NEXT.fetch_add(1, Ordering::Relaxed)),
            today,
        };
        register_mock(api.base.clone(), Arc::new(api.clone()));
        api
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new_with_base_url(self.base.clone())
    }

    fn db(&self) -> MutexGuard<'_, FakeDb> {
        self.db.lock().expect("fake db lock")
    }

    pub fn seed_employee(&self, employee_id: &str, full_name: &str, department: &str) {
        let mut db = self.db();
        let id = db.next_id("emp");
        db.employees.push(Employee {
            id,
            employee_id: employee_id.into(),
            full_name: full_name.into(),
            email: format!("{}@example.com", employee_id.to_lowercase()),
            department: department.into(),
        });
    }

    pub fn seed_attendance(&self, employee_id: &str, date: NaiveDate, status: AttendanceStatus) {
        let mut db = self.db();
        let id = db.next_id("att");
        db.attendance.push(StoredAttendance {
            id,
            employee_id: employee_id.into(),
            date,
            status,
        });
    }

    /// Makes every later `method path` request answer 500.
    pub fn fail(&self, method: Method, path: &str) {
        self.db().failing.push((method, path.to_string()));
    }

    pub fn recover(&self) {
        self.db().failing.clear();
    }

    /// Requests seen so far, as `METHOD path[?query]`.
    pub fn requests(&self) -> Vec<String> {
        self.db().requests.clone()
    }

    fn route(&self, db: &mut FakeDb, method: &Method, path: &str, request: &Request) -> MockResponse {
        let segments: Vec<String> = path
            .trim_start_matches('/')
            .split('/')
            .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
            .collect();
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
        let query: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let body = request
            .body()
            .and_then(|b| b.as_bytes())
            .and_then(|b| serde_json::from_slice::<Value>(b).ok())
            .unwrap_or(Value::Null);

        match (method.as_str(), segments.as_slice()) {
            ("GET", ["api", "employees"]) => {
                MockResponse::json(200, json!(db.employees))
            }
            ("POST", ["api", "employees"]) => create_employee(db, &body),
            ("DELETE", ["api", "employees", employee_id]) => {
                let before = db.employees.len();
                db.employees.retain(|e| e.employee_id != *employee_id);
                if db.employees.len() == before {
                    not_found(employee_id)
                } else {
                    MockResponse::empty(204)
                }
            }
            ("GET", ["api", "attendance"]) => {
                let param = |key: &str| {
                    query
                        .iter()
                        .find(|(k, v)| k == key && !v.is_empty())
                        .map(|(_, v)| v.clone())
                };
                let employee_id = param("employee_id");
                let date = param("date_filter");
                let mut records: Vec<StoredAttendance> = db
                    .attendance
                    .iter()
                    .filter(|r| employee_id.as_ref().map_or(true, |e| &r.employee_id == e))
                    .filter(|r| {
                        date.as_ref()
                            .map_or(true, |d| r.date.format("%Y-%m-%d").to_string() == *d)
                    })
                    .cloned()
                    .collect();
                records.sort_by(|a, b| b.date.cmp(&a.date));
                let body: Vec<Value> = records.iter().map(|r| db.attendance_json(r)).collect();
                MockResponse::json(200, Value::Array(body))
            }
            ("POST", ["api", "attendance"]) => create_attendance(db, &body),
            ("GET", ["api", "attendance", "summary", employee_id]) => {
                let Some(employee) = db.employee(employee_id).cloned() else {
                    return not_found(employee_id);
                };
                let records = db
                    .attendance
                    .iter()
                    .filter(|r| r.employee_id == *employee_id);
                let total = records.clone().count();
                let present = records
                    .filter(|r| r.status == AttendanceStatus::Present)
                    .count();
                MockResponse::json(
                    200,
                    json!({
                        "employee_id": employee.employee_id,
                        "full_name": employee.full_name,
                        "total_days": total,
                        "present_days": present,
                        "absent_days": total - present,
                    }),
                )
            }
            ("GET", ["api", "stats"]) => {
                let mut with_attendance: Vec<&str> =
                    db.attendance.iter().map(|r| r.employee_id.as_str()).collect();
                with_attendance.sort_unstable();
                with_attendance.dedup();
                let total = db.attendance.len();
                let present = db
                    .attendance
                    .iter()
                    .filter(|r| r.status == AttendanceStatus::Present)
                    .count();
                MockResponse::json(
                    200,
                    json!({
                        "total_employees": db.employees.len(),
                        "employees_with_attendance": with_attendance.len(),
                        "total_attendance_records": total,
                        "total_present": present,
                        "total_absent": total - present,
                    }),
                )
            }
            ("GET", ["api", "stats", "today"]) => {
                let today: Vec<&StoredAttendance> =
                    db.attendance.iter().filter(|r| r.date == self.today).collect();
                let present = today
                    .iter()
                    .filter(|r| r.status == AttendanceStatus::Present)
                    .count();
                let employees = db.employees.len();
                let percentage = if employees > 0 {
                    ((today.len() as f64 / employees as f64) * 10_000.0).round() / 100.0
                } else {
                    0.0
                };
                MockResponse::json(
                    200,
                    json!({
                        "date": self.today.format("%Y-%m-%d").to_string(),
                        "present_today": present,
                        "absent_today": today.len() - present,
                        "attendance_marked": today.len(),
                        "attendance_percentage": percentage,
                    }),
                )
            }
            _ => MockResponse::json(404, json!({ "detail": "Not Found" })),
        }
    }
}

impl TestResponder for FakeHrApi {
    fn respond(&self, request: &Request) -> Result<MockResponse, ApiError> {
        let method = request.method().clone();
        let url = request.url();
        let path = url.path().to_string();
        let mut db = self
            .db
            .lock()
            .map_err(|_| ApiError::unknown("fake db lock poisoned"))?;
        db.requests.push(match url.query() {
            Some(query) => format!("{} {}?{}", method, path, query),
            None => format!("{} {}", method, path),
        });
        if db.failing.iter().any(|(m, p)| *m == method && *p == path) {
            return Ok(MockResponse::raw(500, "Internal Server Error"));
        }
        Ok(self.route(&mut db, &method, &path, request))
    }
}

fn not_found(employee_id: &str) -> MockResponse {
    MockResponse::json(
        404,
        json!({ "detail": format!("Employee with ID '{}' not found", employee_id) }),
    )
}

fn bad_request(detail: String) -> MockResponse {
    MockResponse::json(400, json!({ "detail": detail }))
}

fn unprocessable(field: &str, msg: &str) -> MockResponse {
    MockResponse::json(
        422,
        json!({ "detail": [{ "loc": ["body", field], "msg": msg, "type": "value_error" }] }),
    )
}

fn text_field(body: &Value, field: &str) -> Result<String, MockResponse> {
    match body.get(field).and_then(Value::as_str).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        Some(_) => Err(unprocessable(field, "Field cannot be empty")),
        None => Err(unprocessable(field, "field required")),
    }
}

fn create_employee(db: &mut FakeDb, body: &Value) -> MockResponse {
    let parsed = (|| {
        Ok::<_, MockResponse>((
            text_field(body, "employee_id")?,
            text_field(body, "full_name")?,
            text_field(body, "email")?,
            text_field(body, "department")?,
        ))
    })();
    let (employee_id, full_name, email, department) = match parsed {
        Ok(fields) => fields,
        Err(response) => return response,
    };
    if !email.contains('@') {
        return unprocessable("email", "value is not a valid email address");
    }
    if db.employee(&employee_id).is_some() {
        return bad_request(format!("Employee ID '{}' already exists", employee_id));
    }
    if db.employees.iter().any(|e| e.email == email) {
        return bad_request(format!("Email '{}' already exists", email));
    }
    let employee = Employee {
        id: db.next_id("emp"),
        employee_id,
        full_name,
        email,
        department,
    };
    db.employees.push(employee.clone());
    MockResponse::json(201, json!(employee))
}

fn create_attendance(db: &mut FakeDb, body: &Value) -> MockResponse {
    let employee_id = match text_field(body, "employee_id") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let Some(date) = body
        .get("date")
        .and_then(Value::as_str)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    else {
        return unprocessable("date", "invalid date format");
    };
    let Some(status) = body
        .get("status")
        .and_then(Value::as_str)
        .and_then(|s| AttendanceStatus::ALL.into_iter().find(|st| st.as_str() == s))
    else {
        return unprocessable("status", "value is not a valid enumeration member");
    };
    if db.employee(&employee_id).is_none() {
        return not_found(&employee_id);
    }
    if db
        .attendance
        .iter()
        .any(|r| r.employee_id == employee_id && r.date == date)
    {
        return bad_request(format!(
            "Attendance already marked for {}",
            date.format("%Y-%m-%d")
        ));
    }
    let record = StoredAttendance {
        id: db.next_id("att"),
        employee_id,
        date,
        status,
    };
    db.attendance.push(record.clone());
    MockResponse::json(201, db.attendance_json(&record))
}
