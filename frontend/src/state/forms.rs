use chrono::NaiveDate;

use crate::{
    api::{AttendanceDraft, AttendanceFilter, AttendanceStatus, EmployeeDraft},
    utils::time::{format_date, parse_date_input},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a date in YYYY-MM-DD format")]
    InvalidDate(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    EmployeeId,
    FullName,
    Email,
    Department,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 4] = [
        EmployeeField::EmployeeId,
        EmployeeField::FullName,
        EmployeeField::Email,
        EmployeeField::Department,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "Employee ID",
            EmployeeField::FullName => "Full Name",
            EmployeeField::Email => "Email Address",
            EmployeeField::Department => "Department",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "e.g., EMP001",
            EmployeeField::FullName => "e.g., John Doe",
            EmployeeField::Email => "e.g., john@example.com",
            EmployeeField::Department => "e.g., Engineering",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            EmployeeField::Email => "email",
            _ => "text",
        }
    }

    pub fn input_id(self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "employee-id",
            EmployeeField::FullName => "employee-full-name",
            EmployeeField::Email => "employee-email",
            EmployeeField::Department => "employee-department",
        }
    }
}

/// Raw text of the employee creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeForm {
    pub fn value(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::EmployeeId => &self.employee_id,
            EmployeeField::FullName => &self.full_name,
            EmployeeField::Email => &self.email,
            EmployeeField::Department => &self.department,
        }
    }

    pub fn set(&mut self, field: EmployeeField, value: String) {
        let slot = match field {
            EmployeeField::EmployeeId => &mut self.employee_id,
            EmployeeField::FullName => &mut self.full_name,
            EmployeeField::Email => &mut self.email,
            EmployeeField::Department => &mut self.department,
        };
        *slot = value;
    }

    pub fn to_draft(&self) -> Result<EmployeeDraft, FormError> {
        let required = |field: EmployeeField| {
            let value = self.value(field).trim();
            if value.is_empty() {
                Err(FormError::Missing(field.label()))
            } else {
                Ok(value.to_string())
            }
        };
        Ok(EmployeeDraft {
            employee_id: required(EmployeeField::EmployeeId)?,
            full_name: required(EmployeeField::FullName)?,
            email: required(EmployeeField::Email)?,
            department: required(EmployeeField::Department)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceEdit {
    Employee(String),
    Date(String),
    Status(AttendanceStatus),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceForm {
    pub employee_id: String,
    pub date: String,
    pub status: AttendanceStatus,
}

impl AttendanceForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            employee_id: String::new(),
            date: format_date(today),
            status: AttendanceStatus::Present,
        }
    }

    pub fn edit(&mut self, edit: AttendanceEdit) {
        match edit {
            AttendanceEdit::Employee(value) => self.employee_id = value,
            AttendanceEdit::Date(value) => self.date = value,
            AttendanceEdit::Status(status) => self.status = status,
        }
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    pub fn to_draft(&self) -> Result<AttendanceDraft, FormError> {
        let employee_id = self.employee_id.trim();
        if employee_id.is_empty() {
            return Err(FormError::Missing("Employee"));
        }
        let date = parse_date_input(&self.date)
            .map_err(|_| FormError::InvalidDate("Date"))?
            .ok_or(FormError::Missing("Date"))?;
        Ok(AttendanceDraft {
            employee_id: employee_id.to_string(),
            date,
            status: self.status,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    EmployeeId,
    Date,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub employee_id: String,
    pub date: String,
}

impl FilterState {
    pub fn set(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::EmployeeId => self.employee_id = value,
            FilterField::Date => self.date = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Blank fields match any record.
    pub fn to_filter(&self) -> Result<AttendanceFilter, FormError> {
        let date = parse_date_input(&self.date).map_err(|_| FormError::InvalidDate("Date"))?;
        Ok(AttendanceFilter {
            employee_id: self.selected_employee(),
            date,
        })
    }

    pub fn selected_employee(&self) -> Option<String> {
        let trimmed = self.employee_id.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}
