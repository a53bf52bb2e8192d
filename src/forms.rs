//! Form payloads posted by the two pages and their validation.
//!
//! Forms keep the raw strings the browser sent so a rejected submission can
//! be rendered again with the user's input intact.

use crate::models::{AttendanceStatus, Department, NewAttendance, NewEmployee};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const EMPLOYEE_ERROR_FIELDS: [&str; 2] = ["email", "employee_id"];
pub const ATTENDANCE_ERROR_FIELDS: [&str; 1] = ["non_field_errors"];

pub const ADD_EMPLOYEE_FAILED: &str = "Failed to add employee.";
pub const DELETE_EMPLOYEE_FAILED: &str = "Failed to delete employee.";
pub const MARK_ATTENDANCE_FAILED: &str = "Failed to mark attendance.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmployeeForm {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeForm {
    pub fn validate(&self) -> Result<NewEmployee, String> {
        let employee_id = required(&self.employee_id, "Employee ID")?;
        let full_name = required(&self.full_name, "Full name")?;
        let email = required(&self.email, "Email")?;
        if !looks_like_email(&email) {
            return Err("Enter a valid email address.".to_string());
        }
        let department = Department::parse(self.department.trim())
            .ok_or_else(|| "Select a department.".to_string())?;

        Ok(NewEmployee {
            employee_id,
            full_name,
            email,
            department,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AttendanceForm {
    pub employee: String,
    pub date: String,
    pub status: String,
}

impl Default for AttendanceForm {
    fn default() -> Self {
        Self {
            employee: String::new(),
            date: String::new(),
            status: AttendanceStatus::Present.as_str().to_string(),
        }
    }
}

impl AttendanceForm {
    pub fn validate(&self) -> Result<NewAttendance, String> {
        let employee = self
            .employee
            .trim()
            .parse::<i64>()
            .map_err(|_| "Select an employee.".to_string())?;
        let date = parse_date(&self.date).ok_or_else(|| "Enter a valid date.".to_string())?;
        let status = AttendanceStatus::parse(self.status.trim())
            .ok_or_else(|| "Status must be present or absent.".to_string())?;

        Ok(NewAttendance {
            employee,
            date,
            status,
        })
    }
}

/// Query string of the attendance dashboard. Blank values mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
}

impl FilterQuery {
    /// Query string that reproduces these filters, with a leading `?`, or
    /// an empty string when no filter is set.
    pub fn to_query_string(&self) -> String {
        let set = Self {
            date: non_blank(&self.date),
            employee: non_blank(&self.employee),
        };
        match serde_urlencoded::to_string(&set) {
            Ok(encoded) if !encoded.is_empty() => format!("?{encoded}"),
            _ => String::new(),
        }
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn required(value: &str, label: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{label} is required."));
    }
    Ok(trimmed.to_string())
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee_form() -> EmployeeForm {
        EmployeeForm {
            employee_id: " emp-7 ".into(),
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            department: "Engineering".into(),
        }
    }

    #[test]
    fn employee_form_trims_and_accepts() {
        let new = employee_form().validate().unwrap();
        assert_eq!(new.employee_id, "emp-7");
        assert_eq!(new.department, Department::Engineering);
    }

    #[test]
    fn employee_form_rejects_blank_fields() {
        let mut form = employee_form();
        form.full_name = "   ".into();
        assert_eq!(form.validate().unwrap_err(), "Full name is required.");

        let form = EmployeeForm::default();
        assert_eq!(form.validate().unwrap_err(), "Employee ID is required.");
    }

    #[test]
    fn employee_form_rejects_bad_email_and_department() {
        let mut form = employee_form();
        form.email = "ada.example.com".into();
        assert_eq!(form.validate().unwrap_err(), "Enter a valid email address.");

        let mut form = employee_form();
        form.department = "Legal".into();
        assert_eq!(form.validate().unwrap_err(), "Select a department.");

        form.department = "HR".into();
        assert_eq!(form.validate().unwrap().department, Department::Hr);
    }

    #[test]
    fn attendance_form_validates_each_field() {
        let form = AttendanceForm {
            employee: "3".into(),
            date: "2026-01-05".into(),
            status: "absent".into(),
        };
        let new = form.validate().unwrap();
        assert_eq!(new.employee, 3);
        assert_eq!(new.date, NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        assert_eq!(new.status, AttendanceStatus::Absent);

        let mut bad = form.clone();
        bad.employee = String::new();
        assert_eq!(bad.validate().unwrap_err(), "Select an employee.");

        let mut bad = form.clone();
        bad.date = "2026-02-30".into();
        assert_eq!(bad.validate().unwrap_err(), "Enter a valid date.");

        let mut bad = form;
        bad.status = "late".into();
        assert_eq!(bad.validate().unwrap_err(), "Status must be present or absent.");
    }

    #[test]
    fn attendance_form_defaults_to_present() {
        assert_eq!(AttendanceForm::default().status, "present");
    }

    #[test]
    fn filter_query_string_skips_blank_values() {
        assert_eq!(FilterQuery::default().to_query_string(), "");

        let query = FilterQuery {
            date: Some("2026-01-05".into()),
            employee: Some(" ".into()),
        };
        assert_eq!(query.to_query_string(), "?date=2026-01-05");

        let query = FilterQuery {
            date: Some("2026-01-05".into()),
            employee: Some("4".into()),
        };
        assert_eq!(query.to_query_string(), "?date=2026-01-05&employee=4");
    }

    #[test]
    fn filter_query_string_escapes_values() {
        let query = FilterQuery {
            date: Some(" 2026-01-05 ".into()),
            employee: Some("4&date=x y".into()),
        };
        assert_eq!(query.to_query_string(), "?date=2026-01-05&employee=4%26date%3Dx+y");
    }
}
