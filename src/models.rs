use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

pub const DEPARTMENTS: [Department; 5] = [
    Department::Engineering,
    Department::Hr,
    Department::Finance,
    Department::Marketing,
    Department::Operations,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Marketing,
    Operations,
}

impl Department {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Hr => "HR",
            Self::Finance => "Finance",
            Self::Marketing => "Marketing",
            Self::Operations => "Operations",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        DEPARTMENTS.into_iter().find(|dept| dept.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "present" => Some(Self::Present),
            "absent" => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Employee as returned by the backend. The department is kept as sent so
/// rows render even if the backend knows departments this client does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    #[serde(default, deserialize_with = "lenient_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
}

/// Accepts RFC 3339 or a naive `YYYY-MM-DDTHH:MM:SS[.f]` (read as UTC);
/// anything else becomes `None` rather than failing the whole response.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(text) = raw.as_ref().and_then(serde_json::Value::as_str) else {
        return Ok(None);
    };
    let parsed = DateTime::parse_from_rfc3339(text).ok().or_else(|| {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    });
    Ok(parsed)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id_code: Option<String>,
}

impl AttendanceRecord {
    /// Name shown in the records table, falling back to the numeric id.
    pub fn display_employee(&self) -> String {
        match self.employee_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.employee.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: Department,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewAttendance {
    pub employee: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentDays {
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub department: String,
    pub present_days: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub total_employees: usize,
    pub total_present: usize,
    pub total_absent: usize,
    pub present_days: Vec<PresentDays>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmployeeAttendanceResponse {
    pub employee: i64,
    pub present_days: usize,
    pub absent_days: usize,
    pub records: Vec<AttendanceRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee_json(created_at: &str) -> String {
        format!(
            r#"[{{"id":1,"employee_id":"EMP001","full_name":"Grace Hopper","email":"grace@example.com","department":"Engineering","created_at":{created_at}}}]"#
        )
    }

    #[test]
    fn employee_accepts_naive_timestamp() {
        let employees: Vec<Employee> = serde_json::from_str(&employee_json(r#""2026-01-05T09:30:00.123456""#)).unwrap();
        let created = employees[0].created_at.expect("timestamp parsed");
        assert_eq!(created.to_rfc3339(), "2026-01-05T09:30:00.123456+00:00");
    }

    #[test]
    fn employee_accepts_offset_timestamp() {
        let employees: Vec<Employee> = serde_json::from_str(&employee_json(r#""2026-01-05T09:30:00+05:30""#)).unwrap();
        assert_eq!(employees[0].created_at.unwrap().offset().local_minus_utc(), 5 * 3600 + 30 * 60);
    }

    #[test]
    fn unreadable_timestamp_does_not_fail_the_list() {
        for value in [r#""last tuesday""#, "null", "1736069400"] {
            let employees: Vec<Employee> = serde_json::from_str(&employee_json(value)).unwrap();
            assert_eq!(employees[0].created_at, None);
            assert_eq!(employees[0].full_name, "Grace Hopper");
        }

        let without: Vec<Employee> = serde_json::from_str(
            r#"[{"id":2,"employee_id":"EMP002","full_name":"Alan Turing","email":"alan@example.com","department":"HR"}]"#,
        )
        .unwrap();
        assert_eq!(without[0].created_at, None);
    }

    #[test]
    fn attendance_status_uses_lowercase_wire_names() {
        let record: AttendanceRecord =
            serde_json::from_str(r#"{"id":5,"employee":1,"date":"2026-01-05","status":"absent"}"#).unwrap();
        assert_eq!(record.status, AttendanceStatus::Absent);
        assert_eq!(record.display_employee(), "1");
    }
}
