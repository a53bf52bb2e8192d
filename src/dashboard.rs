use crate::forms::{parse_date, FilterQuery};
use crate::models::{AttendanceRecord, AttendanceStatus, Employee, PresentDays, SummaryResponse};
use chrono::NaiveDate;
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub date: Option<NaiveDate>,
    pub employee: Option<i64>,
}

impl AttendanceFilter {
    /// Blank values select everything; unparsable values are dropped.
    pub fn from_query(query: &FilterQuery) -> Self {
        let date = non_blank(query.date.as_deref()).and_then(|raw| {
            let parsed = parse_date(raw);
            if parsed.is_none() {
                warn!("ignoring invalid date filter {raw:?}");
            }
            parsed
        });
        let employee = non_blank(query.employee.as_deref()).and_then(|raw| {
            let parsed = raw.parse::<i64>().ok();
            if parsed.is_none() {
                warn!("ignoring invalid employee filter {raw:?}");
            }
            parsed
        });
        Self { date, employee }
    }

    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        let date_ok = self.date.is_none_or(|date| record.date == date);
        let employee_ok = self.employee.is_none_or(|id| record.employee == id);
        date_ok && employee_ok
    }
}

pub fn filter_records<'a>(records: &'a [AttendanceRecord], filter: &AttendanceFilter) -> Vec<&'a AttendanceRecord> {
    records.iter().filter(|record| filter.matches(record)).collect()
}

pub fn count_status(records: &[AttendanceRecord], status: AttendanceStatus) -> usize {
    records.iter().filter(|record| record.status == status).count()
}

/// Present days per employee, in employee order.
pub fn present_counts(employees: &[Employee], records: &[AttendanceRecord]) -> Vec<PresentDays> {
    employees
        .iter()
        .map(|emp| PresentDays {
            id: emp.id,
            employee_id: emp.employee_id.clone(),
            full_name: emp.full_name.clone(),
            department: emp.department.clone(),
            present_days: records
                .iter()
                .filter(|r| r.employee == emp.id && r.status == AttendanceStatus::Present)
                .count(),
        })
        .collect()
}

pub fn build_summary(employees: &[Employee], records: &[AttendanceRecord]) -> SummaryResponse {
    SummaryResponse {
        total_employees: employees.len(),
        total_present: count_status(records, AttendanceStatus::Present),
        total_absent: count_status(records, AttendanceStatus::Absent),
        present_days: present_counts(employees, records),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
