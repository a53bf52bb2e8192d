use crate::dashboard::{count_status, filter_records, present_counts, AttendanceFilter};
use crate::forms::{AttendanceForm, EmployeeForm, FilterQuery};
use crate::models::{AttendanceRecord, AttendanceStatus, Employee, DEPARTMENTS};
use crate::ui::{
    empty_state, error_banner, escape, option, page_header, render_layout, stat_card, submit_button, table, NavPage,
    Tone,
};

pub const LOAD_EMPLOYEES_FAILED: &str = "Failed to load employees.";
pub const LOAD_ATTENDANCE_FAILED: &str = "Failed to load attendance data.";

pub struct EmployeesView<'a> {
    pub employees: &'a [Employee],
    pub form: &'a EmployeeForm,
    /// Shown inside the add form.
    pub form_error: Option<&'a str>,
    /// Shown above the table, for failures outside the form.
    pub banner: Option<&'a str>,
}

pub fn render_employees_page(view: &EmployeesView<'_>) -> String {
    let mut body = page_header("Employee Management", "Add, view, and remove employees from your HRMS.");
    if let Some(message) = view.banner {
        body.push_str(&error_banner(message));
    }
    body.push_str(&employee_form(view.form, view.form_error));

    if view.employees.is_empty() {
        body.push_str(&empty_state("No employees yet. Add one above."));
    } else {
        body.push_str(&employee_table(view.employees));
    }

    render_layout("Employees", NavPage::Employees, &body)
}

/// The employees page when the list itself could not be loaded: only the
/// message, no form or table.
pub fn render_employees_load_error(message: &str) -> String {
    let body = format!(r#"<p class="load-error">{}</p>"#, escape(message));
    render_layout("Employees", NavPage::Employees, &body)
}

fn employee_form(form: &EmployeeForm, error: Option<&str>) -> String {
    let mut departments = option("", "Select Department", form.department.is_empty());
    for dept in DEPARTMENTS {
        departments.push_str(&option(dept.as_str(), dept.as_str(), form.department == dept.as_str()));
    }

    format!(
        r#"<form class="panel" method="post" action="/employees">
  <h3>Add New Employee</h3>
  {error}
  <div class="grid">
    <input name="employee_id" placeholder="Employee ID" value="{employee_id}" required />
    <input name="full_name" placeholder="Full Name" value="{full_name}" required />
    <input name="email" type="email" placeholder="Email" value="{email}" required />
    <select name="department" required>{departments}</select>
  </div>
  {button}
</form>"#,
        error = error
            .map(|message| format!(r#"<p class="form-error">{}</p>"#, escape(message)))
            .unwrap_or_default(),
        employee_id = escape(&form.employee_id),
        full_name = escape(&form.full_name),
        email = escape(&form.email),
        button = submit_button("Add Employee", "Adding..."),
    )
}

fn employee_table(employees: &[Employee]) -> String {
    let rows: Vec<String> = employees
        .iter()
        .map(|emp| {
            format!(
                r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><form class="inline" method="post" action="/employees/{}/delete" data-confirm="Delete this employee?"><button class="btn btn-danger" type="submit">Delete</button></form></td></tr>"#,
                escape(&emp.employee_id),
                escape(&emp.full_name),
                escape(&emp.email),
                escape(&emp.department),
                emp.id,
            )
        })
        .collect();
    table(&["ID", "Name", "Email", "Department", "Action"], &rows)
}

pub struct AttendanceView<'a> {
    pub employees: &'a [Employee],
    pub records: &'a [AttendanceRecord],
    pub form: &'a AttendanceForm,
    pub query: &'a FilterQuery,
    pub error: Option<&'a str>,
}

pub fn render_attendance_page(view: &AttendanceView<'_>) -> String {
    let mut body = page_header(
        "Attendance Dashboard",
        "Mark daily attendance, view records, and see summary stats.",
    );
    if let Some(message) = view.error {
        body.push_str(&error_banner(message));
    }

    body.push_str(r#"<div class="cards">"#);
    body.push_str(&stat_card("Total Employees", view.employees.len(), Tone::Primary));
    body.push_str(&stat_card(
        "Total Present Records",
        count_status(view.records, AttendanceStatus::Present),
        Tone::Success,
    ));
    body.push_str(&stat_card(
        "Total Absent Records",
        count_status(view.records, AttendanceStatus::Absent),
        Tone::Danger,
    ));
    body.push_str("</div>");

    body.push_str(&attendance_form(view.employees, view.form, view.query));
    body.push_str(&present_summary(view.employees, view.records));
    body.push_str(&records_section(view.employees, view.records, view.query));

    render_layout("Attendance", NavPage::Attendance, &body)
}

fn attendance_form(employees: &[Employee], form: &AttendanceForm, query: &FilterQuery) -> String {
    let mut employee_options = option("", "Select Employee", form.employee.is_empty());
    for emp in employees {
        let value = emp.id.to_string();
        let label = format!("{} - {}", emp.employee_id, emp.full_name);
        employee_options.push_str(&option(&value, &label, form.employee == value));
    }

    let mut status_options = String::new();
    for status in [AttendanceStatus::Present, AttendanceStatus::Absent] {
        status_options.push_str(&option(status.as_str(), status.label(), form.status == status.as_str()));
    }

    format!(
        r#"<section class="panel">
  <h3>Mark Attendance</h3>
  <form method="post" action="/attendance{query}">
    <div class="grid">
      <select name="employee" required>{employee_options}</select>
      <input type="date" name="date" value="{date}" required />
      <select name="status">{status_options}</select>
    </div>
    {button}
  </form>
</section>"#,
        query = escape(&query.to_query_string()),
        date = escape(&form.date),
        button = submit_button("Mark Attendance", "Saving..."),
    )
}

fn present_summary(employees: &[Employee], records: &[AttendanceRecord]) -> String {
    let mut html = String::from(r#"<section><h3 class="section-title">Present Days Summary</h3>"#);
    let counts = present_counts(employees, records);
    if counts.is_empty() {
        html.push_str(&empty_state("No employees to summarize yet."));
    } else {
        let rows: Vec<String> = counts
            .iter()
            .map(|entry| {
                format!(
                    r#"<tr><td>{}</td><td>{}</td><td>{}</td><td><span class="badge badge-info">{} days</span></td></tr>"#,
                    escape(&entry.employee_id),
                    escape(&entry.full_name),
                    escape(&entry.department),
                    entry.present_days,
                )
            })
            .collect();
        html.push_str(&table(&["Employee ID", "Name", "Department", "Present Days"], &rows));
    }
    html.push_str("</section>");
    html
}

fn records_section(employees: &[Employee], records: &[AttendanceRecord], query: &FilterQuery) -> String {
    let filter = AttendanceFilter::from_query(query);
    let selected_date = filter.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
    let selected_employee = filter.employee.map(|id| id.to_string()).unwrap_or_default();

    let mut employee_options = option("", "All Employees", selected_employee.is_empty());
    for emp in employees {
        let value = emp.id.to_string();
        employee_options.push_str(&option(&value, &emp.full_name, selected_employee == value));
    }

    let mut html = format!(
        r#"<section>
  <div class="records-header">
    <h3 class="section-title">Attendance Records</h3>
    <form class="filters" method="get" action="/attendance" data-autosubmit>
      <input type="date" name="date" value="{date}" />
      <select name="employee">{employee_options}</select>
      <button class="btn btn-light" type="submit">Apply</button>
      <a class="btn btn-light" href="/attendance">Clear</a>
    </form>
  </div>
"#,
        date = escape(&selected_date),
    );

    let filtered = filter_records(records, &filter);
    if filtered.is_empty() {
        html.push_str(&empty_state("No attendance records found."));
    } else {
        let rows: Vec<String> = filtered
            .iter()
            .map(|rec| {
                format!(
                    r#"<tr><td>{}</td><td>{}</td><td><span class="badge badge-{}">{}</span></td></tr>"#,
                    escape(&rec.display_employee()),
                    rec.date.format("%Y-%m-%d"),
                    rec.status.as_str(),
                    rec.status.label(),
                )
            })
            .collect();
        html.push_str(&table(&["Employee", "Date", "Status"], &rows));
    }
    html.push_str("</section>");
    html
}
