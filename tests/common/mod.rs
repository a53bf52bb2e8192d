//! In-memory stand-in for the HRMS REST backend, served on its own thread
//! so it outlives any single test runtime.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

static FAIL_WRITES: AtomicBool = AtomicBool::new(false);

/// Makes every write answer `500` until the returned guard is dropped.
pub struct FailingWrites(());

impl Drop for FailingWrites {
    fn drop(&mut self) {
        FAIL_WRITES.store(false, Ordering::SeqCst);
    }
}

pub fn fail_writes() -> FailingWrites {
    FAIL_WRITES.store(true, Ordering::SeqCst);
    FailingWrites(())
}

fn server_error() -> Option<Response> {
    FAIL_WRITES
        .load(Ordering::SeqCst)
        .then(|| (StatusCode::INTERNAL_SERVER_ERROR, "<h1>Server Error (500)</h1>").into_response())
}

#[derive(Default)]
struct MockDb {
    next_id: i64,
    employees: Vec<Value>,
    attendance: Vec<Value>,
}

impl MockDb {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn employee(&self, id: i64) -> Option<&Value> {
        self.employees.iter().find(|emp| emp["id"] == id)
    }
}

type Db = Arc<Mutex<MockDb>>;

/// Starts the mock and returns its API base URL.
pub fn start() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind mock backend");
    let addr = listener.local_addr().unwrap();
    listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("mock runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("mock listener");
            axum::serve(listener, router()).await.expect("mock backend");
        });
    });

    format!("http://{addr}/api")
}

fn router() -> Router {
    let db: Db = Arc::default();
    Router::new()
        .route("/api/employees/", get(list_employees).post(create_employee))
        .route("/api/employees/:id/", delete(delete_employee))
        .route("/api/attendance/", get(list_attendance).post(create_attendance))
        .route("/api/attendance/employee/:id/", get(attendance_by_employee))
        .with_state(db)
}

fn invalid(body: Value) -> Response {
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

fn text_field(body: &Value, field: &str) -> String {
    body[field].as_str().unwrap_or_default().trim().to_string()
}

async fn list_employees(State(db): State<Db>) -> Json<Vec<Value>> {
    Json(db.lock().unwrap().employees.clone())
}

async fn create_employee(State(db): State<Db>, Json(body): Json<Value>) -> Response {
    if let Some(response) = server_error() {
        return response;
    }
    let employee_id = text_field(&body, "employee_id").to_uppercase();
    let email = text_field(&body, "email").to_lowercase();
    let full_name = text_field(&body, "full_name");
    let department = text_field(&body, "department");

    for (field, value) in [("employee_id", &employee_id), ("full_name", &full_name), ("email", &email)] {
        if value.is_empty() {
            let mut errors = serde_json::Map::new();
            errors.insert(field.to_string(), json!(["This field may not be blank."]));
            return invalid(Value::Object(errors));
        }
    }

    let mut db = db.lock().unwrap();
    if db.employees.iter().any(|emp| emp["employee_id"] == employee_id.as_str()) {
        return invalid(json!({ "employee_id": ["employee with this employee id already exists."] }));
    }
    if db.employees.iter().any(|emp| emp["email"] == email.as_str()) {
        return invalid(json!({ "email": ["employee with this email already exists."] }));
    }

    let employee = json!({
        "id": db.next_id(),
        "employee_id": employee_id,
        "full_name": full_name,
        "email": email,
        "department": department,
        "created_at": "2026-01-05T09:30:00.123456Z",
    });
    db.employees.push(employee.clone());
    (StatusCode::CREATED, Json(employee)).into_response()
}

async fn delete_employee(State(db): State<Db>, Path(id): Path<i64>) -> Response {
    if let Some(response) = server_error() {
        return response;
    }
    let mut db = db.lock().unwrap();
    if db.employee(id).is_none() {
        return (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." }))).into_response();
    }
    db.employees.retain(|emp| emp["id"] != id);
    db.attendance.retain(|rec| rec["employee"] != id);
    StatusCode::NO_CONTENT.into_response()
}

#[derive(Deserialize)]
struct AttendanceQuery {
    date: Option<String>,
}

fn newest_first(mut records: Vec<Value>) -> Vec<Value> {
    records.sort_by(|a, b| b["date"].as_str().cmp(&a["date"].as_str()));
    records
}

async fn list_attendance(State(db): State<Db>, Query(query): Query<AttendanceQuery>) -> Json<Vec<Value>> {
    let db = db.lock().unwrap();
    let records = db
        .attendance
        .iter()
        .filter(|rec| query.date.as_deref().is_none_or(|date| rec["date"] == date))
        .cloned()
        .collect();
    Json(newest_first(records))
}

async fn attendance_by_employee(State(db): State<Db>, Path(id): Path<i64>) -> Json<Vec<Value>> {
    let db = db.lock().unwrap();
    let records = db.attendance.iter().filter(|rec| rec["employee"] == id).cloned().collect();
    Json(newest_first(records))
}

async fn create_attendance(State(db): State<Db>, Json(body): Json<Value>) -> Response {
    if let Some(response) = server_error() {
        return response;
    }
    let Some(employee) = body["employee"].as_i64() else {
        return invalid(json!({ "employee": ["This field is required."] }));
    };
    let date = text_field(&body, "date");
    let status = text_field(&body, "status");
    if status != "present" && status != "absent" {
        return invalid(json!({ "status": [format!("\"{status}\" is not a valid choice.")] }));
    }

    let mut db = db.lock().unwrap();
    let Some(emp) = db.employee(employee).cloned() else {
        return invalid(json!({ "employee": [format!("Invalid pk \"{employee}\" - object does not exist.")] }));
    };
    if db
        .attendance
        .iter()
        .any(|rec| rec["employee"] == employee && rec["date"] == date.as_str())
    {
        return invalid(json!({
            "non_field_errors": ["Attendance for this employee on this date already exists."]
        }));
    }

    let record = json!({
        "id": db.next_id(),
        "employee": employee,
        "employee_name": emp["full_name"],
        "employee_id_code": emp["employee_id"],
        "date": date,
        "status": status,
    });
    db.attendance.push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}
