use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::employees_page))
        .route("/employees", post(handlers::add_employee))
        .route("/employees/:id/delete", post(handlers::delete_employee))
        .route("/attendance", get(handlers::attendance_page).post(handlers::mark_attendance))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/attendance", get(handlers::get_attendance))
        .route("/api/employees/:id/attendance", get(handlers::get_employee_attendance))
        .fallback(handlers::fallback)
        .with_state(state)
}
