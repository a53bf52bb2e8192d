use crate::api::ApiError;
use crate::dashboard::build_summary;
use crate::errors::AppError;
use crate::forms::{
    parse_date, AttendanceForm, EmployeeForm, FilterQuery, ADD_EMPLOYEE_FAILED, ATTENDANCE_ERROR_FIELDS,
    DELETE_EMPLOYEE_FAILED, EMPLOYEE_ERROR_FIELDS, MARK_ATTENDANCE_FAILED,
};
use crate::models::{AttendanceRecord, AttendanceStatus, EmployeeAttendanceResponse, SummaryResponse};
use crate::pages::{
    render_attendance_page, render_employees_load_error, render_employees_page, AttendanceView, EmployeesView,
    LOAD_ATTENDANCE_FAILED, LOAD_EMPLOYEES_FAILED,
};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use tracing::{error, info, warn};

pub async fn employees_page(State(state): State<AppState>) -> Response {
    render_employees(&state, &EmployeeForm::default(), None, None, StatusCode::OK).await
}

pub async fn add_employee(State(state): State<AppState>, Form(form): Form<EmployeeForm>) -> Response {
    let new_employee = match form.validate() {
        Ok(new_employee) => new_employee,
        Err(message) => {
            return render_employees(&state, &form, Some(&message), None, StatusCode::UNPROCESSABLE_ENTITY).await;
        }
    };

    match state.api.create_employee(&new_employee).await {
        Ok(employee) => {
            info!(id = employee.id, code = %employee.employee_id, "employee added");
            Redirect::to("/").into_response()
        }
        Err(err) => {
            warn!("add employee failed: {err}");
            let message = rejection_message(&err, &EMPLOYEE_ERROR_FIELDS, ADD_EMPLOYEE_FAILED);
            render_employees(&state, &form, Some(&message), None, rejection_status(&err)).await
        }
    }
}

pub async fn delete_employee(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.api.delete_employee(id).await {
        Ok(()) => {
            info!(id, "employee deleted");
            Redirect::to("/").into_response()
        }
        Err(err) => {
            warn!(id, "delete employee failed: {err}");
            render_employees(
                &state,
                &EmployeeForm::default(),
                None,
                Some(DELETE_EMPLOYEE_FAILED),
                rejection_status(&err),
            )
            .await
        }
    }
}

pub async fn attendance_page(State(state): State<AppState>, Query(query): Query<FilterQuery>) -> Response {
    render_attendance(&state, &query, &AttendanceForm::default(), None, StatusCode::OK).await
}

pub async fn mark_attendance(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
    Form(form): Form<AttendanceForm>,
) -> Response {
    let new_record = match form.validate() {
        Ok(new_record) => new_record,
        Err(message) => {
            return render_attendance(&state, &query, &form, Some(&message), StatusCode::UNPROCESSABLE_ENTITY).await;
        }
    };

    match state.api.create_attendance(&new_record).await {
        Ok(record) => {
            info!(
                id = record.id,
                employee = record.employee,
                date = %record.date,
                status = record.status.as_str(),
                "attendance marked"
            );
            Redirect::to(&format!("/attendance{}", query.to_query_string())).into_response()
        }
        Err(err) => {
            warn!("mark attendance failed: {err}");
            let message = rejection_message(&err, &ATTENDANCE_ERROR_FIELDS, MARK_ATTENDANCE_FAILED);
            render_attendance(&state, &query, &form, Some(&message), rejection_status(&err)).await
        }
    }
}

pub async fn fallback() -> Redirect {
    Redirect::to("/")
}

pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, AppError> {
    let (employees, records) = tokio::try_join!(state.api.list_employees(), state.api.list_attendance())?;
    Ok(Json(build_summary(&employees, &records)))
}

#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

pub async fn get_attendance(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<AttendanceRecord>>, AppError> {
    let raw = query.date.as_deref().map(str::trim).filter(|value| !value.is_empty());
    let records = match raw {
        Some(raw) => {
            let date = parse_date(raw).ok_or_else(|| AppError::bad_request("date must be YYYY-MM-DD"))?;
            state.api.attendance_on(date).await?
        }
        None => state.api.list_attendance().await?,
    };
    Ok(Json(records))
}

pub async fn get_employee_attendance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeAttendanceResponse>, AppError> {
    let records = state.api.attendance_by_employee(id).await?;
    let present_days = records.iter().filter(|r| r.status == AttendanceStatus::Present).count();

    Ok(Json(EmployeeAttendanceResponse {
        employee: id,
        present_days,
        absent_days: records.len() - present_days,
        records,
    }))
}

async fn render_employees(
    state: &AppState,
    form: &EmployeeForm,
    form_error: Option<&str>,
    banner: Option<&str>,
    status: StatusCode,
) -> Response {
    match state.api.list_employees().await {
        Ok(employees) => {
            let html = render_employees_page(&EmployeesView {
                employees: &employees,
                form,
                form_error,
                banner,
            });
            (status, Html(html)).into_response()
        }
        Err(err) => {
            error!("failed to load employees: {err}");
            (StatusCode::BAD_GATEWAY, Html(render_employees_load_error(LOAD_EMPLOYEES_FAILED))).into_response()
        }
    }
}

async fn render_attendance(
    state: &AppState,
    query: &FilterQuery,
    form: &AttendanceForm,
    message: Option<&str>,
    status: StatusCode,
) -> Response {
    let loaded = tokio::try_join!(state.api.list_employees(), state.api.list_attendance());
    let (employees, records, message, status) = match loaded {
        Ok((employees, records)) => (employees, records, message, status),
        Err(err) => {
            error!("failed to load attendance data: {err}");
            (Vec::new(), Vec::new(), Some(LOAD_ATTENDANCE_FAILED), StatusCode::BAD_GATEWAY)
        }
    };

    let html = render_attendance_page(&AttendanceView {
        employees: &employees,
        records: &records,
        form,
        query,
        error: message,
    });
    (status, Html(html)).into_response()
}

fn rejection_message(err: &ApiError, fields: &[&str], fallback: &str) -> String {
    err.field_message(fields).unwrap_or_else(|| fallback.to_string())
}

/// A backend 4xx is the user's input being rejected; anything else is the
/// backend failing.
fn rejection_status(err: &ApiError) -> StatusCode {
    match err {
        ApiError::Status { status, .. } if status.is_client_error() => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::BAD_GATEWAY,
    }
}
