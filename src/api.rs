//! Typed client for the HRMS REST backend.
//!
//! Every call is a single request with no retry. Non-2xx responses keep
//! their JSON body so callers can surface the backend's validation message.

use crate::config::Config;
use crate::errors::first_field_error;
use crate::models::{AttendanceRecord, Employee, NewAttendance, NewEmployee};
use chrono::NaiveDate;
use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend could not be reached or the request did not complete.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("backend returned status {status}")]
    Status { status: StatusCode, body: Option<Value> },

    /// The response body did not match the expected shape.
    #[error("backend response parse failed: {0}")]
    Decode(String),

    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

impl ApiError {
    /// First validation message among `fields`, then any other field.
    /// Only a 4xx body counts as a validation response.
    pub fn field_message(&self, fields: &[&str]) -> Option<String> {
        match self {
            Self::Status { status, body: Some(body) } if status.is_client_error() => first_field_error(body, fields),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.api_timeout)
            .connect_timeout(std::time::Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json("/employees/", &[]).await
    }

    pub async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, ApiError> {
        self.send_json(Method::POST, "/employees/", employee).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        self.execute(self.http.delete(self.url(&format!("/employees/{id}/"))))
            .await?;
        Ok(())
    }

    pub async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get_json("/attendance/", &[]).await
    }

    pub async fn attendance_by_employee(&self, employee_id: i64) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get_json(&format!("/attendance/employee/{employee_id}/"), &[])
            .await
    }

    pub async fn attendance_on(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>, ApiError> {
        let date = date.format("%Y-%m-%d").to_string();
        self.get_json("/attendance/", &[("date", date.as_str())]).await
    }

    pub async fn create_attendance(&self, record: &NewAttendance) -> Result<AttendanceRecord, ApiError> {
        self.send_json(Method::POST, "/attendance/", record).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        let request = self.http.get(self.url(path)).query(query);
        let text = self.execute(request).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let request = self.http.request(method, self.url(path)).json(body);
        let text = self.execute(request).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(_) if !status.is_success() => return Err(ApiError::Status { status, body: None }),
            Err(e) => return Err(ApiError::Request(e.to_string())),
        };

        if !status.is_success() {
            let body = serde_json::from_str(&text).ok();
            return Err(ApiError::Status { status, body });
        }
        Ok(text)
    }
}
