//! HTTP API Client
//!
//! Functions for communicating with the student records API.

use gloo_net::http::{Request, Response};
use std::collections::HashMap;

use crate::state::{Draft, RecordId, StudentRecord};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Local storage key overriding the API base URL
pub const API_URL_KEY: &str = "roster_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_base(&url)
}

/// Remove trailing slashes
pub fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn record_url(api_base: &str, id: &RecordId) -> String {
    let id: String = js_sys::encode_uri_component(&id.to_string()).into();
    format!("{}/student/{}", api_base, id)
}

/// Pull the message out of an error body like `{"Error occurred": "..."}`
pub fn error_message(body: &str, fallback: &str) -> String {
    match serde_json::from_str::<HashMap<String, String>>(body) {
        Ok(map) if map.len() == 1 => map.into_values().next().unwrap_or_default(),
        _ if body.trim().is_empty() => fallback.to_string(),
        _ => body.trim().to_string(),
    }
}

async fn check(response: Response, fallback: &str) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(format!("{} ({})", error_message(&body, fallback), response.status()))
}

// ============ API Functions ============

/// Fetch all students
pub async fn fetch_students() -> Result<Vec<StudentRecord>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/students", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let response = check(response, "Unable to load students").await?;

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch one student
pub async fn fetch_student(id: &RecordId) -> Result<StudentRecord, String> {
    let api_base = get_api_base();

    let response = Request::get(&record_url(&api_base, id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let response = check(response, "Student not found").await?;

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a new student
pub async fn create_student(draft: &Draft) -> Result<StudentRecord, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/student", api_base))
        .json(draft)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let response = check(response, "Unable to create student").await?;

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Update an existing student
pub async fn update_student(id: &RecordId, draft: &Draft) -> Result<StudentRecord, String> {
    let api_base = get_api_base();

    let response = Request::put(&record_url(&api_base, id))
        .json(draft)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let response = check(response, "Unable to update student").await?;

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a student
pub async fn delete_student(id: &RecordId) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::delete(&record_url(&api_base, id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    check(response, "Unable to delete student").await?;
    Ok(())
}
