//! Request builders and response decoding for the employees backend.
//!
//! The UI fires requests with `ehttp::fetch`; everything here is pure so the
//! wire contract can be tested without a network. One decoder, [`check_reply`],
//! is applied to every endpoint: transport failures, non-2xx statuses and
//! 2xx bodies carrying `{"status": "error"}` all map to the same [`ApiError`]
//! taxonomy.

use serde_json::Value;

use crate::employee::{ChangePasswordRequest, EmployeePayload, EmployeeRecord};

/// Sortable list columns, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    EmpId,
    Name,
    Salary,
    Email,
    Department,
    JoinDate,
}

impl SortColumn {
    /// Value sent as the `sort_by` query parameter.
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::EmpId => "emp_id",
            Self::Name => "name",
            Self::Salary => "salary",
            Self::Email => "email",
            Self::Department => "department",
            Self::JoinDate => "join_date",
        }
    }

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::EmpId => "Emp ID",
            Self::Name => "Name",
            Self::Salary => "Salary",
            Self::Email => "Email",
            Self::Department => "Department",
            Self::JoinDate => "Join Date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Query parameters for `GET /get_users`. Unset fields are omitted from the
/// URL, so an empty query degenerates to the plain list endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListQuery {
    pub search: Option<String>,
    pub sort: Option<(SortColumn, SortOrder)>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListQuery {
    /// `""` when empty, otherwise `?k=v&...` with the search term
    /// percent-encoded.
    pub fn query_string(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        if let Some(search) = self.search.as_deref() {
            if !search.is_empty() {
                params.push(format!("search={}", urlencoding::encode(search)));
            }
        }
        if let Some((column, order)) = self.sort {
            params.push(format!("sort_by={}", column.as_query()));
            params.push(format!("order={}", order.as_query()));
        }
        if let Some(page) = self.page {
            params.push(format!("page={page}"));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={limit}"));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// What went wrong with a backend call. All variants are terminal for the
/// triggering action; the display string is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status; `message` is the backend's explanation when the body
    /// carried one.
    #[error("{}", http_display(.status, .message))]
    Http { status: u16, message: Option<String> },

    /// 2xx reply whose body marked the operation failed.
    #[error("{0}")]
    Backend(String),

    /// 2xx reply whose body could not be understood.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

fn http_display(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("HTTP {status}"),
    }
}

const JSON_CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

/// `GET {base}/get_users[?...]`
pub fn list_request(base_url: &str, query: &ListQuery) -> ehttp::Request {
    ehttp::Request::get(format!(
        "{base_url}/get_users{}",
        query.query_string()
    ))
}

/// `POST {base}/create_user` when `editing_id` is unset,
/// `PUT {base}/update_user/{id}` when set. Same payload shape either way.
pub fn save_request(
    base_url: &str,
    editing_id: Option<i64>,
    payload: &EmployeePayload,
) -> Result<ehttp::Request, ApiError> {
    let body = serde_json::to_vec(payload)
        .map_err(|e| ApiError::Decode(format!("serialize payload: {e}")))?;
    let (method, url) = match editing_id {
        None => ("POST", format!("{base_url}/create_user")),
        Some(id) => ("PUT", format!("{base_url}/update_user/{id}")),
    };
    Ok(ehttp::Request {
        method: method.to_owned(),
        url,
        body,
        headers: ehttp::Headers::new(&[JSON_CONTENT_TYPE]),
    })
}

/// `DELETE {base}/delete_user/{id}`
pub fn delete_request(base_url: &str, id: i64) -> ehttp::Request {
    ehttp::Request {
        method: "DELETE".to_owned(),
        url: format!("{base_url}/delete_user/{id}"),
        body: Vec::new(),
        headers: ehttp::Headers::default(),
    }
}

/// `POST {base}/api/change_password`
pub fn change_password_request(
    base_url: &str,
    current_password: &str,
    new_password: &str,
) -> Result<ehttp::Request, ApiError> {
    let body = serde_json::to_vec(&ChangePasswordRequest {
        current_password: current_password.to_owned(),
        new_password: new_password.to_owned(),
    })
    .map_err(|e| ApiError::Decode(format!("serialize payload: {e}")))?;
    Ok(ehttp::Request {
        method: "POST".to_owned(),
        url: format!("{base_url}/api/change_password"),
        body,
        headers: ehttp::Headers::new(&[JSON_CONTENT_TYPE]),
    })
}

/// The shared first step for every endpoint.
///
/// Returns the parsed JSON body (if any) on success. A body that fails to
/// parse on a 2xx reply yields `Ok(None)` here; callers that require a body
/// decide whether that is a decode error.
fn check_reply(result: Result<ehttp::Response, String>) -> Result<Option<Value>, ApiError> {
    let response = result.map_err(|err| {
        log::debug!("request failed before reaching the backend: {err}");
        ApiError::Network(err)
    })?;

    // Parse leniently: the body is also where non-2xx replies put their
    // explanation, and it may be empty or not JSON at all.
    let body: Option<Value> = serde_json::from_slice(&response.bytes).ok();

    if !(200..300).contains(&response.status) {
        let message = body
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(Value::as_str)
            .map(str::to_owned);
        return Err(ApiError::Http {
            status: response.status,
            message,
        });
    }

    if let Some(value) = &body {
        if value.get("status").and_then(Value::as_str) == Some("error") {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Request failed")
                .to_owned();
            return Err(ApiError::Backend(message));
        }
    }

    Ok(body)
}

/// Decode a list reply into the canonical record list.
///
/// Accepts both documented shapes: a bare JSON array, or an envelope exposing
/// the array under `data`.
pub fn decode_employee_list(
    result: Result<ehttp::Response, String>,
) -> Result<Vec<EmployeeRecord>, ApiError> {
    let body = check_reply(result)?
        .ok_or_else(|| ApiError::Decode("list reply had no JSON body".to_owned()))?;

    let records = match body {
        Value::Array(_) => body,
        Value::Object(mut map) => map
            .remove("data")
            .ok_or_else(|| ApiError::Decode("list reply had neither array nor data".to_owned()))?,
        _ => {
            return Err(ApiError::Decode(
                "list reply was not an array or envelope".to_owned(),
            ))
        }
    };

    serde_json::from_value(records).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a mutation reply into its user-facing message.
///
/// An empty or message-less body falls back to the caller's default (the
/// "Created"/"Updated"/"Deleted" strings).
pub fn decode_message(
    result: Result<ehttp::Response, String>,
    fallback: &str,
) -> Result<String, ApiError> {
    let body = check_reply(result)?;
    let message = body
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_owned();
    Ok(message)
}
