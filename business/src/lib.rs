//! Business layer for Staffdesk.
//!
//! Everything the UI needs that is not rendering lives here:
//! - record/payload types and their serde shapes ([`employee`])
//! - request builders and the unified response decoder ([`api`])
//! - salary/date display helpers ([`format`])
//! - CSV serialization of rendered rows ([`csv`])
//! - the mutable UI state structs and their lifecycle ([`employees_state`],
//!   [`password_state`])
//!
//! Network IO itself happens in the UI crate via `ehttp::fetch`; this crate
//! only builds [`ehttp::Request`] values and decodes [`ehttp::Response`]
//! results, so all of it is testable without a running backend.

mod api;
mod config;
mod csv;
mod employee;
mod employees_state;
mod format;
mod password_state;

pub use api::{
    change_password_request, decode_employee_list, decode_message, delete_request, list_request,
    save_request, ApiError, ListQuery, SortColumn, SortOrder,
};
pub use config::AdminConfig;
pub use csv::{employees_to_csv, CSV_HEADER};
pub use employee::{ChangePasswordRequest, EmployeePayload, EmployeeRecord, SalaryField};
pub use employees_state::{
    EmployeeForm, EmployeesState, StatusLine, StatusTone, SEARCH_DEBOUNCE_MS,
};
pub use format::{format_salary, to_input_date};
pub use password_state::{PasswordChangeState, PASSWORD_CLOSE_DELAY_MS};
