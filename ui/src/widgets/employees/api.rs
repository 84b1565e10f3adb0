//! Fire-and-forget backend calls for the employees screen.
//!
//! Each call goes out through `ehttp::fetch`; the decoded outcome is parked
//! in egui temp memory under a fixed id and picked up on the next frame by
//! [`super::panel::poll_employee_responses`]. Every callback requests a
//! repaint so a response is never stuck waiting for user input.

use staffdesk_business::{
    change_password_request, decode_employee_list, decode_message, delete_request, list_request,
    save_request, ApiError, EmployeePayload, EmployeeRecord, ListQuery,
};

pub(crate) fn list_result_id() -> egui::Id {
    egui::Id::new("employees_list_result")
}

pub(crate) fn save_result_id() -> egui::Id {
    egui::Id::new("employee_save_result")
}

pub(crate) fn delete_result_id() -> egui::Id {
    egui::Id::new("employee_delete_result")
}

pub(crate) fn password_result_id() -> egui::Id {
    egui::Id::new("password_change_result")
}

/// Fetch the employee list with the given search/sort query.
pub fn fetch_employees(api_base_url: &str, query: &ListQuery, ctx: egui::Context) {
    let request = list_request(api_base_url, query);
    log::debug!("fetching employees: {}", request.url);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        let outcome: Result<Vec<EmployeeRecord>, ApiError> = decode_employee_list(result);
        ctx.memory_mut(|mem| mem.data.insert_temp(list_result_id(), outcome));
    });
}

/// Create a new employee or, when `editing_id` is set, update an existing one.
pub fn save_employee(
    api_base_url: &str,
    editing_id: Option<i64>,
    payload: &EmployeePayload,
    ctx: egui::Context,
) {
    let fallback = if editing_id.is_some() {
        "Updated"
    } else {
        "Created"
    };

    match save_request(api_base_url, editing_id, payload) {
        Ok(request) => {
            log::debug!("saving employee: {} {}", request.method, request.url);
            ehttp::fetch(request, move |result| {
                ctx.request_repaint();
                let outcome = decode_message(result, fallback);
                ctx.memory_mut(|mem| mem.data.insert_temp(save_result_id(), outcome));
            });
        }
        Err(err) => {
            ctx.memory_mut(|mem| {
                mem.data
                    .insert_temp(save_result_id(), Err::<String, ApiError>(err));
            });
        }
    }
}

/// Delete an employee by id.
pub fn delete_employee(api_base_url: &str, id: i64, ctx: egui::Context) {
    let request = delete_request(api_base_url, id);
    log::debug!("deleting employee: {}", request.url);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        let outcome = decode_message(result, "Deleted");
        ctx.memory_mut(|mem| mem.data.insert_temp(delete_result_id(), outcome));
    });
}

/// Submit an admin password change.
pub fn change_password(
    api_base_url: &str,
    current_password: &str,
    new_password: &str,
    ctx: egui::Context,
) {
    match change_password_request(api_base_url, current_password, new_password) {
        Ok(request) => {
            ehttp::fetch(request, move |result| {
                ctx.request_repaint();
                let outcome = decode_message(result, "Password changed");
                ctx.memory_mut(|mem| mem.data.insert_temp(password_result_id(), outcome));
            });
        }
        Err(err) => {
            ctx.memory_mut(|mem| {
                mem.data
                    .insert_temp(password_result_id(), Err::<String, ApiError>(err));
            });
        }
    }
}
