//! Employees list panel: toolbar, sortable table, and the per-frame response
//! poller.

use egui::{Color32, Frame, Margin, Response, RichText, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};
use staffdesk_business::{
    employees_to_csv, format_salary, ApiError, EmployeeRecord, EmployeesState,
    PasswordChangeState, SortColumn, SortOrder,
};
use staffdesk_states::{StateCtx, Time};

use super::api;
use super::modals::{show_delete_modal, show_password_modal};

const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);
const BADGE_BG: Color32 = Color32::from_rgb(52, 73, 94);

/// Table columns in render order.
const COLUMNS: [SortColumn; 7] = [
    SortColumn::Id,
    SortColumn::EmpId,
    SortColumn::Name,
    SortColumn::Salary,
    SortColumn::Email,
    SortColumn::Department,
    SortColumn::JoinDate,
];

/// Displays the employees table with its toolbar, plus any open modal.
pub fn employees_panel(state_ctx: &mut StateCtx, api_base_url: &str, ui: &mut Ui) -> Response {
    let now = state_ctx.state_mut::<Time>().now();

    let response = ui.vertical(|ui| {
        let mut open_password = false;
        let mut export_csv = false;

        // Toolbar row: search, refresh, export, password change.
        let state = state_ctx.state_mut::<EmployeesState>();
        ui.horizontal(|ui| {
            let search = ui.add(
                TextEdit::singleline(&mut state.search_input)
                    .hint_text("Search employees...")
                    .desired_width(220.0),
            );
            if search.changed() {
                state.note_search_edited(now);
            }

            if ui.button("🔄 Refresh").clicked() && !state.is_fetching {
                state.set_fetching();
                api::fetch_employees(api_base_url, &state.list_query(), ui.ctx().clone());
            }

            export_csv = ui.button("📄 Export CSV").clicked();
            open_password = ui.button("🔑 Change Password").clicked();

            if state.is_fetching {
                ui.spinner();
                ui.label("Loading...");
            }
        });

        if let Some(error) = &state.list_error {
            ui.colored_label(COLOR_RED, format!("Error loading employees: {error}"));
        }

        ui.add_space(8.0);

        // Collect row actions outside the table closures.
        let mut sort_clicked: Option<SortColumn> = None;
        let mut edit_target: Option<EmployeeRecord> = None;
        let mut delete_target: Option<EmployeeRecord> = None;

        render_table(ui, state, &mut sort_clicked, &mut edit_target, &mut delete_target);

        if state.employees.is_empty() && state.list_error.is_none() && !state.is_fetching {
            ui.add_space(8.0);
            ui.label(RichText::new("No employees found").italics());
        }

        if export_csv {
            let csv = employees_to_csv(&state.employees);
            crate::utils::export::save_csv(&csv);
        }

        if let Some(column) = sort_clicked {
            state.toggle_sort(column);
            state.set_fetching();
            api::fetch_employees(api_base_url, &state.list_query(), ui.ctx().clone());
        }
        if let Some(record) = edit_target {
            state.begin_edit(&record);
        }
        if let Some(record) = delete_target {
            state.request_delete(record);
        }

        if open_password {
            state_ctx.state_mut::<PasswordChangeState>().open_modal();
        }
    });

    show_delete_modal(state_ctx.state_mut::<EmployeesState>(), api_base_url, ui);
    show_password_modal(state_ctx.state_mut::<PasswordChangeState>(), api_base_url, ui);

    response.response
}

fn render_table(
    ui: &mut Ui,
    state: &EmployeesState,
    sort_clicked: &mut Option<SortColumn>,
    edit_target: &mut Option<EmployeeRecord>,
    delete_target: &mut Option<EmployeeRecord>,
) {
    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().at_least(40.0), COLUMNS.len())
        .column(Column::remainder().at_least(120.0))
        .header(24.0, |mut header| {
            for column in COLUMNS {
                header.col(|ui| {
                    if ui.button(header_label(state, column)).clicked() {
                        *sort_clicked = Some(column);
                    }
                });
            }
            header.col(|ui| {
                ui.strong("Actions");
            });
        })
        .body(|mut body| {
            for record in &state.employees {
                body.row(26.0, |mut row| {
                    row.col(|ui| {
                        ui.label(record.id.to_string());
                    });
                    row.col(|ui| {
                        ui.label(&record.emp_id);
                    });
                    row.col(|ui| {
                        ui.label(&record.name);
                    });
                    row.col(|ui| {
                        ui.label(format_salary(record.salary.as_ref()));
                    });
                    row.col(|ui| {
                        ui.label(&record.email);
                    });
                    row.col(|ui| {
                        department_badge(ui, &record.department);
                    });
                    row.col(|ui| {
                        ui.label(record.join_date.as_deref().unwrap_or(""));
                    });
                    row.col(|ui| {
                        ui.horizontal(|ui| {
                            if ui.button("✏ Edit").clicked() {
                                *edit_target = Some(record.clone());
                            }
                            if ui.button("🗑 Delete").clicked() {
                                *delete_target = Some(record.clone());
                            }
                        });
                    });
                });
            }
        });
}

/// Header text with a direction arrow on the active sort column.
fn header_label(state: &EmployeesState, column: SortColumn) -> String {
    match state.current_sort {
        Some((active, order)) if active == column => {
            let arrow = match order {
                SortOrder::Asc => "↑",
                SortOrder::Desc => "↓",
            };
            format!("{} {arrow}", column.label())
        }
        _ => column.label().to_owned(),
    }
}

fn department_badge(ui: &mut Ui, department: &str) {
    if department.is_empty() {
        return;
    }
    Frame::new()
        .fill(BADGE_BG)
        .inner_margin(Margin::symmetric(6, 2))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.label(RichText::new(department).color(Color32::WHITE).small());
        });
}

/// Poll for async responses parked by the `api` module and fold them into
/// state. Call this once per frame, before rendering.
pub fn poll_employee_responses(state_ctx: &mut StateCtx, api_base_url: &str, ctx: &egui::Context) {
    // List fetch outcome.
    if let Some(outcome) = ctx.memory_mut(|mem| {
        let outcome = mem
            .data
            .get_temp::<Result<Vec<EmployeeRecord>, ApiError>>(api::list_result_id());
        mem.data
            .remove::<Result<Vec<EmployeeRecord>, ApiError>>(api::list_result_id());
        outcome
    }) {
        let state = state_ctx.state_mut::<EmployeesState>();
        match outcome {
            Ok(employees) => {
                log::info!("loaded {} employees", employees.len());
                state.update_employees(employees);
            }
            Err(err) => {
                log::error!("list fetch failed: {err}");
                state.set_list_error(err.to_string());
            }
        }
    }

    // Create/update outcome. Success reloads the list so the new row shows
    // the backend's canonical values.
    if let Some(outcome) = ctx.memory_mut(|mem| {
        let outcome = mem
            .data
            .get_temp::<Result<String, ApiError>>(api::save_result_id());
        mem.data
            .remove::<Result<String, ApiError>>(api::save_result_id());
        outcome
    }) {
        let state = state_ctx.state_mut::<EmployeesState>();
        match outcome {
            Ok(message) => {
                state.save_succeeded(Some(message));
                state.set_fetching();
                api::fetch_employees(api_base_url, &state.list_query(), ctx.clone());
            }
            Err(err) => {
                log::error!("save failed: {err}");
                state.save_failed(err.to_string());
            }
        }
    }

    // Delete outcome.
    if let Some(outcome) = ctx.memory_mut(|mem| {
        let outcome = mem
            .data
            .get_temp::<Result<String, ApiError>>(api::delete_result_id());
        mem.data
            .remove::<Result<String, ApiError>>(api::delete_result_id());
        outcome
    }) {
        let state = state_ctx.state_mut::<EmployeesState>();
        match outcome {
            Ok(_) => {
                state.cancel_delete();
                state.set_fetching();
                api::fetch_employees(api_base_url, &state.list_query(), ctx.clone());
            }
            Err(err) => {
                log::error!("delete failed: {err}");
                state.delete_failed(err.to_string());
            }
        }
    }

    // Password change outcome.
    if let Some(outcome) = ctx.memory_mut(|mem| {
        let outcome = mem
            .data
            .get_temp::<Result<String, ApiError>>(api::password_result_id());
        mem.data
            .remove::<Result<String, ApiError>>(api::password_result_id());
        outcome
    }) {
        let now = state_ctx.state_mut::<Time>().now();
        let state = state_ctx.state_mut::<PasswordChangeState>();
        match outcome {
            Ok(message) => state.submit_succeeded(message, now),
            Err(err) => state.submit_failed(err.to_string()),
        }
    }
}
