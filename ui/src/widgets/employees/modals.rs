//! Modal dialogs: delete confirmation and the password change form.

use egui::{Color32, RichText, TextEdit, Ui, Window};
use staffdesk_business::{EmployeesState, PasswordChangeState};

use super::api;

const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);
const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);
const COLOR_AMBER: Color32 = Color32::from_rgb(255, 165, 0);

/// Shows the delete confirmation when a record is pending deletion.
pub fn show_delete_modal(state: &mut EmployeesState, api_base_url: &str, ui: &mut Ui) {
    let Some(record) = state.pending_delete.clone() else {
        return;
    };
    let mut open = true;

    Window::new("Delete Employee")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            if let Some(error) = &state.delete_error {
                ui.colored_label(COLOR_RED, format!("Error: {error}"));
                ui.add_space(8.0);
            }

            if state.delete_in_progress {
                ui.label("Deleting...");
                ui.spinner();
                return;
            }

            ui.colored_label(COLOR_AMBER, "⚠ Warning");
            ui.add_space(4.0);
            ui.label(format!(
                "Are you sure you want to delete '{}' ({})?",
                record.name, record.emp_id
            ));
            ui.label("This action cannot be undone.");

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("Delete").color(COLOR_RED))
                    .clicked()
                {
                    state.begin_delete();
                    api::delete_employee(api_base_url, record.id, ui.ctx().clone());
                }

                if ui.button("Cancel").clicked() {
                    state.cancel_delete();
                }
            });
        });

    if !open {
        state.cancel_delete();
    }
}

/// Shows the password change modal while it is open.
pub fn show_password_modal(state: &mut PasswordChangeState, api_base_url: &str, ui: &mut Ui) {
    if !state.open {
        return;
    }
    let mut open = true;

    Window::new("Change Password")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            if let Some(message) = &state.success {
                ui.colored_label(COLOR_GREEN, message);
                return;
            }

            if state.in_progress {
                ui.label("Updating password...");
                ui.spinner();
                return;
            }

            if let Some(alert) = &state.alert {
                ui.colored_label(COLOR_RED, alert);
                ui.add_space(8.0);
            }

            egui::Grid::new("password_form")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Current Password:");
                    ui.add(
                        TextEdit::singleline(&mut state.current_password)
                            .password(true)
                            .desired_width(180.0),
                    );
                    ui.end_row();

                    ui.label("New Password:");
                    ui.add(
                        TextEdit::singleline(&mut state.new_password)
                            .password(true)
                            .desired_width(180.0),
                    );
                    ui.end_row();

                    ui.label("Confirm New Password:");
                    ui.add(
                        TextEdit::singleline(&mut state.confirm_password)
                            .password(true)
                            .desired_width(180.0),
                    );
                    ui.end_row();
                });

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button("Update Password").clicked() {
                    match state.validate() {
                        Ok(()) => {
                            state.begin_submit();
                            api::change_password(
                                api_base_url,
                                &state.current_password,
                                &state.new_password,
                                ui.ctx().clone(),
                            );
                        }
                        Err(message) => state.submit_failed(message),
                    }
                }

                if ui.button("Cancel").clicked() {
                    state.close_modal();
                }
            });
        });

    if !open {
        state.close_modal();
    }
}
