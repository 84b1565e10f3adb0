//! Create/edit form for a single employee.
//!
//! The same six fields serve both modes; `editing_id` in [`EmployeesState`]
//! decides whether submit creates or updates, and locks the `emp_id` field
//! while editing.

use egui::{Color32, Grid, Response, TextEdit, Ui};
use staffdesk_business::{EmployeesState, StatusLine, StatusTone};
use staffdesk_states::StateCtx;

use super::api;

const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);
const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);
const COLOR_AMBER: Color32 = Color32::from_rgb(255, 165, 0);

/// Displays the employee form with its status line and submit controls.
pub fn employee_form(state_ctx: &mut StateCtx, api_base_url: &str, ui: &mut Ui) -> Response {
    let state = state_ctx.state_mut::<EmployeesState>();

    let mut submit = false;
    let mut cancel = false;

    let response = ui
        .vertical(|ui| {
            ui.heading(if state.is_editing() {
                "Edit Employee"
            } else {
                "Add Employee"
            });
            ui.add_space(8.0);

            Grid::new("employee_form")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Employee ID:");
                    // Locked while editing; the backend key never changes.
                    ui.add_enabled(
                        !state.is_editing(),
                        TextEdit::singleline(&mut state.form.emp_id).desired_width(220.0),
                    );
                    ui.end_row();

                    ui.label("Name:");
                    ui.add(TextEdit::singleline(&mut state.form.name).desired_width(220.0));
                    ui.end_row();

                    ui.label("Salary:");
                    ui.add(TextEdit::singleline(&mut state.form.salary).desired_width(220.0));
                    ui.end_row();

                    ui.label("Email:");
                    ui.add(TextEdit::singleline(&mut state.form.email).desired_width(220.0));
                    ui.end_row();

                    ui.label("Department:");
                    ui.add(TextEdit::singleline(&mut state.form.department).desired_width(220.0));
                    ui.end_row();

                    ui.label("Join Date:");
                    ui.add(
                        TextEdit::singleline(&mut state.form.join_date)
                            .hint_text("YYYY-MM-DD")
                            .desired_width(220.0),
                    );
                    ui.end_row();
                });

            if let Some(status) = &state.status {
                ui.add_space(4.0);
                ui.colored_label(tone_color(status.tone), &status.text);
            }

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let label = if state.is_editing() {
                    "Save Changes"
                } else {
                    "Create Employee"
                };
                if ui
                    .add_enabled(!state.saving, egui::Button::new(label))
                    .clicked()
                {
                    submit = true;
                }

                if state.is_editing() && ui.button("Cancel").clicked() {
                    cancel = true;
                }

                if state.saving {
                    ui.spinner();
                }
            });
        })
        .response;

    if cancel {
        state.form.clear();
        state.editing_id = None;
        state.status = None;
    }

    if submit {
        let payload = state.form.to_payload();
        if payload.emp_id.is_empty()
            || payload.name.is_empty()
            || payload.salary.is_empty()
            || payload.email.is_empty()
            || payload.department.is_empty()
        {
            state.status = Some(StatusLine {
                text: "All fields except Join Date are required".to_owned(),
                tone: StatusTone::Error,
            });
        } else {
            let editing_id = state.editing_id;
            state.begin_save();
            api::save_employee(api_base_url, editing_id, &payload, ui.ctx().clone());
        }
    }

    response
}

fn tone_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Neutral => Color32::GRAY,
        StatusTone::Success => COLOR_GREEN,
        StatusTone::Error => COLOR_RED,
        StatusTone::Editing => COLOR_AMBER,
    }
}
