use staffdesk_business::{AdminConfig, EmployeesState, PasswordChangeState};
use staffdesk_states::Time;

use crate::{state::State, widgets};

pub struct StaffdeskApp {
    state: State,
    /// Whether the initial list fetch has been fired.
    bootstrapped: bool,
}

impl StaffdeskApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            bootstrapped: false,
        }
    }

    fn api_base_url(&mut self) -> String {
        self.state
            .ctx
            .state_mut::<AdminConfig>()
            .api_url()
            .to_owned()
    }
}

impl eframe::App for StaffdeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.ctx.state_mut::<Time>().tick();
        let api_base_url = self.api_base_url();

        // Fold completed backend calls into state before rendering.
        widgets::poll_employee_responses(&mut self.state.ctx, &api_base_url, ctx);

        if !self.bootstrapped {
            self.bootstrapped = true;
            let employees = self.state.ctx.state_mut::<EmployeesState>();
            employees.set_fetching();
            widgets::employees::api::fetch_employees(
                &api_base_url,
                &employees.list_query(),
                ctx.clone(),
            );
        }

        let now = self.state.ctx.state_mut::<Time>().now();

        // Debounced search: reload once the quiet period elapses.
        let employees = self.state.ctx.state_mut::<EmployeesState>();
        if employees.take_due_search(now) {
            employees.set_fetching();
            widgets::employees::api::fetch_employees(
                &api_base_url,
                &employees.list_query(),
                ctx.clone(),
            );
        }
        let search_deadline = employees.search_deadline();

        let password = self.state.ctx.state_mut::<PasswordChangeState>();
        if password.should_auto_close(now) {
            password.close_modal();
        }
        let close_deadline = password.close_deadline();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.heading("Employee Management System");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                widgets::employee_form(&mut self.state.ctx, &api_base_url, ui);
                ui.separator();
                widgets::employees_panel(&mut self.state.ctx, &api_base_url, ui);
            });
        });

        // Wake up when a pending deadline passes instead of repainting every
        // frame.
        for deadline in [search_deadline, close_deadline].into_iter().flatten() {
            let wait = (deadline - now).to_std().unwrap_or_default();
            ctx.request_repaint_after(wait);
        }
    }
}
