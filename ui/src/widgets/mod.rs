pub mod employees;

pub use employees::{employee_form, employees_panel, poll_employee_responses};
