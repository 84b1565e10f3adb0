//! Employees management screen.
//!
//! - `api`: fire-and-forget backend calls
//! - `form`: the create/edit form
//! - `panel`: toolbar, table, and the per-frame response poller
//! - `modals`: delete confirmation and password change dialogs

pub mod api;
mod form;
mod modals;
mod panel;

pub use form::employee_form;
pub use panel::{employees_panel, poll_employee_responses};
