//! State for the employees panel: the list, the form, sorting, the debounced
//! search, and the pending delete confirmation.
//!
//! Everything the screen needs lives in one struct owned by `StateCtx`,
//! constructed once per app session. Deadlines are plain timestamps compared
//! against the app clock, so the debounce is testable without sleeping.

use std::any::Any;

use chrono::{DateTime, Duration, Utc};
use staffdesk_states::State;

use crate::api::{ListQuery, SortColumn, SortOrder};
use crate::employee::{EmployeePayload, EmployeeRecord};
use crate::format::to_input_date;

/// Quiet period after the last search keystroke before the list reloads.
pub const SEARCH_DEBOUNCE_MS: i64 = 350;

/// Visual tone of the status line under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Success,
    Error,
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusLine {
    fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Edit buffers for the six form fields. All plain strings; trimming and the
/// empty-date-to-null conversion happen when the payload is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub emp_id: String,
    pub name: String,
    pub salary: String,
    pub email: String,
    pub department: String,
    pub join_date: String,
}

impl EmployeeForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Load an existing record for editing. Salary comes from the raw field
    /// value, never from the formatted cell text; the join date is normalized
    /// to the editable ISO form.
    pub fn load(&mut self, record: &EmployeeRecord) {
        self.emp_id = record.emp_id.clone();
        self.name = record.name.clone();
        self.salary = record
            .salary
            .as_ref()
            .map(|s| s.as_input())
            .unwrap_or_default();
        self.email = record.email.clone();
        self.department = record.department.clone();
        self.join_date = to_input_date(record.join_date.as_deref().unwrap_or(""));
    }

    pub fn to_payload(&self) -> EmployeePayload {
        let join_date = self.join_date.trim();
        EmployeePayload {
            emp_id: self.emp_id.trim().to_owned(),
            name: self.name.trim().to_owned(),
            salary: self.salary.trim().to_owned(),
            email: self.email.trim().to_owned(),
            department: self.department.trim().to_owned(),
            join_date: if join_date.is_empty() {
                None
            } else {
                Some(join_date.to_owned())
            },
        }
    }
}

/// All mutable state behind the employees panel.
#[derive(Default)]
pub struct EmployeesState {
    /// Rows as last fetched. Rendering and CSV export both read from here.
    pub employees: Vec<EmployeeRecord>,
    /// Whether a list fetch is in flight.
    pub is_fetching: bool,
    /// Error shown in place of the table rows.
    pub list_error: Option<String>,

    /// `Some(id)` while editing an existing record; governs POST vs PUT and
    /// disables the `emp_id` field. Starting a new edit silently replaces an
    /// unsaved one.
    pub editing_id: Option<i64>,
    pub form: EmployeeForm,
    /// Whether a create/update request is in flight.
    pub saving: bool,
    pub status: Option<StatusLine>,

    /// Sort driving the list query. `None` means server default order.
    pub current_sort: Option<(SortColumn, SortOrder)>,
    pub search_input: String,
    search_deadline: Option<DateTime<Utc>>,

    /// Record awaiting delete confirmation. Carries the full record so the
    /// modal can name it without re-reading rendered cells.
    pub pending_delete: Option<EmployeeRecord>,
    pub delete_in_progress: bool,
    pub delete_error: Option<String>,
}

impl State for EmployeesState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl EmployeesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The query for the next list fetch, derived from search and sort.
    pub fn list_query(&self) -> ListQuery {
        let search = self.search_input.trim();
        ListQuery {
            search: if search.is_empty() {
                None
            } else {
                Some(search.to_owned())
            },
            sort: self.current_sort,
            page: None,
            limit: None,
        }
    }

    pub fn set_fetching(&mut self) {
        self.is_fetching = true;
        self.list_error = None;
    }

    pub fn update_employees(&mut self, employees: Vec<EmployeeRecord>) {
        self.employees = employees;
        self.is_fetching = false;
        self.list_error = None;
    }

    pub fn set_list_error(&mut self, error: String) {
        self.list_error = Some(error);
        self.is_fetching = false;
    }

    // ----- form / edit mode -----

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Enter edit mode for a record. Any in-progress edit is discarded.
    pub fn begin_edit(&mut self, record: &EmployeeRecord) {
        self.form.load(record);
        self.editing_id = Some(record.id);
        self.status = Some(StatusLine::new(
            format!("Editing employee #{} - edit fields and save", record.id),
            StatusTone::Editing,
        ));
    }

    pub fn begin_save(&mut self) {
        self.saving = true;
        self.status = Some(StatusLine::new("Saving...", StatusTone::Neutral));
    }

    /// Apply a successful save: show the server message (or a mode-specific
    /// fallback), clear the form, and leave edit mode. The caller triggers
    /// the list reload.
    pub fn save_succeeded(&mut self, message: Option<String>) {
        let fallback = if self.is_editing() { "Updated" } else { "Created" };
        let text = message.unwrap_or_else(|| fallback.to_owned());
        self.status = Some(StatusLine::new(text, StatusTone::Success));
        self.form.clear();
        self.editing_id = None;
        self.saving = false;
    }

    pub fn save_failed(&mut self, message: String) {
        self.status = Some(StatusLine::new(
            format!("Error: {message}"),
            StatusTone::Error,
        ));
        self.saving = false;
    }

    // ----- search debounce -----

    /// Called on every search keystroke; restarts the quiet-period timer.
    pub fn note_search_edited(&mut self, now: DateTime<Utc>) {
        self.search_deadline = Some(now + Duration::milliseconds(SEARCH_DEBOUNCE_MS));
    }

    /// True exactly once when the quiet period has elapsed; clears the timer.
    pub fn take_due_search(&mut self, now: DateTime<Utc>) -> bool {
        match self.search_deadline {
            Some(deadline) if now >= deadline => {
                self.search_deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Pending debounce deadline, for repaint scheduling.
    pub fn search_deadline(&self) -> Option<DateTime<Utc>> {
        self.search_deadline
    }

    // ----- sorting -----

    /// Header click: new column sorts ascending, same column flips the order.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.current_sort = Some(match self.current_sort {
            Some((current, order)) if current == column => (column, order.flipped()),
            _ => (column, SortOrder::Asc),
        });
    }

    // ----- delete confirmation -----

    pub fn request_delete(&mut self, record: EmployeeRecord) {
        self.pending_delete = Some(record);
        self.delete_in_progress = false;
        self.delete_error = None;
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.delete_in_progress = false;
        self.delete_error = None;
    }

    pub fn begin_delete(&mut self) {
        self.delete_in_progress = true;
        self.delete_error = None;
    }

    pub fn delete_failed(&mut self, message: String) {
        self.delete_error = Some(message);
        self.delete_in_progress = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::SalaryField;

    fn record() -> EmployeeRecord {
        EmployeeRecord {
            id: 12,
            emp_id: "E-12".to_owned(),
            name: "Asha".to_owned(),
            salary: Some(SalaryField::Number(50000.0)),
            email: "asha@example.com".to_owned(),
            department: "QA".to_owned(),
            join_date: Some("15-Mar-2023".to_owned()),
        }
    }

    #[test]
    fn begin_edit_populates_form_and_enters_edit_mode() {
        let mut state = EmployeesState::new();
        state.begin_edit(&record());

        assert_eq!(state.editing_id, Some(12));
        assert_eq!(state.form.emp_id, "E-12");
        // Raw value, not the formatted "₹ 50,000" cell text.
        assert_eq!(state.form.salary, "50000");
        // Backend display form normalized for the date input.
        assert_eq!(state.form.join_date, "2023-03-15");
        assert!(matches!(
            state.status,
            Some(StatusLine {
                tone: StatusTone::Editing,
                ..
            })
        ));
    }

    #[test]
    fn new_edit_discards_previous_edit() {
        let mut state = EmployeesState::new();
        state.begin_edit(&record());
        state.form.name = "half-typed change".to_owned();

        let mut other = record();
        other.id = 99;
        other.name = "Ravi".to_owned();
        state.begin_edit(&other);

        assert_eq!(state.editing_id, Some(99));
        assert_eq!(state.form.name, "Ravi");
    }

    #[test]
    fn save_succeeded_leaves_edit_mode_and_clears_form() {
        let mut state = EmployeesState::new();
        state.begin_edit(&record());
        state.begin_save();
        state.save_succeeded(None);

        assert_eq!(state.editing_id, None);
        assert_eq!(state.form, EmployeeForm::default());
        assert!(!state.saving);
        assert_eq!(state.status.as_ref().map(|s| s.text.as_str()), Some("Updated"));
    }

    #[test]
    fn save_succeeded_fallback_depends_on_mode() {
        let mut state = EmployeesState::new();
        state.save_succeeded(None);
        assert_eq!(state.status.as_ref().map(|s| s.text.as_str()), Some("Created"));

        state.save_succeeded(Some("User created successfully!".to_owned()));
        assert_eq!(
            state.status.as_ref().map(|s| s.text.as_str()),
            Some("User created successfully!")
        );
    }

    #[test]
    fn payload_trims_fields_and_nulls_empty_date() {
        let mut state = EmployeesState::new();
        state.form.emp_id = " E-1 ".to_owned();
        state.form.name = "Asha ".to_owned();
        state.form.join_date = "  ".to_owned();

        let payload = state.form.to_payload();
        assert_eq!(payload.emp_id, "E-1");
        assert_eq!(payload.name, "Asha");
        assert_eq!(payload.join_date, None);
    }

    #[test]
    fn rapid_keystrokes_fire_exactly_one_reload() {
        let mut state = EmployeesState::new();
        let t0 = Utc::now();

        state.note_search_edited(t0);
        state.note_search_edited(t0 + Duration::milliseconds(100));
        state.note_search_edited(t0 + Duration::milliseconds(200));

        // Still inside the quiet period of the last keystroke.
        assert!(!state.take_due_search(t0 + Duration::milliseconds(400)));

        // Quiet period elapsed: fires once, then never again.
        assert!(state.take_due_search(t0 + Duration::milliseconds(551)));
        assert!(!state.take_due_search(t0 + Duration::milliseconds(600)));
    }

    #[test]
    fn keystroke_restarts_pending_timer() {
        let mut state = EmployeesState::new();
        let t0 = Utc::now();

        state.note_search_edited(t0);
        state.note_search_edited(t0 + Duration::milliseconds(300));

        // The first deadline (t0 + 350) must no longer fire.
        assert!(!state.take_due_search(t0 + Duration::milliseconds(360)));
        assert!(state.take_due_search(t0 + Duration::milliseconds(651)));
    }

    #[test]
    fn toggle_sort_cycles_order() {
        let mut state = EmployeesState::new();
        state.toggle_sort(SortColumn::Name);
        assert_eq!(state.current_sort, Some((SortColumn::Name, SortOrder::Asc)));

        state.toggle_sort(SortColumn::Name);
        assert_eq!(state.current_sort, Some((SortColumn::Name, SortOrder::Desc)));

        // Switching columns resets to ascending.
        state.toggle_sort(SortColumn::Salary);
        assert_eq!(
            state.current_sort,
            Some((SortColumn::Salary, SortOrder::Asc))
        );
    }

    #[test]
    fn list_query_reflects_search_and_sort() {
        let mut state = EmployeesState::new();
        state.search_input = "  asha  ".to_owned();
        state.toggle_sort(SortColumn::Salary);

        let query = state.list_query();
        assert_eq!(query.search.as_deref(), Some("asha"));
        assert_eq!(query.sort, Some((SortColumn::Salary, SortOrder::Asc)));
    }

    #[test]
    fn delete_flow_carries_the_record() {
        let mut state = EmployeesState::new();
        state.request_delete(record());
        assert_eq!(state.pending_delete.as_ref().map(|r| r.id), Some(12));

        state.delete_failed("Employee not found".to_owned());
        assert_eq!(state.delete_error.as_deref(), Some("Employee not found"));
        assert!(!state.delete_in_progress);

        state.cancel_delete();
        assert!(state.pending_delete.is_none());
        assert!(state.delete_error.is_none());
    }
}
