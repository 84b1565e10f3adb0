//! CSV export of the rows currently held in state.
//!
//! The export mirrors what the table shows (formatted salary, verbatim join
//! date) rather than refetching. Commas are stripped from cell text instead
//! of quoted, so the output is spreadsheet-openable rather than RFC 4180.

use crate::employee::EmployeeRecord;
use crate::format::format_salary;

/// Fixed header row, matching the on-screen column order.
pub const CSV_HEADER: &str = "ID,Employee ID,Name,Salary,Email,Department,Join Date";

/// Serialize records into CSV text, one line per record plus the header.
pub fn employees_to_csv(records: &[EmployeeRecord]) -> String {
    let mut out = String::with_capacity(64 * (records.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');

    for record in records {
        let row = [
            record.id.to_string(),
            record.emp_id.clone(),
            record.name.clone(),
            format_salary(record.salary.as_ref()),
            record.email.clone(),
            record.department.clone(),
            record.join_date.clone().unwrap_or_default(),
        ];
        let cells: Vec<String> = row.iter().map(|cell| cell.replace(',', "")).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::SalaryField;

    fn record(id: i64, name: &str, salary: f64) -> EmployeeRecord {
        EmployeeRecord {
            id,
            emp_id: format!("E-{id}"),
            name: name.to_owned(),
            salary: Some(SalaryField::Number(salary)),
            email: format!("{}@example.com", name.to_lowercase()),
            department: "QA".to_owned(),
            join_date: Some("15-Mar-2023".to_owned()),
        }
    }

    #[test]
    fn header_row_always_present() {
        let csv = employees_to_csv(&[]);
        assert_eq!(csv, format!("{CSV_HEADER}\n"));
    }

    #[test]
    fn rows_follow_display_formatting() {
        let csv = employees_to_csv(&[record(1, "Asha", 50000.0)]);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        // Formatted salary with its grouping commas stripped.
        assert_eq!(
            lines.next(),
            Some("1,E-1,Asha,₹ 50000,asha@example.com,QA,15-Mar-2023")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn commas_inside_cells_are_stripped() {
        let mut rec = record(2, "Ravi", 62000.0);
        rec.department = "Sales, EMEA".to_owned();
        let csv = employees_to_csv(&[rec]);
        let data_line = csv.lines().nth(1).expect("data row");
        assert!(data_line.contains("Sales EMEA"));
        // Still exactly seven columns.
        assert_eq!(data_line.split(',').count(), 7);
    }
}
