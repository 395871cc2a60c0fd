//! Column layouts of the example screens.

use gridview::{Align, CellColor, Column, DataTable, NestedSpec, Value};

use crate::data::{Division, Employee, Posting};

/// Columns of the employee master list.
pub fn employee_columns() -> Vec<Column<Employee>> {
    vec![
        Column::new("SN", |e: &Employee| Value::from(e.sn)).align(Align::Center),
        Column::new("PIS No", |e: &Employee| Value::from(&e.pis_no)).align(Align::Center),
        Column::new("Full Name", |e: &Employee| Value::from(&e.emp_name)),
        Column::new("Designation", |e: &Employee| Value::from(&e.emp_desig_name)),
        Column::new("Division", |e: &Employee| Value::from(&e.division)).align(Align::Center),
    ]
}

/// The employee master list.
pub fn employee_table(employees: Vec<Employee>) -> DataTable<Employee> {
    DataTable::new(employee_columns(), employees).with_row_color(CellColor::Computed(
        std::sync::Arc::new(|e: &Employee| {
            (e.emp_desig_name == "Director").then(|| "#fff3cd".to_string())
        }),
    ))
}

/// Columns of the division roster.
pub fn division_columns() -> Vec<Column<Division>> {
    vec![
        Column::new("SN", |d: &Division| Value::from(d.sn)).align(Align::Center),
        Column::new("Division Code", |d: &Division| Value::from(&d.division_code))
            .align(Align::Center),
        Column::new("Division Name", |d: &Division| Value::from(&d.division_name))
            .align(Align::Center),
        Column::new("Division Head Name", |d: &Division| {
            Value::from(d.division_head_name.as_deref())
        })
        .align(Align::Center),
    ]
}

/// Inner columns listing the postings of a division.
pub fn posting_columns() -> Vec<Column<Posting>> {
    vec![
        Column::new("Section", |p: &Posting| Value::from(&p.section))
            .row_span(true)
            .bg_color("#f8f9fa"),
        Column::new("Name", |p: &Posting| Value::from(&p.emp_name)),
        Column::new("Designation", |p: &Posting| Value::from(&p.emp_desig_name)),
    ]
}

/// The division roster, each division with its postings underneath.
pub fn division_table(divisions: Vec<Division>) -> DataTable<Division, Posting> {
    let nested = NestedSpec::new(posting_columns(), |d: &Division| d.postings.as_deref())
        .with_row_span(|p: &Posting| p.row_span);
    DataTable::new(division_columns(), divisions).with_nested(nested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{sample_divisions, sample_employees};
    use gridview::{Dir, InnerCell};

    #[test]
    fn employee_list_sorts_by_pis() {
        let mut table = employee_table(sample_employees());
        table.on_header_click("PIS No");
        let view = table.view();
        let pis: Vec<&str> = view.rows.iter().map(|r| r.row.pis_no.as_str()).collect();
        let mut sorted = pis.clone();
        sorted.sort();
        assert_eq!(pis, sorted);
        assert_eq!(view.headers[1].sort, Some(Dir::Asc));
    }

    #[test]
    fn directors_are_highlighted() {
        let mut table = employee_table(sample_employees());
        let view = table.view();
        assert_eq!(view.rows[0].row.emp_desig_name, "Director");
        assert_eq!(view.rows[0].bg_color.as_deref(), Some("#fff3cd"));
        assert_eq!(view.rows[1].bg_color, None);
    }

    #[test]
    fn filter_searches_every_column() {
        let mut table = employee_table(sample_employees());
        table.on_filter_text_change("audit");
        let view = table.view();
        assert!(view.total_filtered > 0);
        assert!(view.rows.iter().all(|r| r.row.division == "Audit"));
    }

    #[test]
    fn division_roster_merges_sections() {
        let mut table = division_table(sample_divisions());
        let view = table.view();
        let finance = view.rows[1].nested.as_ref().unwrap();
        let first = finance.rows[0][0].as_cell().unwrap();
        assert_eq!(first.text, "Operations");
        assert_eq!(first.row_span, Some(finance.rows.len()));
        assert!(finance.rows[1..].iter().all(|r| r[0] == InnerCell::Absorbed));
    }

    #[test]
    fn missing_head_is_blank_and_unsearchable() {
        let mut table = division_table(sample_divisions());
        let view = table.view();
        assert_eq!(view.rows[1].cells[3].text, "");
    }
}
