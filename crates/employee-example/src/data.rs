//! Records shown by the example tables, and where they come from.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A row of the employee master list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub sn: u32,
    pub pis_no: String,
    pub emp_name: String,
    pub emp_desig_name: String,
    pub division: String,
}

/// A staff posting inside a division.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    pub section: String,
    pub emp_name: String,
    pub emp_desig_name: String,
    /// Rows the section cell spans; filled in by [`with_section_spans`].
    #[serde(default)]
    pub row_span: usize,
}

/// A row of the division roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    pub sn: u32,
    pub division_code: String,
    pub division_name: String,
    pub division_head_name: Option<String>,
    #[serde(default)]
    pub postings: Option<Vec<Posting>>,
}

/// Sets the section row spans: the first posting of each run of equal
/// sections spans the run, the rest get `0`.
pub fn with_section_spans(mut postings: Vec<Posting>) -> Vec<Posting> {
    let mut start = 0;
    while start < postings.len() {
        let section = postings[start].section.clone();
        let end = postings[start..]
            .iter()
            .position(|p| p.section != section)
            .map_or(postings.len(), |offset| start + offset);
        for (i, posting) in postings[start..end].iter_mut().enumerate() {
            posting.row_span = if i == 0 { end - start } else { 0 };
        }
        start = end;
    }
    postings
}

/// Reads employees from a JSON array.
pub fn load_employees(path: &Path) -> Result<Vec<Employee>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let employees: Vec<Employee> = serde_json::from_str(&text)
        .with_context(|| format!("parsing employees from {}", path.display()))?;
    log::debug!("loaded {} employees from {}", employees.len(), path.display());
    Ok(employees)
}

/// Reads divisions from a JSON array and computes the posting spans.
pub fn load_divisions(path: &Path) -> Result<Vec<Division>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let divisions: Vec<Division> = serde_json::from_str(&text)
        .with_context(|| format!("parsing divisions from {}", path.display()))?;
    log::debug!("loaded {} divisions from {}", divisions.len(), path.display());
    Ok(divisions.into_iter().map(prepare_division).collect())
}

fn prepare_division(mut division: Division) -> Division {
    division.postings = division.postings.map(with_section_spans);
    division
}

const NAMES: [&str; 12] = [
    "Anil Kumar Shrestha",
    "Sita Kumari Rai",
    "Ram Bahadur Thapa",
    "Gita Sharma",
    "Hari Prasad Koirala",
    "Mina Gurung",
    "Bikash Adhikari",
    "Sunita Karki",
    "Rajesh Maharjan",
    "Puja Tamang",
    "Deepak Bhandari",
    "Kamala Poudel",
];

const DESIGNATIONS: [&str; 4] = ["Director", "Officer", "Assistant", "Accountant"];

const DIVISIONS: [(&str, &str); 4] = [
    ("ADM", "Administration"),
    ("FIN", "Finance"),
    ("AUD", "Audit"),
    ("TRN", "Training"),
];

/// Built-in employee list.
pub fn sample_employees() -> Vec<Employee> {
    (0..30u32)
        .map(|i| {
            let idx = i as usize;
            Employee {
                sn: i + 1,
                pis_no: format!("PIS-{:04}", 1200 + (i * 37) % 500),
                emp_name: NAMES[idx % NAMES.len()].to_string(),
                emp_desig_name: DESIGNATIONS[idx % DESIGNATIONS.len()].to_string(),
                division: DIVISIONS[idx % DIVISIONS.len()].1.to_string(),
            }
        })
        .collect()
}

/// Built-in division roster, each division with its postings.
pub fn sample_divisions() -> Vec<Division> {
    let employees = sample_employees();
    DIVISIONS
        .iter()
        .enumerate()
        .map(|(i, (code, name))| {
            let mut postings: Vec<Posting> = employees
                .iter()
                .filter(|e| e.division == *name)
                .map(|e| Posting {
                    section: if e.emp_desig_name == "Director" {
                        "Management".to_string()
                    } else {
                        "Operations".to_string()
                    },
                    emp_name: e.emp_name.clone(),
                    emp_desig_name: e.emp_desig_name.clone(),
                    row_span: 0,
                })
                .collect();
            postings.sort_by(|a, b| a.section.cmp(&b.section));
            prepare_division(Division {
                sn: i as u32 + 1,
                division_code: code.to_string(),
                division_name: name.to_string(),
                division_head_name: postings
                    .iter()
                    .find(|p| p.section == "Management")
                    .map(|p| p.emp_name.clone()),
                postings: (!postings.is_empty()).then_some(postings),
            })
        })
        .collect()
}
