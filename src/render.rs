//! Text Rendering
//!
//! Renders mounted pages for the terminal, as a table/card or as JSON.

use serde_json::json;

use crate::pages::{CreateForm, DetailView, EditForm, FormState, ListView, Page};
use crate::record::Field;

/// Output format for rendered pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected table or json)", other)),
        }
    }
}

/// Render any page in the requested format
pub fn render_page(page: &Page, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => match page {
            Page::List(view) => render_list(view),
            Page::Create(form) => render_create(form),
            Page::Edit(form) => render_edit(form),
            Page::Detail(view) => render_detail(view),
        },
        OutputFormat::Json => {
            let value = page_json(page);
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
        }
    }
}

const HEADERS: [&str; 5] = ["#", "Name", "Branch", "School mail", "Action"];

/// Student table: index, the three visible fields and row actions
pub fn render_list(view: &ListView) -> String {
    let rows: Vec<[String; 5]> = view
        .rows()
        .map(|row| {
            let action = match (row.view_route(), row.edit_route()) {
                (Some(view), Some(edit)) => format!("view {}  edit {}", view, edit),
                _ => "-".to_string(),
            };
            [
                row.index.to_string(),
                row.record.name.clone(),
                row.record.branch.clone(),
                row.record.mail.clone(),
                action,
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(total));
    out.push('\n');

    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    if rows.is_empty() {
        out.push_str("No students yet. Add one with: roster add\n");
    }

    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Read-only student card
pub fn render_detail(view: &DetailView) -> String {
    let (name, branch, mail) = view
        .record()
        .map(|r| (r.name.as_str(), r.branch.as_str(), r.mail.as_str()))
        .unwrap_or(("", "", ""));

    format!(
        "Student {} details:\n  Name:   {}\n  Branch: {}\n  Mail:   {}\n\nBack: {}\n",
        view.id(),
        name,
        branch,
        mail,
        view.back()
    )
}

pub fn render_create(form: &CreateForm) -> String {
    render_form("Add Student to System", form.form())
}

pub fn render_edit(form: &EditForm) -> String {
    render_form(&format!("Edit Student {} Info", form.id()), form.form())
}

fn render_form(title: &str, form: &FormState) -> String {
    let mut out = format!("{}\n", title);
    for field in Field::ALL {
        let label = format!("{}:", field.label());
        out.push_str(&format!("  {:<7} {}\n", label, form.draft().get(field)));
    }
    out
}

fn page_json(page: &Page) -> serde_json::Value {
    match page {
        Page::List(view) => json!(view.records()),
        Page::Create(form) => json!(form.draft()),
        Page::Edit(form) => json!({
            "id": form.id(),
            "draft": form.draft(),
        }),
        Page::Detail(view) => json!(view.record()),
    }
}
