//! Column declarations and cell text for the deployments grid.

use gridkit::prelude::*;

use crate::dataset::{Deployment, Status};

pub fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("id", "ID")
            .width(72)
            .semantic(Semantic::Integer)
            .fixed(FixedSide::Left),
        ColumnSpec::new("service", "Service").flex(1.5),
        ColumnSpec::new("region", "Region").width("128px"),
        ColumnSpec::new("status", "Status")
            .min_width(112.0)
            .intent(Intent::Status),
        ColumnSpec::new("replicas", "Replicas")
            .width(96)
            .semantic(Semantic::Integer),
        ColumnSpec::new("cpu", "CPU")
            .max_width(104.0)
            .semantic(Semantic::Percent),
        ColumnSpec::new("cost", "Monthly cost")
            .width(136)
            .semantic(Semantic::Currency),
        ColumnSpec::new("updated", "Updated")
            .width(120)
            .semantic(Semantic::Date)
            .intent(Intent::Meta),
        ColumnSpec::new("owner", "Owner").hidden(),
        ColumnSpec::new("actions", "")
            .width(88)
            .intent(Intent::Actions)
            .fixed(FixedSide::Right),
    ]
}

/// Only live deployments can be selected.
pub fn is_selectable(row: &Deployment, _index: usize) -> bool {
    row.status != Status::Retired
}

/// `$12,345.67`
pub fn currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let (whole, cents) = (cents.abs() / 100, cents.abs() % 100);
    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents:02}")
}

/// Renders deployment cells as plain text.
#[derive(Debug, Default)]
pub struct DeployCells;

impl CellRenderer<Deployment> for DeployCells {
    type Output = String;

    fn render_cell(&self, column: &ColumnMeta, cell: &CellContext<'_, Deployment>) -> String {
        let row = cell.row;
        if column.is_selection() {
            return match (cell.is_selectable, cell.is_selected) {
                (false, _) => " · ".to_string(),
                (true, true) => "[x]".to_string(),
                (true, false) => "[ ]".to_string(),
            };
        }
        match column.key() {
            "id" => row.id.to_string(),
            "service" => row.service.to_string(),
            "region" => row.region.to_string(),
            "status" => row.status.label().to_string(),
            "replicas" => row.replicas.to_string(),
            "cpu" => format!("{:.1}%", row.cpu),
            "cost" => currency(row.monthly_cost),
            "updated" => row.updated.format("%Y-%m-%d").to_string(),
            "owner" => row.owner.to_string(),
            "actions" if row.status == Status::Retired => String::new(),
            "actions" => "open ›".to_string(),
            _ => String::new(),
        }
    }

    fn render_empty(&self) -> String {
        "No deployments".to_string()
    }

    fn render_loading(&self) -> String {
        "Loading deployments…".to_string()
    }
}
