//! Plain-text summary table

use crate::projection::MONTHS_PER_YEAR;
use crate::scenario::SummaryRow;

/// Column suffix for the horizon: `Y5` for 60 months, `M18` otherwise
pub fn horizon_label(horizon_months: u32) -> String {
    if horizon_months > 0 && horizon_months % MONTHS_PER_YEAR == 0 {
        format!("Y{}", horizon_months / MONTHS_PER_YEAR)
    } else {
        format!("M{}", horizon_months)
    }
}

/// Render summary rows as a right-aligned text table
pub fn render_summary_table(rows: &[SummaryRow], horizon_months: u32) -> String {
    let label = horizon_label(horizon_months);
    let headers = [
        "Scenario".to_string(),
        format!("Active nodes {}", label),
        "Cumulative nodes".to_string(),
        format!("Supply {}", label),
        "Burned EDGE".to_string(),
        "RewardPool".to_string(),
    ];

    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|r| {
            [
                r.scenario.clone(),
                r.active_nodes.to_string(),
                r.nodes_cumulative.to_string(),
                r.supply.to_string(),
                r.burned_total.to_string(),
                r.reward_pool.to_string(),
            ]
        })
        .collect();

    let mut widths = headers.clone().map(|h| h.len());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:>width$}", cell, width = *w))
        .collect();
    out.push_str(&line.join("  "));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_label() {
        assert_eq!(horizon_label(60), "Y5");
        assert_eq!(horizon_label(12), "Y1");
        assert_eq!(horizon_label(18), "M18");
        assert_eq!(horizon_label(0), "M0");
    }

    #[test]
    fn test_render_summary_table() {
        let rows = vec![
            SummaryRow {
                scenario: "A_pessimistic".to_string(),
                active_nodes: 19,
                nodes_cumulative: 101,
                supply: 999_983_800,
                burned_total: 16_400,
                reward_pool: 200,
            },
            SummaryRow {
                scenario: "B".to_string(),
                active_nodes: 5_000,
                nodes_cumulative: 20_000,
                supply: 1_000_000_000,
                burned_total: 3_000_000,
                reward_pool: 3_000_000,
            },
        ];
        let table = render_summary_table(&rows, 60);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Active nodes Y5"));
        assert!(lines[0].contains("Supply Y5"));
        // Right-aligned: every line has the same width
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
        assert!(lines[1].starts_with("A_pessimistic"));
        assert!(lines[2].starts_with("            B"));
        assert!(lines[2].ends_with("3000000"));
    }

    #[test]
    fn test_empty_table_has_header() {
        let table = render_summary_table(&[], 24);
        assert_eq!(table.lines().count(), 1);
        assert!(table.contains("Active nodes Y2"));
    }
}
