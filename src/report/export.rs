//! CSV and JSON exports of projection results

use std::io::Write;

use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::params::GlobalConstants;
use crate::projection::{MonthlySnapshot, ProjectionResult};
use crate::scenario::{CatalogResults, SummaryRow};

/// One long-format trajectory row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryRow {
    pub scenario: String,
    pub month: u32,
    pub years: f64,
    /// Calendar month (`YYYY-MM`) when a start date is supplied
    pub period: Option<String>,
    pub active_nodes: u64,
    pub supply: u64,
    pub burned_total: u64,
    pub reward_pool: u64,
    pub nodes_cumulative: u64,
}

impl TrajectoryRow {
    fn new(scenario: &str, snapshot: &MonthlySnapshot, start: Option<NaiveDate>) -> Self {
        Self {
            scenario: scenario.to_string(),
            month: snapshot.month,
            years: snapshot.years(),
            period: start.and_then(|d| period_label(d, snapshot.month)),
            active_nodes: snapshot.active_nodes,
            supply: snapshot.supply,
            burned_total: snapshot.burned_total,
            reward_pool: snapshot.reward_pool,
            nodes_cumulative: snapshot.nodes_cumulative,
        }
    }
}

/// Calendar month covered by `month`, counting from `start`
fn period_label(start: NaiveDate, month: u32) -> Option<String> {
    start
        .checked_add_months(Months::new(month))
        .map(|d| d.format("%Y-%m").to_string())
}

/// Write every successful trajectory as long-format CSV, in catalog order
pub fn write_trajectories_csv<W: Write>(
    writer: W,
    results: &CatalogResults,
    start: Option<NaiveDate>,
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (name, result) in results.trajectories() {
        for snapshot in result.iter() {
            wtr.serialize(TrajectoryRow::new(name, snapshot, start))?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Metric plotted by a chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesMetric {
    Supply,
    ActiveNodes,
}

impl SeriesMetric {
    pub fn value(&self, snapshot: &MonthlySnapshot) -> u64 {
        match self {
            SeriesMetric::Supply => snapshot.supply,
            SeriesMetric::ActiveNodes => snapshot.active_nodes,
        }
    }

    /// Default file name for the exported series
    pub fn file_name(&self) -> &'static str {
        match self {
            SeriesMetric::Supply => "supply_series.csv",
            SeriesMetric::ActiveNodes => "active_nodes_series.csv",
        }
    }
}

/// Write a wide chart series: a `years` column, then one column per scenario
pub fn write_series_csv<W: Write>(
    writer: W,
    results: &CatalogResults,
    metric: SeriesMetric,
) -> Result<(), csv::Error> {
    let series: Vec<(&str, &ProjectionResult)> = results.trajectories().collect();
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["years".to_string()];
    header.extend(series.iter().map(|(name, _)| name.to_string()));
    wtr.write_record(&header)?;

    // All trajectories of a run share the horizon
    let rows = series.iter().map(|(_, r)| r.len()).max().unwrap_or(0);
    for i in 0..rows {
        let mut record = Vec::with_capacity(series.len() + 1);
        let years = series
            .iter()
            .find_map(|(_, r)| r.snapshots.get(i))
            .map(|s| s.years())
            .unwrap_or_default();
        record.push(format!("{:.4}", years));
        for (_, result) in &series {
            record.push(
                result
                    .snapshots
                    .get(i)
                    .map(|s| metric.value(s).to_string())
                    .unwrap_or_default(),
            );
        }
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedTrajectory {
    pub scenario: String,
    pub snapshots: Vec<MonthlySnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureRecord {
    pub scenario: String,
    pub error: String,
}

/// Full JSON report of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub generated_at: DateTime<Utc>,
    pub constants: GlobalConstants,
    pub horizon_months: u32,
    pub summaries: Vec<SummaryRow>,
    pub trajectories: Vec<NamedTrajectory>,
    pub failures: Vec<FailureRecord>,
}

impl RunReport {
    pub fn new(constants: GlobalConstants, horizon_months: u32, results: &CatalogResults) -> Self {
        Self {
            generated_at: Utc::now(),
            constants,
            horizon_months,
            summaries: results.summaries(),
            trajectories: results
                .trajectories()
                .map(|(name, r)| NamedTrajectory {
                    scenario: name.to_string(),
                    snapshots: r.snapshots.clone(),
                })
                .collect(),
            failures: results
                .failures()
                .into_iter()
                .map(|(name, e)| FailureRecord {
                    scenario: name.to_string(),
                    error: e.to_string(),
                })
                .collect(),
        }
    }

    pub fn write_json<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, self)
    }
}
