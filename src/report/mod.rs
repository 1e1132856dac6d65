//! Presentation of projection results
//!
//! Everything here only reads `CatalogResults`; swapping the output format
//! never touches the engine.

mod table;
mod export;

pub use table::{render_summary_table, horizon_label};
pub use export::{
    write_trajectories_csv, write_series_csv, SeriesMetric, TrajectoryRow, RunReport,
    NamedTrajectory, FailureRecord,
};
