//! Run recording and export (CSV trace rows, JSON frame snapshot).

use crate::error::CliResult;
use ep_core::Point2;
use ep_sim::{ComponentSet, EpicycleConfig, RenderGeometry};
use serde::Serialize;

/// One pen position: the chain tip after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraceRow {
    pub cycle: u64,
    pub frame: usize,
    pub tip: Point2,
}

/// Everything a run produced, ready to serialize.
#[derive(Debug, Serialize)]
pub struct RunExport<'a> {
    pub seed: u64,
    pub config: &'a EpicycleConfig,
    pub components: &'a ComponentSet,
    pub frames: u64,
    pub cycles: u64,
    /// Geometry of the last frame before the final cycle was closed.
    pub last_frame: &'a RenderGeometry,
}

pub fn trace_csv(rows: &[TraceRow]) -> String {
    let mut csv = String::from("cycle,frame,x,y\n");
    for row in rows {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            row.cycle, row.frame, row.tip.x, row.tip.y
        ));
    }
    csv
}

pub fn run_json(export: &RunExport<'_>) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(export)?)
}
