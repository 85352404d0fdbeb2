use crate::error::GatewayResult;
use planner::PlanningState;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Directory exports are written to by default
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Ensures a directory exists, creating it if necessary
pub fn ensure_dir(dir: &Path) -> GatewayResult<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    Ok(())
}

/// File name for an export taken at `millis` since the Unix epoch
pub fn export_file_name(millis: i64) -> String {
    format!("ctisplanner-{millis}.json")
}

/// Writes the board as pretty JSON into `dir`
///
/// # Arguments
/// * `dir` - Output directory, created if missing
/// * `state` - The board to export
/// * `millis` - Timestamp used in the file name
///
/// # Returns
/// The path of the written file
pub fn write_export(dir: &Path, state: &PlanningState, millis: i64) -> GatewayResult<PathBuf> {
    ensure_dir(dir)?;

    let path = dir.join(export_file_name(millis));
    fs::write(&path, state.export_json()?)?;

    Ok(path)
}
