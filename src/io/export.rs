//! CSV export for yearly results and raw trial outcomes.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::{SolarSimResult, YearlyResults};

/// Column header for yearly result export.
const HEADER: &str = "label,year,p_success,successes,n_simulations,\
                      total_battery_capacity_kwh,total_accessible_capacity_kwh,\
                      avg_net_consumption_kwh";

/// Column header for raw outcome export.
const OUTCOMES_HEADER: &str = "trial,total_net_kwh,success";

/// Exports yearly results to a CSV file at the given path.
///
/// Writes a header row followed by one data row per simulated year.
/// Produces deterministic output for identical inputs.
///
/// # Arguments
///
/// * `results` - Multi-year simulation results
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an error if file creation or writing fails.
pub fn export_csv(results: &YearlyResults, path: &Path) -> Result<(), csv::Error> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(results, buf)
}

/// Writes yearly results as CSV to any writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_csv(results: &YearlyResults, writer: impl Write) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for y in results {
        let r = &y.result;
        wtr.write_record(&[
            y.label.clone(),
            y.year.to_string(),
            format!("{:.6}", r.p_success),
            r.successes.to_string(),
            r.n_simulations.to_string(),
            format!("{:.4}", r.total_battery_capacity),
            format!("{:.4}", r.total_accessible_capacity),
            format!("{:.4}", r.avg_net_consumption),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes one row per retained trial outcome.
///
/// # Errors
///
/// Returns an `InvalidInput` I/O error if the result holds no raw outcomes,
/// or any error raised while writing.
pub fn write_outcomes_csv(result: &SolarSimResult, writer: impl Write) -> Result<(), csv::Error> {
    let outcomes = result.raw_outcomes.as_deref().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "result was produced without retaining raw outcomes",
        )
    })?;

    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(OUTCOMES_HEADER.split(','))?;
    for (trial, total_net) in outcomes.iter().enumerate() {
        wtr.write_record(&[
            trial.to_string(),
            format!("{total_net:.4}"),
            (*total_net >= 0.0).to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
