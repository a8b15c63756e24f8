use crate::utils::residual;
use csv::Writer;
use std::error::Error;

/// Writes a filter run to CSV, one row per sample: `desired,output,error`.
/// The error column is the residual `desired - output`; a plotting tool can
/// draw the desired/filtered traces from the first two columns and the
/// residual from the third.
pub fn write_run_csv(
    desired: &Vec<f64>,
    output: &Vec<f64>,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let mut csv_writer = Writer::from_path(path)?;
    csv_writer.write_record(["desired", "output", "error"])?;
    let errors = residual(desired, output);
    for ((d, y), e) in desired.iter().zip(output.iter()).zip(errors.iter()) {
        csv_writer.write_record(&[d.to_string(), y.to_string(), e.to_string()])?;
    }
    csv_writer.flush()?;
    Ok(())
}
