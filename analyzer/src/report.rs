//! Tabular export of scored targets: DataFrame build, escape-probability
//! sort, CSV writer. Consumers get the lowest-risk targets first.

use polars::prelude::*;

use crate::models::CrisprTarget;

/// Build a DataFrame of the scored targets, sorted ascending by escape
/// probability (lowest risk first).
pub fn targets_dataframe(targets: &[CrisprTarget]) -> PolarsResult<DataFrame> {
    let mut df = DataFrame::default();
    df.with_column(Series::new(
        PlSmallStr::from("target_sequence"),
        targets
            .iter()
            .map(|t| t.target_sequence.clone())
            .collect::<Vec<String>>(),
    ))?;
    df.with_column(Series::new(
        PlSmallStr::from("pam_sequence"),
        targets
            .iter()
            .map(|t| t.pam_sequence.clone())
            .collect::<Vec<String>>(),
    ))?;
    df.with_column(Series::new(
        PlSmallStr::from("position"),
        targets.iter().map(|t| t.position as u64).collect::<Vec<u64>>(),
    ))?;
    df.with_column(Series::new(
        PlSmallStr::from("gc_content"),
        targets.iter().map(|t| t.gc_content).collect::<Vec<f64>>(),
    ))?;
    df.with_column(Series::new(
        PlSmallStr::from("conservation_score"),
        targets
            .iter()
            .map(|t| t.conservation_score)
            .collect::<Vec<f64>>(),
    ))?;
    df.with_column(Series::new(
        PlSmallStr::from("escape_probability"),
        targets
            .iter()
            .map(|t| t.escape_probability)
            .collect::<Vec<f64>>(),
    ))?;
    df.with_column(Series::new(
        PlSmallStr::from("binding_strength"),
        targets
            .iter()
            .map(|t| t.binding_strength)
            .collect::<Vec<f64>>(),
    ))?;

    df.sort(["escape_probability"], Default::default())
}

/// Write the sorted target table as CSV.
pub fn write_targets_csv(targets: &[CrisprTarget], path: &str) -> PolarsResult<()> {
    let mut df = targets_dataframe(targets)?;
    let mut file = std::fs::File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    Ok(())
}
