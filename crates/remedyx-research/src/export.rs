//! CSV export of an investigation result.

use remedyx_common::{InvestigationResult, RemedyxError, Result};

pub const CSV_HEADER: [&str; 6] = [
    "Disease Name",
    "Target Protein",
    "Compound Name",
    "Mechanism",
    "Efficacy Score",
    "Analysis Date",
];

/// Whole numbers keep one decimal place ("1.0", not "1").
fn format_efficacy(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        v.to_string()
    }
}

/// One row per compound, disease-level fields repeated on every row.
pub fn export_csv(result: &InvestigationResult) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)?;

    let analysis_date = result.analysis_date();
    for compound in &result.compounds {
        wtr.write_record([
            result.disease_name.as_str(),
            result.target_protein.as_str(),
            compound.name.as_str(),
            compound.mechanism.as_str(),
            format_efficacy(compound.efficacy).as_str(),
            analysis_date.as_str(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| RemedyxError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| RemedyxError::Other(e.into()))
}
