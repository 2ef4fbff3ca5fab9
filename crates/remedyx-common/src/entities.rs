/// Core record types shared by the catalog, the investigator and the web API.
/// Field names on the wire follow the JSON contract consumed by the frontend.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format used for `analysis_timestamp` in JSON and CSV (ISO-8601, microseconds).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Serde adapter writing timestamps with `TIMESTAMP_FORMAT`.
mod iso_micros {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&ts.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f").map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Compound
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundRecord {
    pub name: String,
    pub mechanism: String,
    /// Synthetic score in [0, 1].
    pub efficacy: f64,
}

impl CompoundRecord {
    pub fn new(name: impl Into<String>, mechanism: impl Into<String>, efficacy: f64) -> Self {
        Self {
            name: name.into(),
            mechanism: mechanism.into(),
            efficacy,
        }
    }
}

// ---------------------------------------------------------------------------
// Disease (catalog entry)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    #[serde(rename = "disease_name")]
    pub name: String,
    pub target_protein: String,
    pub sequence: String,
    pub description: String,
    #[serde(rename = "therapeutic_compounds")]
    pub compounds: Vec<CompoundRecord>,
}

// ---------------------------------------------------------------------------
// Investigation result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestigationResult {
    pub disease_name: String,
    pub target_protein: String,
    pub sequence: String,
    pub description: String,
    #[serde(rename = "therapeutic_compounds")]
    pub compounds: Vec<CompoundRecord>,
    #[serde(rename = "analysis_timestamp", with = "iso_micros")]
    pub timestamp: NaiveDateTime,
    /// Whether a structure file accompanied the request.
    #[serde(rename = "pdb_uploaded")]
    pub source_flag: bool,
}

impl InvestigationResult {
    /// Timestamp rendered the way exports present it.
    pub fn analysis_date(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Suggested file name for a CSV download of this result.
    pub fn export_file_name(&self) -> String {
        format!("{}_analysis_results.csv", self.disease_name)
    }
}
