//! Mock investigator: turns a (disease, target, sequence) triple into three
//! ranked candidate compounds.
//!
//! Nothing here looks at the sequence or the uploaded structure; names are
//! derived from the target protein and efficacies come from the injected
//! `EfficacySource`.

use chrono::NaiveDateTime;
use remedyx_common::{CompoundRecord, InvestigationResult, RemedyxError, Result};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::efficacy::EfficacySource;

/// Incoming investigate payload. Field names match the frontend form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvestigationRequest {
    #[serde(rename = "diseaseName", default)]
    pub disease_name: Option<String>,
    #[serde(rename = "targetProtein", default)]
    pub target_protein: Option<String>,
    #[serde(default)]
    pub sequence: Option<String>,
    /// Set when a `pdbFile` part accompanied a multipart request.
    #[serde(skip)]
    pub has_structure_file: bool,
}

impl InvestigationRequest {
    pub fn new(disease_name: &str, target_protein: &str, sequence: &str) -> Self {
        Self {
            disease_name: Some(disease_name.to_string()),
            target_protein: Some(target_protein.to_string()),
            sequence: Some(sequence.to_string()),
            has_structure_file: false,
        }
    }

    /// Check required fields in order; the first missing or empty one wins.
    fn validated(&self) -> Result<(&str, &str, &str)> {
        fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str> {
            match value.as_deref() {
                Some(v) if !v.is_empty() => Ok(v),
                _ => Err(RemedyxError::Validation(format!("{field} is required"))),
            }
        }
        Ok((
            required(&self.disease_name, "diseaseName")?,
            required(&self.target_protein, "targetProtein")?,
            required(&self.sequence, "sequence")?,
        ))
    }
}

/// One compound template: name suffix, mechanism label, efficacy range.
struct CompoundTemplate {
    suffix: &'static str,
    mechanism: &'static str,
    low: f64,
    high: f64,
}

const TEMPLATES: [CompoundTemplate; 3] = [
    CompoundTemplate { suffix: "inhibitor_1",  mechanism: "Protein-protein interaction inhibition", low: 0.6, high: 0.9  },
    CompoundTemplate { suffix: "modulator_2",  mechanism: "Allosteric modulation",                  low: 0.5, high: 0.8  },
    CompoundTemplate { suffix: "antagonist_3", mechanism: "Receptor antagonism",                    low: 0.7, high: 0.95 },
];

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[derive(Clone)]
pub struct Investigator {
    efficacy: Arc<dyn EfficacySource>,
}

impl Investigator {
    pub fn new(efficacy: Arc<dyn EfficacySource>) -> Self {
        Self { efficacy }
    }

    /// Three compounds named after `target_protein`, sorted by efficacy
    /// descending. Equal efficacies keep template order.
    pub fn generate_compounds(&self, target_protein: &str) -> Vec<CompoundRecord> {
        let mut compounds: Vec<CompoundRecord> = TEMPLATES
            .iter()
            .map(|t| {
                let efficacy = round2(self.efficacy.draw(t.low, t.high)).clamp(0.0, 1.0);
                CompoundRecord::new(format!("{}_{}", target_protein, t.suffix), t.mechanism, efficacy)
            })
            .collect();

        compounds.sort_by(|a, b| b.efficacy.partial_cmp(&a.efficacy).unwrap_or(std::cmp::Ordering::Equal));
        compounds
    }

    /// Validate the request and build a result stamped with `now`.
    /// The caller decides where the result is stored.
    pub fn investigate(&self, request: &InvestigationRequest, now: NaiveDateTime) -> Result<InvestigationResult> {
        let (disease, target, sequence) = request.validated()?;

        let compounds = self.generate_compounds(target);
        debug!(disease, target, top = %compounds[0].name, "generated compounds");

        Ok(InvestigationResult {
            disease_name: disease.to_string(),
            target_protein: target.to_string(),
            sequence: sequence.to_string(),
            description: format!("AI-generated analysis for {} targeting {}", disease, target),
            compounds,
            timestamp: now,
            source_flag: request.has_structure_file,
        })
    }
}
