//! Built-in disease catalog.

use remedyx_common::{CompoundRecord, DiseaseRecord, RemedyxError, Result};
use tracing::debug;

/// Fixed table of disease records, keyed by a short lowercase identifier.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<(String, DiseaseRecord)>,
}

impl Catalog {
    pub fn new(entries: Vec<(String, DiseaseRecord)>) -> Self {
        Self { entries }
    }

    /// The three demonstration diseases shipped with the service.
    pub fn builtin() -> Self {
        Self::new(vec![
            (
                "cancer".to_string(),
                DiseaseRecord {
                    name: "Cancer".into(),
                    target_protein: "p53".into(),
                    sequence: P53_SEQUENCE.into(),
                    description: "A group of diseases involving abnormal cell growth with the potential to invade or spread to other parts of the body.".into(),
                    compounds: vec![
                        CompoundRecord::new("Doxorubicin", "DNA intercalation", 0.85),
                        CompoundRecord::new("Cisplatin", "DNA crosslinking", 0.78),
                        CompoundRecord::new("Paclitaxel", "Microtubule stabilization", 0.82),
                    ],
                },
            ),
            (
                "alzheimer".to_string(),
                DiseaseRecord {
                    name: "Alzheimer's Disease".into(),
                    target_protein: "Amyloid-beta".into(),
                    sequence: "DAEFRHDSGYEVHHQKLVFFAEDVGSNKGAIIGLMVGGVVIA".into(),
                    description: "A neurodegenerative disease that is the most common cause of dementia.".into(),
                    compounds: vec![
                        CompoundRecord::new("Donepezil", "Acetylcholinesterase inhibition", 0.65),
                        CompoundRecord::new("Memantine", "NMDA receptor antagonism", 0.58),
                        CompoundRecord::new("Aducanumab", "Amyloid-beta clearance", 0.72),
                    ],
                },
            ),
            (
                "diabetes".to_string(),
                DiseaseRecord {
                    name: "Type 2 Diabetes".into(),
                    target_protein: "Insulin Receptor".into(),
                    sequence: INSULIN_SEQUENCE.into(),
                    description: "A chronic condition that affects the way the body processes blood sugar.".into(),
                    compounds: vec![
                        CompoundRecord::new("Metformin", "Hepatic glucose production inhibition", 0.88),
                        CompoundRecord::new("Insulin", "Glucose uptake enhancement", 0.95),
                        CompoundRecord::new("Sitagliptin", "DPP-4 inhibition", 0.76),
                    ],
                },
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring search over keys and display names.
    ///
    /// Returns matches in catalog order. An empty or whitespace-only query is
    /// rejected; a query with no matches returns an empty list.
    pub fn search(&self, query: &str) -> Result<Vec<&DiseaseRecord>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(RemedyxError::Validation("Disease name is required".into()));
        }

        let hits: Vec<&DiseaseRecord> = self
            .entries
            .iter()
            .filter(|(key, rec)| key.contains(&needle) || rec.name.to_lowercase().contains(&needle))
            .map(|(_, rec)| rec)
            .collect();

        debug!(query = %needle, hits = hits.len(), "catalog search");
        Ok(hits)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

const P53_SEQUENCE: &str = "MEEPQSDPSVEPPLSQETFSDLWKLLPENNVLSPLPSQAMDDLMLSPDDIEQWFTEDPGPDEAPRMPEAAPPVAPAPAAPTPAAPAPAPSWPLSSSVPSQKTYQGSYGFRLGFLHSGTAKSVTCTYSPALNKMFCQLAKTCPVQLWVDSTPPPGTRVRAMAIYKQSQHMTEVVRRCPHHERCSDSDGLAPPQHLIRVEGNLRVEYLDDRNTFRHSVVVPYEPPEVGSDCTTIHYNYMCNSSCMGGMNRRPILTIITLEDSSGNLLGRNSFEVRVCACPGRDRRTEEENLRKKGEPHHELPPGSTKRALPNNTSSSPQPKKKPLDGEYFTLQIRGRERFEMFRELNEALELKDAQAGKEPGGSRAHSSHLKSKKGQSTSRHKKLMFKTEGPDSD";

const INSULIN_SEQUENCE: &str = "MALWMRLLPLLALLALWGPDPAAAFVNQHLCGSHLVEALYLVCGERGFFYTPKTRREAEDLQVGQVELGGGPGAGSLQPLALEGSLQKRGIVEQCCTSICSLYQLENYCN";
