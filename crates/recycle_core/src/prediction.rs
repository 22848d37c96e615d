use serde::{Deserialize, Serialize};

/// Prediction as returned by the classification service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPrediction {
    pub detected_object: String,
    pub recyclable: bool,
    /// Material label, e.g. "PET Plastic".
    pub material: String,
    /// Expected in [0,100]; not validated.
    pub recyclability_score: f64,
    pub recycling_statistics: RecyclingStatistics,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecyclingStatistics {
    pub processing_notes: String,
    pub common_issues: Vec<String>,
}
