use crate::prediction::RawPrediction;
use crate::tiers::{Co2Impact, RecyclabilityTier, co2_impact, recyclability_tier};

/// One material component of a scanned item.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialBreakdown {
    pub material: String,
    /// Share of the item, in [0,100] when the service behaves.
    pub percentage: f64,
    pub recyclability: RecyclabilityTier,
    pub co2_impact: Co2Impact,
    pub description: String,
    /// Common issues first, final recommendation last.
    pub disposal_tips: Vec<String>,
}

/// What the results screen renders for one scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub material: String,
    pub is_recyclable: bool,
    pub summary: String,
    pub materials: Vec<MaterialBreakdown>,
    pub disposal_recommendation: String,
}

impl ScanResult {
    pub fn primary_material(&self) -> Option<&MaterialBreakdown> {
        self.materials.first()
    }
}

/// Map a raw prediction onto the view model. Pure and infallible; the score is
/// used as-is even when it falls outside [0,100].
pub fn transform(prediction: &RawPrediction) -> ScanResult {
    let score = prediction.recyclability_score;
    if !(0.0..=100.0).contains(&score) {
        tracing::warn!(score, "recyclability score outside 0..=100, using as-is");
    }

    let stats = &prediction.recycling_statistics;
    let mut disposal_tips = Vec::with_capacity(stats.common_issues.len() + 1);
    disposal_tips.extend(stats.common_issues.iter().cloned());
    disposal_tips.push(prediction.recommendation.clone());

    let breakdown = MaterialBreakdown {
        material: prediction.material.clone(),
        percentage: score,
        recyclability: recyclability_tier(score),
        co2_impact: co2_impact(score),
        description: stats.processing_notes.clone(),
        disposal_tips,
    };

    ScanResult {
        material: prediction.detected_object.clone(),
        is_recyclable: prediction.recyclable,
        summary: format!("{} - {}", prediction.material, stats.processing_notes),
        materials: vec![breakdown],
        disposal_recommendation: prediction.recommendation.clone(),
    }
}
