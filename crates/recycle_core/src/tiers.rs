//! Score-to-label tables.
//!
//! Both scales pick the first descending threshold the score reaches, lower
//! bounds inclusive. Anything that reaches none of them (negative, NaN) lands
//! in the last tier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recyclability label, ordered from least to most desirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RecyclabilityTier {
    #[serde(rename = "Not Recyclable")]
    NotRecyclable,
    #[serde(rename = "Special Handling")]
    SpecialHandling,
    #[serde(rename = "Limited Recyclability")]
    LimitedRecyclability,
    #[serde(rename = "Recyclable")]
    Recyclable,
    #[serde(rename = "Highly Recyclable")]
    HighlyRecyclable,
}

const RECYCLABILITY_THRESHOLDS: [(f64, RecyclabilityTier); 4] = [
    (80.0, RecyclabilityTier::HighlyRecyclable),
    (60.0, RecyclabilityTier::Recyclable),
    (40.0, RecyclabilityTier::LimitedRecyclability),
    (20.0, RecyclabilityTier::SpecialHandling),
];

impl RecyclabilityTier {
    pub fn label(self) -> &'static str {
        match self {
            RecyclabilityTier::NotRecyclable => "Not Recyclable",
            RecyclabilityTier::SpecialHandling => "Special Handling",
            RecyclabilityTier::LimitedRecyclability => "Limited Recyclability",
            RecyclabilityTier::Recyclable => "Recyclable",
            RecyclabilityTier::HighlyRecyclable => "Highly Recyclable",
        }
    }
}

impl fmt::Display for RecyclabilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// CO2 impact of processing the item. `Low` is the most desirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Co2Impact {
    High,
    Medium,
    Low,
}

const CO2_THRESHOLDS: [(f64, Co2Impact); 2] = [(70.0, Co2Impact::Low), (40.0, Co2Impact::Medium)];

impl Co2Impact {
    pub fn label(self) -> &'static str {
        match self {
            Co2Impact::High => "High",
            Co2Impact::Medium => "Medium",
            Co2Impact::Low => "Low",
        }
    }
}

impl fmt::Display for Co2Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn recyclability_tier(score: f64) -> RecyclabilityTier {
    first_reached(score, &RECYCLABILITY_THRESHOLDS).unwrap_or(RecyclabilityTier::NotRecyclable)
}

pub fn co2_impact(score: f64) -> Co2Impact {
    first_reached(score, &CO2_THRESHOLDS).unwrap_or(Co2Impact::High)
}

fn first_reached<T: Copy>(score: f64, table: &[(f64, T)]) -> Option<T> {
    table
        .iter()
        .find(|(min, _)| score >= *min)
        .map(|&(_, tier)| tier)
}
