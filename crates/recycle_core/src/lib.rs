//! Core of the recycling scanner: turns a photo into a recyclability verdict.
//!
//! The remote classification service does the heavy lifting. This crate owns
//! the request, the mapping of its raw prediction into the view model the UI
//! renders, and the three-step scan flow around it.

pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod payload;
pub mod prediction;
pub mod theme;
pub mod tiers;
pub mod transform;

pub use client::{Classifier, HttpClassifier};
pub use config::{AppConfig, ClientConfig};
pub use error::{FlowError, ScanError};
pub use flow::{FlowStep, ScanFlow, ScanState};
pub use payload::ImagePayload;
pub use prediction::{RawPrediction, RecyclingStatistics};
pub use theme::{AmbientPreference, FixedPreference, Theme};
pub use tiers::{Co2Impact, RecyclabilityTier, co2_impact, recyclability_tier};
pub use transform::{MaterialBreakdown, ScanResult, transform};
