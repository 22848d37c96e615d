//! The upload → scanning → results state machine.
//!
//! All transient scan state lives in one [`ScanState`] value. Resetting swaps
//! it for a fresh default, so nothing from a previous scan survives.

use crate::client::Classifier;
use crate::error::{FlowError, ScanError};
use crate::payload::ImagePayload;
use crate::prediction::RawPrediction;
use crate::theme::{AmbientPreference, Theme};
use crate::transform::{ScanResult, transform};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlowStep {
    #[default]
    Upload,
    Scanning,
    Results,
}

/// Transient state of the current scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanState {
    step: FlowStep,
    image: Option<ImagePayload>,
    result: Option<ScanResult>,
    loading: bool,
}

impl ScanState {
    pub fn step(&self) -> FlowStep {
        self.step
    }

    pub fn image(&self) -> Option<&ImagePayload> {
        self.image.as_ref()
    }

    pub fn result(&self) -> Option<&ScanResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Drives one scan at a time and owns its state plus the display theme.
#[derive(Debug, Clone, Default)]
pub struct ScanFlow {
    state: ScanState,
    theme: Theme,
}

impl ScanFlow {
    pub fn new(preference: &dyn AmbientPreference) -> Self {
        Self {
            state: ScanState::default(),
            theme: Theme::resolve(preference),
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn step(&self) -> FlowStep {
        self.state.step
    }

    pub fn image(&self) -> Option<&ImagePayload> {
        self.state.image()
    }

    pub fn result(&self) -> Option<&ScanResult> {
        self.state.result()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Store the picked image and enter `Scanning`. Only valid from `Upload`.
    pub fn begin_scan(&mut self, image: ImagePayload) -> Result<&ImagePayload, FlowError> {
        match self.state.step {
            FlowStep::Upload => {}
            FlowStep::Scanning => return Err(FlowError::ScanInProgress),
            FlowStep::Results => return Err(FlowError::ResultsPending),
        }
        tracing::info!("scan started for {}", image.file_name);
        self.state = ScanState {
            step: FlowStep::Scanning,
            image: None,
            result: None,
            loading: true,
        };
        Ok(&*self.state.image.insert(image))
    }

    /// Settle the in-flight scan. A failed classification resets the flow and
    /// hands the error back for the caller to show.
    pub fn finish_scan(
        &mut self,
        outcome: Result<RawPrediction, ScanError>,
    ) -> Result<&ScanResult, FlowError> {
        if self.state.step != FlowStep::Scanning {
            return Err(FlowError::NotScanning);
        }
        match outcome {
            Ok(prediction) => {
                let result = transform(&prediction);
                tracing::info!(
                    material = %result.material,
                    recyclable = result.is_recyclable,
                    "scan finished"
                );
                self.state.step = FlowStep::Results;
                self.state.loading = false;
                Ok(&*self.state.result.insert(result))
            }
            Err(err) => {
                tracing::warn!("scan failed, back to upload: {err}");
                self.reset();
                Err(FlowError::Scan(err))
            }
        }
    }

    /// Begin, classify and finish in one blocking call.
    pub fn run_scan(
        &mut self,
        classifier: &dyn Classifier,
        image: ImagePayload,
    ) -> Result<&ScanResult, FlowError> {
        let outcome = classifier.classify(self.begin_scan(image)?);
        self.finish_scan(outcome)
    }

    /// Drop the current image and result and return to `Upload`.
    pub fn reset(&mut self) {
        self.state = ScanState::default();
    }
}
