use anyhow::Result;
use recycle_core::{
    Classifier, Co2Impact, FlowError, FlowStep, ImagePayload, RawPrediction, RecyclabilityTier,
    RecyclingStatistics, ScanError, ScanFlow,
};
use std::sync::atomic::{AtomicUsize, Ordering};

enum Canned {
    Prediction(RawPrediction),
    Status(u16),
}

struct FakeClassifier {
    answer: Canned,
    calls: AtomicUsize,
}

impl FakeClassifier {
    fn new(answer: Canned) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }
}

impl Classifier for FakeClassifier {
    fn classify(&self, _image: &ImagePayload) -> Result<RawPrediction, ScanError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            Canned::Prediction(p) => Ok(p.clone()),
            Canned::Status(code) => Err(ScanError::Status(*code)),
        }
    }
}

fn photo() -> ImagePayload {
    ImagePayload::from_bytes("item.jpg", vec![0xFF, 0xD8, 0xFF], 1024).unwrap()
}

fn plastic_bottle(score: f64) -> RawPrediction {
    RawPrediction {
        detected_object: "Plastic Bottle".into(),
        recyclable: true,
        material: "PET Plastic".into(),
        recyclability_score: score,
        recycling_statistics: RecyclingStatistics {
            processing_notes: "Clean and dry before recycling".into(),
            common_issues: vec!["Remove cap".into()],
        },
        recommendation: "Rinse and place in recycling bin".into(),
    }
}

#[test]
fn scenario_plastic_bottle_is_highly_recyclable() -> Result<()> {
    // Given the service recognises a PET bottle scoring 85
    // When the user scans a photo
    // Then the results show a highly recyclable, low-CO2 bottle with both tips
    let classifier = FakeClassifier::new(Canned::Prediction(plastic_bottle(85.0)));
    let mut flow = ScanFlow::default();

    let result = flow.run_scan(&classifier, photo())?;
    assert_eq!(result.material, "Plastic Bottle");
    assert!(result.is_recyclable);
    let part = &result.materials[0];
    assert_eq!(part.recyclability, RecyclabilityTier::HighlyRecyclable);
    assert_eq!(part.co2_impact, Co2Impact::Low);
    assert_eq!(
        part.disposal_tips,
        vec!["Remove cap", "Rinse and place in recycling bin"]
    );
    assert_eq!(flow.step(), FlowStep::Results);
    Ok(())
}

#[test]
fn scenario_low_score_needs_special_handling() -> Result<()> {
    // Given a prediction scoring 25
    // Then the tier is "Special Handling" and the CO2 impact is "High"
    let classifier = FakeClassifier::new(Canned::Prediction(plastic_bottle(25.0)));
    let mut flow = ScanFlow::default();

    let part = flow.run_scan(&classifier, photo())?.materials[0].clone();
    assert_eq!(part.recyclability.to_string(), "Special Handling");
    assert_eq!(part.co2_impact.to_string(), "High");
    Ok(())
}

#[test]
fn scenario_service_error_returns_to_upload() {
    // Given the service answers with a non-success status
    // When the user scans a photo
    // Then the flow is back at upload with no image and no result kept
    let classifier = FakeClassifier::new(Canned::Status(502));
    let mut flow = ScanFlow::default();

    let err = flow.run_scan(&classifier, photo()).unwrap_err();
    assert!(matches!(err, FlowError::Scan(ScanError::Status(502))));
    assert_eq!(err.user_message(), "Failed to analyze image. Please try again.");
    assert_eq!(flow.step(), FlowStep::Upload);
    assert!(flow.result().is_none());
    assert!(flow.image().is_none());
    assert!(!flow.is_loading());
}

#[test]
fn scenario_scan_again_after_reset() -> Result<()> {
    // Given a finished scan
    // When the user resets and scans another photo
    // Then a fresh result replaces the old one
    let first = FakeClassifier::new(Canned::Prediction(plastic_bottle(85.0)));
    let mut flow = ScanFlow::default();
    flow.run_scan(&first, photo())?;
    assert!(matches!(
        flow.run_scan(&first, photo()),
        Err(FlowError::ResultsPending)
    ));
    assert_eq!(first.calls.load(Ordering::SeqCst), 1);

    flow.reset();
    let second = FakeClassifier::new(Canned::Prediction(plastic_bottle(45.0)));
    let result = flow.run_scan(&second, photo())?;
    assert_eq!(
        result.materials[0].recyclability,
        RecyclabilityTier::LimitedRecyclability
    );
    Ok(())
}
