use foresight_core::ops::ClassifierError;
use foresight_core::Classification;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeded RNG so scenario tests are reproducible
#[allow(dead_code)]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Stand-in classifier: positive iff the text mentions "good" or "great"
#[allow(dead_code)]
pub fn polarity_stub(text: &str) -> Result<Classification, ClassifierError> {
    let lower = text.to_lowercase();
    if lower.contains("good") || lower.contains("great") {
        Ok(Classification::new("POSITIVE", 0.95))
    } else {
        Ok(Classification::new("NEGATIVE", 0.90))
    }
}

/// Classifier that always fails, as an unreachable model endpoint would
#[allow(dead_code)]
pub fn offline_classifier(_text: &str) -> Result<Classification, ClassifierError> {
    Err(ClassifierError::new("classifier endpoint unreachable"))
}
