//! Synthetic snapshot labeling for simulated monitoring flights.
//!
//! Real image analysis is out of scope; snapshot outcomes are drawn from a
//! fixed candidate list. The random source is supplied by the caller so a
//! seeded generator reproduces a full flight's label sequence in tests.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Weight of the healthy outcome relative to each anomaly.
const NORMAL_DRAWS: u32 = 24;

const ANOMALIES: [ObservationLabel; 4] = [
    ObservationLabel::LowMoisture,
    ObservationLabel::PestsDetected,
    ObservationLabel::DiseaseDetected,
    ObservationLabel::LowNdvi,
];

/// Outcome attached to a simulated crop snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationLabel {
    Normal,
    LowMoisture,
    PestsDetected,
    DiseaseDetected,
    LowNdvi,
}

impl ObservationLabel {
    pub fn is_anomaly(&self) -> bool {
        !matches!(self, ObservationLabel::Normal)
    }

    /// Human-readable message recorded with the observation.
    pub fn message(&self) -> &'static str {
        match self {
            ObservationLabel::Normal => "all clear",
            ObservationLabel::LowMoisture => "low soil moisture",
            ObservationLabel::PestsDetected => "pests detected (aphids)",
            ObservationLabel::DiseaseDetected => "disease detected (leaf rust)",
            ObservationLabel::LowNdvi => "low NDVI - crop stress",
        }
    }
}

/// Draw a snapshot label: heavily biased towards `Normal`, with each anomaly
/// equally likely otherwise.
pub fn draw_label<R: Rng + ?Sized>(rng: &mut R) -> ObservationLabel {
    let roll = rng.random_range(0..NORMAL_DRAWS + ANOMALIES.len() as u32);
    if roll < NORMAL_DRAWS {
        ObservationLabel::Normal
    } else {
        ANOMALIES[(roll - NORMAL_DRAWS) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seeded_draws_are_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let labels_a: Vec<_> = (0..64).map(|_| draw_label(&mut a)).collect();
        let labels_b: Vec<_> = (0..64).map(|_| draw_label(&mut b)).collect();
        assert_eq!(labels_a, labels_b);
    }

    #[test]
    fn normal_dominates_the_distribution() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 2_000;
        let normal = (0..draws)
            .filter(|_| draw_label(&mut rng) == ObservationLabel::Normal)
            .count();
        // Expected ratio is 24/28; allow generous slack.
        assert!(normal > draws * 3 / 4, "normal came up only {normal}/{draws}");
        assert!(normal < draws, "anomalies should still occur");
    }

    #[test]
    fn anomaly_flags_match_labels() {
        assert!(!ObservationLabel::Normal.is_anomaly());
        for label in ANOMALIES {
            assert!(label.is_anomaly());
            assert!(!label.message().is_empty());
        }
    }
}
