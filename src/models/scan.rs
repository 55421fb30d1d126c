use serde::{Deserialize, Serialize};

use crate::image_source::PreviewHandle;

/// Category label shown when no classification is available.
pub const UNKNOWN_KIND: &str = "Unknown";

/// Body of a successful `POST /api/scan`.
///
/// The backend omits `points` when the model cannot classify the image,
/// so both reward fields default to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "type")]
    pub kind: String,
    pub info: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub co2: f64,
}

/// What a finished scan attempt produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// The backend classified the image.
    Success(Classification),
    /// The request failed; the message describes why.
    Failure { message: String },
}

/// The most recent scan outcome paired with the preview captured at submit
/// time. The backend never echoes the image back, so the preview is always
/// reattached client-side.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub outcome: ScanOutcome,
    pub image: PreviewHandle,
}

impl ScanResult {
    pub fn success(classification: Classification, image: PreviewHandle) -> Self {
        Self {
            outcome: ScanOutcome::Success(classification),
            image,
        }
    }

    pub fn failure(message: impl Into<String>, image: PreviewHandle) -> Self {
        Self {
            outcome: ScanOutcome::Failure {
                message: message.into(),
            },
            image,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ScanOutcome::Success(_))
    }

    /// Category label; `"Unknown"` for failures.
    pub fn kind(&self) -> &str {
        match &self.outcome {
            ScanOutcome::Success(c) => &c.kind,
            ScanOutcome::Failure { .. } => UNKNOWN_KIND,
        }
    }

    pub fn info(&self) -> &str {
        match &self.outcome {
            ScanOutcome::Success(c) => &c.info,
            ScanOutcome::Failure { message } => message,
        }
    }

    pub fn points(&self) -> i64 {
        match &self.outcome {
            ScanOutcome::Success(c) => c.points,
            ScanOutcome::Failure { .. } => 0,
        }
    }

    pub fn co2(&self) -> f64 {
        match &self.outcome {
            ScanOutcome::Success(c) => c.co2,
            ScanOutcome::Failure { .. } => 0.0,
        }
    }

    /// Whether the card gets the "unknown" treatment. The backend itself may
    /// answer `"Unknown"` for images it cannot classify.
    pub fn is_unknown(&self) -> bool {
        self.kind() == UNKNOWN_KIND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_source::{select_image, RawImage};

    fn preview() -> PreviewHandle {
        select_image(Some(RawImage::new("can.png", b"\x89PNG\r\n\x1a\n".to_vec())))
            .unwrap()
            .preview
    }

    #[test]
    fn test_classification_defaults_missing_rewards() {
        let json = r#"{"type": "Unknown", "info": "Could not classify item.", "co2": 0}"#;
        let c: Classification = serde_json::from_str(json).unwrap();
        assert_eq!(c.points, 0);
        assert_eq!(c.co2, 0.0);
    }

    #[test]
    fn test_classification_requires_type_and_info() {
        assert!(serde_json::from_str::<Classification>(r#"{"points": 3}"#).is_err());
    }

    #[test]
    fn test_success_fields_are_verbatim() {
        let c = Classification {
            kind: "Plastic".to_string(),
            info: "Recyclable bottle".to_string(),
            points: 10,
            co2: 0.5,
        };
        let result = ScanResult::success(c, preview());
        assert!(result.is_success());
        assert!(!result.is_unknown());
        assert_eq!(result.kind(), "Plastic");
        assert_eq!(result.info(), "Recyclable bottle");
        assert_eq!(result.points(), 10);
        assert_eq!(result.co2(), 0.5);
    }

    #[test]
    fn test_failure_collapses_to_unknown() {
        let result = ScanResult::failure("Server error", preview());
        assert!(!result.is_success());
        assert!(result.is_unknown());
        assert_eq!(result.kind(), UNKNOWN_KIND);
        assert_eq!(result.info(), "Server error");
        assert_eq!(result.points(), 0);
        assert_eq!(result.co2(), 0.0);
        assert_eq!(result.image, preview());
    }
}
