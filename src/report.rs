//! Serializable run summaries written by the tools.
use crate::histogram::HistogramComparison;
use crate::threshold::{RegionThreshold, ThresholdOutcome};
use serde::Serialize;

/// Timing and details of one applied transform.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    pub name: String,
    pub elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<ThresholdOutcome>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<RegionThreshold>,
}

impl StepReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elapsed_ms: 0.0,
            threshold: None,
            regions: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ImageDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Whole-pipeline summary: input size, per-step timings, histograms.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub input: ImageDescriptor,
    pub total_ms: f64,
    pub steps: Vec<StepReport>,
    pub histograms: HistogramComparison,
}

impl RunReport {
    pub fn new(
        input: ImageDescriptor,
        steps: Vec<StepReport>,
        histograms: HistogramComparison,
    ) -> Self {
        let total_ms = steps.iter().map(|s| s.elapsed_ms).sum();
        Self {
            input,
            total_ms,
            steps,
            histograms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImage;

    #[test]
    fn serializes_camel_case_and_skips_empty_details() {
        let mut step = StepReport::new("sharpen");
        step.elapsed_ms = 1.5;
        let img = GrayImage::filled(2, 2, 3);
        let report = RunReport::new(
            ImageDescriptor {
                width: 2,
                height: 2,
            },
            vec![step.clone(), step],
            HistogramComparison::new(&img, &img).unwrap(),
        );
        assert_eq!(report.total_ms, 3.0);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["totalMs"], 3.0);
        assert_eq!(json["steps"][0]["elapsedMs"], 1.5);
        assert!(json["steps"][0].get("threshold").is_none());
        assert!(json["steps"][0].get("regions").is_none());
        assert_eq!(json["histograms"]["maxCount"], 4);
    }
}
