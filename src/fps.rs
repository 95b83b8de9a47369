//! Frame-rate estimation from matched catalog scores.
//!
//! The model is relative and heuristic: 60fps when the user's hardware
//! matches the recommended tier exactly, doubling every
//! [`DOUBLE_STEP`] catalog points above and halving every
//! [`DOUBLE_STEP`] below. Below minimum the curve drops to a linear
//! ramp toward zero. Outputs are deterministic for fixed inputs.

use crate::types::{Bottleneck, FpsConfidence, FpsEstimate, HardwareScores};

/// Catalog-score distance over which the estimate doubles or halves.
/// Unvalidated calibration constant. TODO: recalibrate against a
/// sample of real benchmark runs once the catalog stabilizes.
const DOUBLE_STEP: f64 = 25.0;

/// Anchor frame rate at the recommended tier.
const REC_ANCHOR_FPS: f64 = 60.0;

/// Frame rate at exactly the minimum tier when recommended is unknown
/// doesn't apply; below minimum the linear ramp tops out here.
const MIN_CEILING_FPS: f64 = 30.0;

const MID_CAP: f64 = 300.0;

struct ComponentFps {
    fps: f64,
    fails_min: bool,
}

fn component_fps(
    user: Option<f64>,
    min: Option<f64>,
    rec: Option<f64>,
) -> Option<ComponentFps> {
    let user = user?;
    if min.is_none() && rec.is_none() {
        return None;
    }

    if let Some(min) = min {
        if user < min {
            let fps = if min > 0.0 {
                MIN_CEILING_FPS * (user / min)
            } else {
                0.0
            };
            return Some(ComponentFps {
                fps: fps.max(0.0),
                fails_min: true,
            });
        }
    }

    // Meets minimum (or minimum unknown): exponential curve anchored
    // at the recommended tier, falling back to the minimum tier.
    let anchor = rec.or(min).unwrap_or(user);
    let fps = REC_ANCHOR_FPS * 2f64.powf((user - anchor) / DOUBLE_STEP);
    Some(ComponentFps {
        fps,
        fails_min: false,
    })
}

pub fn estimate_fps(scores: &HardwareScores) -> FpsEstimate {
    let gpu = component_fps(
        scores.user_gpu_score,
        scores.min_gpu_score,
        scores.rec_gpu_score,
    );
    let cpu = component_fps(
        scores.user_cpu_score,
        scores.min_cpu_score,
        scores.rec_cpu_score,
    );

    let (mid, bottleneck) = match (&gpu, &cpu) {
        (Some(g), Some(c)) => {
            if g.fails_min || c.fails_min {
                // A hard bottleneck caps total output regardless of
                // how strong the other component is.
                if g.fps <= c.fps {
                    (g.fps, Bottleneck::Gpu)
                } else {
                    (c.fps, Bottleneck::Cpu)
                }
            } else {
                let combined = (g.fps * c.fps).sqrt();
                let lower = g.fps.min(c.fps);
                let bottleneck = if (g.fps - c.fps).abs() <= lower * 0.15 {
                    Bottleneck::Balanced
                } else if g.fps < c.fps {
                    Bottleneck::Gpu
                } else {
                    Bottleneck::Cpu
                };
                (combined, bottleneck)
            }
        }
        (Some(g), None) => (g.fps, Bottleneck::Gpu),
        (None, Some(c)) => (c.fps, Bottleneck::Cpu),
        (None, None) => {
            return FpsEstimate {
                low: 0,
                mid: 0,
                high: 0,
                bottleneck: Bottleneck::Balanced,
                confidence: FpsConfidence::None,
            };
        }
    };

    let confidence = if scores.rec_gpu_score.is_some() && scores.rec_cpu_score.is_some() {
        FpsConfidence::Good
    } else {
        FpsConfidence::Limited
    };

    let mid = mid.min(MID_CAP);
    let low = (mid * 0.75).floor().max(1.0);
    let high = (mid * 1.25).ceil();

    FpsEstimate {
        low: low as u32,
        mid: mid.round() as u32,
        high: high as u32,
        bottleneck,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(
        user_gpu: Option<f64>,
        min_gpu: Option<f64>,
        rec_gpu: Option<f64>,
        user_cpu: Option<f64>,
        min_cpu: Option<f64>,
        rec_cpu: Option<f64>,
    ) -> HardwareScores {
        HardwareScores {
            user_gpu_score: user_gpu,
            rec_gpu_score: rec_gpu,
            min_gpu_score: min_gpu,
            user_cpu_score: user_cpu,
            rec_cpu_score: rec_cpu,
            min_cpu_score: min_cpu,
        }
    }

    #[test]
    fn matching_recommended_on_both_sides_lands_at_sixty() {
        let estimate = estimate_fps(&scores(
            Some(50.0),
            Some(30.0),
            Some(50.0),
            Some(50.0),
            Some(30.0),
            Some(50.0),
        ));
        assert_eq!(estimate.mid, 60);
        assert_eq!(estimate.low, 45);
        assert_eq!(estimate.high, 75);
        assert_eq!(estimate.bottleneck, Bottleneck::Balanced);
        assert_eq!(estimate.confidence, FpsConfidence::Good);
    }

    #[test]
    fn twenty_five_points_above_recommended_doubles() {
        let estimate = estimate_fps(&scores(
            Some(75.0),
            Some(30.0),
            Some(50.0),
            Some(75.0),
            Some(30.0),
            Some(50.0),
        ));
        assert_eq!(estimate.mid, 120);
    }

    #[test]
    fn below_minimum_caps_both_sides() {
        // Strong CPU cannot compensate for a GPU under minimum.
        let estimate = estimate_fps(&scores(
            Some(15.0),
            Some(30.0),
            Some(50.0),
            Some(90.0),
            Some(30.0),
            Some(50.0),
        ));
        assert_eq!(estimate.mid, 15); // 30 * (15/30)
        assert_eq!(estimate.bottleneck, Bottleneck::Gpu);
    }

    #[test]
    fn uneven_components_name_the_weaker_side() {
        let estimate = estimate_fps(&scores(
            Some(50.0),
            Some(30.0),
            Some(50.0),
            Some(90.0),
            Some(30.0),
            Some(50.0),
        ));
        // GPU 60fps, CPU ~182fps: geometric mean, GPU limits.
        assert_eq!(estimate.bottleneck, Bottleneck::Gpu);
        assert!(estimate.mid > 60 && estimate.mid < 182);
    }

    #[test]
    fn single_sided_data_is_used_directly_with_limited_confidence() {
        let estimate = estimate_fps(&scores(
            Some(50.0),
            Some(30.0),
            Some(50.0),
            None,
            None,
            None,
        ));
        assert_eq!(estimate.mid, 60);
        assert_eq!(estimate.bottleneck, Bottleneck::Gpu);
        assert_eq!(estimate.confidence, FpsConfidence::Limited);
    }

    #[test]
    fn no_data_at_all_is_the_zero_estimate() {
        let estimate = estimate_fps(&scores(None, None, None, None, None, None));
        assert_eq!((estimate.low, estimate.mid, estimate.high), (0, 0, 0));
        assert_eq!(estimate.bottleneck, Bottleneck::Balanced);
        assert_eq!(estimate.confidence, FpsConfidence::None);
    }

    #[test]
    fn missing_recommended_anchors_on_minimum() {
        let estimate = estimate_fps(&scores(
            Some(55.0),
            Some(30.0),
            None,
            None,
            None,
            None,
        ));
        // 60 * 2^((55-30)/25) = 120.
        assert_eq!(estimate.mid, 120);
        assert_eq!(estimate.confidence, FpsConfidence::Limited);
    }

    #[test]
    fn mid_is_clamped_to_three_hundred() {
        let estimate = estimate_fps(&scores(
            Some(100.0),
            Some(10.0),
            Some(15.0),
            Some(100.0),
            Some(10.0),
            Some(15.0),
        ));
        assert_eq!(estimate.mid, 300);
        assert_eq!(estimate.high, 375);
        assert_eq!(estimate.low, 225);
    }
}
