// core/src/vo2max.rs
//! VO2max-estimat fra rullende 30s-kraft og samtidig puls.

use crate::metrics::{median, rolling_window_samples, RoundTo};
use crate::rolling::rolling_average;

/// Plassholdervekt (kg) inntil ekte utøvervekt-oppslag er på plass.
pub const DEFAULT_BODY_WEIGHT_KG: f64 = 69.0;

/// Hvilepuls-fallback når profilen mangler verdien.
pub const DEFAULT_HR_REST: f64 = 60.0;

#[derive(Debug, Clone, Copy)]
pub struct Vo2Params {
    pub body_weight_kg: f64,
    pub hr_max: f64,
    pub hr_rest: f64,
    /// Kun samples med puls over dette gulvet teller (sone 3+).
    pub hr_floor: f64,
    /// Konstant proxy for kraftspredningen i vinduet. Kilden beregner aldri
    /// en ekte standardavvik; proxyen holdes konfigurerbar i stedet.
    pub power_spread: f64,
    pub spread_limit: f64,
}

impl Default for Vo2Params {
    fn default() -> Self {
        Self {
            body_weight_kg: DEFAULT_BODY_WEIGHT_KG,
            hr_max: 190.0,
            hr_rest: DEFAULT_HR_REST,
            hr_floor: 130.0,
            power_spread: 10.0,
            spread_limit: 20.0,
        }
    }
}

/// VO2 fra kraft: (12.35 · W + 300) / vekt.
#[inline]
fn vo2_from_watts(watts: f64, weight_kg: f64) -> f64 {
    (12.35 * watts + 300.0) / weight_kg
}

/// Median av per-sample-estimater over filtrerte 30s-vinduer, 1 desimal.
/// 0.0 uten rullende data, uten beholdte samples eller med ugyldige grenser.
pub fn estimate_vo2max(watts: &[f64], hr: &[f64], gap_sec: f64, params: &Vo2Params) -> f64 {
    if watts.is_empty() || watts.len() != hr.len() || gap_sec <= 0.0 {
        return 0.0;
    }
    if params.hr_max <= params.hr_rest || params.body_weight_kg <= 0.0 {
        return 0.0;
    }

    let rolled = rolling_average(watts, rolling_window_samples(gap_sec));
    if rolled.is_empty() {
        return 0.0;
    }

    let vo2_rest = vo2_from_watts(0.0, params.body_weight_kg);
    let mut estimates = Vec::new();

    for (p30, &hr_i) in rolled.iter().zip(hr.iter()) {
        if hr_i <= params.hr_floor {
            continue;
        }
        if params.power_spread >= params.spread_limit {
            continue;
        }

        let hr_clamped = hr_i.max(params.hr_rest);
        let frac = (hr_clamped - params.hr_rest) / (params.hr_max - params.hr_rest);
        if frac <= 0.0 {
            continue;
        }

        let vo2 = vo2_from_watts(*p30, params.body_weight_kg);
        estimates.push((1.0 / frac) * (vo2 - vo2_rest) + vo2_rest);
    }

    median(&estimates).round_to(1)
}
