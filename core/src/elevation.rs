// core/src/elevation.rs
//! Stigning/fall og høyde-aggregater.

use ordered_float::OrderedFloat;

use crate::metrics::RoundTo;
use crate::types::TrackPoint;

/// (stigning, fall) i meter over påfølgende registrerte høyder, 1 desimal.
/// Fall summeres med positivt fortegn. Krever minst to høydesamples, ellers
/// (0, 0). Samples uten høyde hoppes over uten å nullstille forrige verdi.
pub fn climb_totals(samples: &[TrackPoint]) -> (f64, f64) {
    let mut up = 0.0f64;
    let mut down = 0.0f64;
    let mut prev: Option<f64> = None;
    let mut readings = 0usize;

    for s in samples {
        if let Some(alt) = s.altitude {
            readings += 1;
            if let Some(p) = prev {
                let d = alt - p;
                if d > 0.0 {
                    up += d;
                } else {
                    down -= d;
                }
            }
            prev = Some(alt);
        }
    }

    if readings < 2 {
        return (0.0, 0.0);
    }
    (up.round_to(1), down.round_to(1))
}

pub fn total_ascent(samples: &[TrackPoint]) -> f64 {
    climb_totals(samples).0
}

pub fn total_descent(samples: &[TrackPoint]) -> f64 {
    climb_totals(samples).1
}

pub fn altitude_min(samples: &[TrackPoint]) -> Option<f64> {
    samples
        .iter()
        .filter_map(|s| s.altitude)
        .map(OrderedFloat)
        .min()
        .map(|m| m.0)
}

pub fn altitude_max(samples: &[TrackPoint]) -> Option<f64> {
    samples
        .iter()
        .filter_map(|s| s.altitude)
        .map(OrderedFloat)
        .max()
        .map(|m| m.0)
}
