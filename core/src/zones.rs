// core/src/zones.rs
//! Soneklassifisering og sonefordelt last/tid.

use crate::metrics::{incremental_load, RoundTo};
use crate::types::{ActivitySource, TrackPoint};

/// Nedre grense per kraftsone som andel av FTP (6 soner, Coggan-skjema).
pub const POWER_ZONE_RATIOS: [f64; 6] = [0.0, 0.55, 0.75, 0.90, 1.05, 1.20];

/// HR-ratioer for Strava-importerte økter (5 soner).
pub const HR_ZONE_RATIOS_STRAVA: [f64; 5] = [0.0, 0.68, 0.83, 0.94, 1.05];

/// HR-ratioer for økter tatt opp på enheten. Avviker fra Strava-settet i de
/// to øverste grensene; de to løypene har historisk hver sin skala og holdes
/// adskilt til produkteier avgjør noe annet.
pub const HR_ZONE_RATIOS_DEVICE: [f64; 5] = [0.0, 0.68, 0.83, 0.93, 1.00];

pub fn hr_ratios_for(source: ActivitySource) -> &'static [f64] {
    match source {
        ActivitySource::Strava => &HR_ZONE_RATIOS_STRAVA,
        ActivitySource::Device => &HR_ZONE_RATIOS_DEVICE,
    }
}

/// Absolutte nedre grenser fra ratioer og terskelverdi (FTP eller terskelpuls).
pub fn zone_bounds(ratios: &[f64], threshold: f64) -> Vec<f64> {
    ratios.iter().map(|r| r * threshold).collect()
}

/// Sonen er største indeks med nedre grense <= verdi; under første grense
/// gir sone 0. Siste sone er åpen oppover.
pub fn zone_index(value: f64, lower_bounds: &[f64]) -> usize {
    let mut zone = 0;
    for (i, b) in lower_bounds.iter().enumerate() {
        if value >= *b {
            zone = i;
        }
    }
    zone
}

/// Inkrementell last bucketert per kraftsone. Samples uten watt teller som 0 W.
/// Hver bucket avrundes til 1 desimal.
pub fn load_by_power_zone(
    samples: &[TrackPoint],
    ftp: f64,
    ratios: &[f64],
    gap_sec: f64,
) -> Vec<f64> {
    let mut out = vec![0.0f64; ratios.len()];
    if ftp <= 0.0 {
        return out;
    }
    let bounds = zone_bounds(ratios, ftp);
    for s in samples {
        let p = s.watts.unwrap_or(0.0);
        out[zone_index(p, &bounds)] += incremental_load(p, ftp, gap_sec);
    }
    out.iter().map(|v| v.round_to(1)).collect()
}

/// Estimert last per HR-sone for økter uten wattmåler: samme inkrementformel,
/// men med sonens ekvivalente effekt – FTP skalert med kraftsone-ratioen ett
/// hakk over HR-sonens indeks (fast mapping-antakelse).
pub fn load_by_hr_zone(
    samples: &[TrackPoint],
    ftp: f64,
    threshold_hr: f64,
    hr_ratios: &[f64],
    power_ratios: &[f64],
    gap_sec: f64,
) -> Vec<f64> {
    let mut out = vec![0.0f64; hr_ratios.len()];
    if ftp <= 0.0 || threshold_hr <= 0.0 || power_ratios.is_empty() {
        return out;
    }
    let bounds = zone_bounds(hr_ratios, threshold_hr);
    for s in samples {
        if let Some(hr) = s.hr {
            let hz = zone_index(hr, &bounds);
            let eq_idx = (hz + 1).min(power_ratios.len() - 1);
            let eq_watts = ftp * power_ratios[eq_idx];
            out[hz] += incremental_load(eq_watts, ftp, gap_sec);
        }
    }
    out.iter().map(|v| v.round_to(1)).collect()
}

/// Rå tid per kraftsone: antall samples i sonen × gap. Kun samples med
/// registrert watt teller.
pub fn time_in_power_zones(
    samples: &[TrackPoint],
    ftp: f64,
    ratios: &[f64],
    gap_sec: f64,
) -> Vec<f64> {
    let mut out = vec![0.0f64; ratios.len()];
    if ftp <= 0.0 {
        return out;
    }
    let bounds = zone_bounds(ratios, ftp);
    for s in samples {
        if let Some(p) = s.watts {
            out[zone_index(p, &bounds)] += gap_sec;
        }
    }
    out
}

/// Rå tid per HR-sone; kun samples med registrert puls teller.
pub fn time_in_hr_zones(
    samples: &[TrackPoint],
    threshold_hr: f64,
    ratios: &[f64],
    gap_sec: f64,
) -> Vec<f64> {
    let mut out = vec![0.0f64; ratios.len()];
    if threshold_hr <= 0.0 {
        return out;
    }
    let bounds = zone_bounds(ratios, threshold_hr);
    for s in samples {
        if let Some(hr) = s.hr {
            out[zone_index(hr, &bounds)] += gap_sec;
        }
    }
    out
}

/// Avstem sonetider mot uavhengig beregnet total bevegelsestid, som eget
/// steg etter rå-tellingen: adjusted[i] = max(total − (sum_rå − rå[i]), 0),
/// 1 desimal. Summen av arrayet skal treffe totalen innenfor avrunding.
pub fn reconcile_zone_times(raw: &[f64], total_moving_sec: f64) -> Vec<f64> {
    let sum_raw: f64 = raw.iter().sum();
    raw.iter()
        .map(|&r| (total_moving_sec - (sum_raw - r)).max(0.0).round_to(1))
        .collect()
}
