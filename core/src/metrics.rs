use ordered_float::OrderedFloat;

use crate::rolling::rolling_average;
use crate::types::TrackPoint;

/// NP/VO2max bruker 30 sekunders rullende vindu.
pub const ROLLING_WINDOW_SEC: f64 = 30.0;

/// Vindusstørrelse i samples for 30s-vinduet ved gitt sample-avstand.
#[inline]
pub fn rolling_window_samples(gap_sec: f64) -> usize {
    ((ROLLING_WINDOW_SEC / gap_sec).round() as usize).max(1)
}

// --- RoundTo trait (offentlig, brukt i hele kjernen) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 {
            return self.round();
        }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Robust median for sammendragsverdi.
pub fn median(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let mut sorted = xs.to_vec();
    sorted.sort_by_key(|x| OrderedFloat(*x));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Snitt av registrerte verdier. Med `include_zeros` false holdes eksakte
/// nuller utenfor – "målt null" og "mangler" er fortsatt to ulike ting.
pub fn average_of<I>(values: I, include_zeros: bool) -> Option<f64>
where
    I: Iterator<Item = Option<f64>>,
{
    let mut sum = 0.0f64;
    let mut cnt = 0usize;
    for v in values.flatten() {
        if include_zeros || v != 0.0 {
            sum += v;
            cnt += 1;
        }
    }
    if cnt == 0 {
        None
    } else {
        Some(sum / cnt as f64)
    }
}

pub fn avg_power(samples: &[TrackPoint], include_zeros: bool) -> Option<f64> {
    average_of(samples.iter().map(|s| s.watts), include_zeros)
}

pub fn avg_hr(samples: &[TrackPoint]) -> Option<f64> {
    average_of(samples.iter().map(|s| s.hr), true)
}

pub fn avg_cadence(samples: &[TrackPoint], include_zeros: bool) -> Option<f64> {
    average_of(samples.iter().map(|s| s.cadence), include_zeros)
}

/// I bevegelse = fart ulik null. Mangler fartsmåling regnes samplet som i
/// bevegelse (innendørsøkter har ingen GPS-fart).
#[inline]
pub fn is_moving(s: &TrackPoint) -> bool {
    match s.speed {
        Some(v) => v != 0.0,
        None => true,
    }
}

pub fn moving_time_sec(samples: &[TrackPoint], gap_sec: f64) -> f64 {
    samples.iter().filter(|s| is_moving(s)).count() as f64 * gap_sec
}

/// Inkrementell treningsbelastning for ett sample:
/// 100 · (P/FTP)² · (Δt/3600).
#[inline]
pub fn incremental_load(watts: f64, ftp: f64, gap_sec: f64) -> f64 {
    if ftp <= 0.0 {
        return 0.0;
    }
    100.0 * (watts / ftp).powi(2) * (gap_sec / 3600.0)
}

/// Total TSS som ren sum av inkrementene, 1 desimal. Samples uten watt
/// teller som 0 W. None uten gyldig FTP.
pub fn total_load(samples: &[TrackPoint], ftp: Option<f64>, gap_sec: f64) -> Option<f64> {
    let ftp = ftp.filter(|f| *f > 0.0)?;
    let sum: f64 = samples
        .iter()
        .map(|s| incremental_load(s.watts.unwrap_or(0.0), ftp, gap_sec))
        .sum();
    Some(sum.round_to(1))
}

/// Normalized Power:
/// 1) 30s rullende snitt av kraft (delvise vinduer i starten)
/// 2) ^4-middel
/// 3) fjerderot, avrundet til heltall
pub fn normalized_power(watts: &[f64], gap_sec: f64) -> Option<f64> {
    if watts.is_empty() || gap_sec <= 0.0 {
        return None;
    }
    let smooth = rolling_average(watts, rolling_window_samples(gap_sec));
    if smooth.is_empty() {
        return None;
    }

    let mut fourth_power_avg = 0.0f64;
    for v in &smooth {
        fourth_power_avg += v.powi(4);
    }
    fourth_power_avg /= smooth.len() as f64;

    Some(fourth_power_avg.powf(0.25).round())
}

/// IF = NP/FTP, 3 desimaler.
pub fn intensity_factor(np: Option<f64>, ftp: Option<f64>) -> Option<f64> {
    match (np, ftp) {
        (Some(n), Some(f)) if f > 0.0 => Some((n / f).round_to(3)),
        _ => None,
    }
}

/// Total TSS via NP/IF (brukes for økter tatt opp på enheten):
/// filtrer til samples i bevegelse, NP over disse, deretter
/// IF · NP · 100 · bevegelsessek / (3600 · FTP), 1 desimal.
/// Ingen bevegelse eller tom rullende serie gir 0 i stedet for feil.
pub fn total_load_normalized(
    samples: &[TrackPoint],
    ftp: Option<f64>,
    gap_sec: f64,
) -> Option<f64> {
    let ftp = ftp.filter(|f| *f > 0.0)?;

    let moving: Vec<f64> = samples
        .iter()
        .filter(|s| is_moving(s))
        .map(|s| s.watts.unwrap_or(0.0))
        .collect();
    if moving.is_empty() {
        return Some(0.0);
    }

    let np = match normalized_power(&moving, gap_sec) {
        Some(np) => np,
        None => return Some(0.0),
    };
    let ifv = match intensity_factor(Some(np), Some(ftp)) {
        Some(x) => x,
        None => return Some(0.0),
    };

    let moving_sec = moving.len() as f64 * gap_sec;
    Some((ifv * np * 100.0 * moving_sec / (3600.0 * ftp)).round_to(1))
}
