use crate::elevation::{altitude_max, altitude_min, climb_totals};
use crate::metrics::{
    avg_cadence, avg_hr, avg_power, intensity_factor, is_moving, moving_time_sec,
    normalized_power, total_load, total_load_normalized,
};
use crate::rolling::{axis_time_gap, segment_average_series};
use crate::types::{
    ActivitySource, AnalysisConfig, AthleteProfile, SessionMeta, SessionSummary, TrackPoint,
};
use crate::vo2max::{estimate_vo2max, Vo2Params, DEFAULT_BODY_WEIGHT_KG, DEFAULT_HR_REST};
use crate::zones::{
    hr_ratios_for, load_by_hr_zone, load_by_power_zone, reconcile_zone_times,
    time_in_hr_zones, time_in_power_zones, POWER_ZONE_RATIOS,
};

#[derive(Clone)]
pub struct AnalyzeInputs<'a> {
    /// Tidsordnede samples for hele økten.
    pub samples: &'a [TrackPoint],
    pub profile: &'a AthleteProfile,
    pub meta: &'a SessionMeta,
    pub cfg: &'a AnalysisConfig,
}

/// Kjør hele analysepipelinen én gang og returner et nytt, uforanderlig
/// sammendrag. Ingen feil kastes – degenererte inndata gir 0/tomt felt.
pub fn analyze_session(inputs: AnalyzeInputs) -> SessionSummary {
    let samples = inputs.samples;
    let gap = f64::from(inputs.meta.trackpoint_gap_sec.max(1));

    let power_ratios: Vec<f64> = inputs
        .cfg
        .power_zone_ratios
        .clone()
        .unwrap_or_else(|| POWER_ZONE_RATIOS.to_vec());
    let hr_ratios: Vec<f64> = inputs
        .cfg
        .hr_zone_ratios
        .clone()
        .unwrap_or_else(|| hr_ratios_for(inputs.meta.source).to_vec());

    let duration_sec = samples.len() as f64 * gap;
    let moving_sec = moving_time_sec(samples, gap);

    let ftp = inputs.profile.ftp.filter(|f| *f > 0.0);
    let threshold_hr = inputs.profile.threshold_hr.filter(|h| *h > 0.0);

    // Importerte økter bruker ren inkrementsum; enhetsopptak den strengere
    // NP-varianten.
    let tss = match inputs.meta.source {
        ActivitySource::Strava => total_load(samples, ftp, gap),
        ActivitySource::Device => total_load_normalized(samples, ftp, gap),
    };

    let moving_watts: Vec<f64> = samples
        .iter()
        .filter(|s| is_moving(s))
        .map(|s| s.watts.unwrap_or(0.0))
        .collect();
    let np = normalized_power(&moving_watts, gap);
    let ifv = intensity_factor(np, ftp);

    // Sonefordelinger: kraftsiden krever FTP, HR-siden terskelpuls.
    let (tss_by_power_zone, time_in_power_zone) = match ftp {
        Some(f) => {
            let raw = time_in_power_zones(samples, f, &power_ratios, gap);
            (
                load_by_power_zone(samples, f, &power_ratios, gap),
                reconcile_zone_times(&raw, moving_sec),
            )
        }
        None => (Vec::new(), Vec::new()),
    };

    let (tss_by_hr_zone, time_in_hr_zone) = match threshold_hr {
        Some(th) => {
            let raw = time_in_hr_zones(samples, th, &hr_ratios, gap);
            let loads = match ftp {
                Some(f) => load_by_hr_zone(samples, f, th, &hr_ratios, &power_ratios, gap),
                None => Vec::new(),
            };
            (loads, reconcile_zone_times(&raw, moving_sec))
        }
        None => (Vec::new(), Vec::new()),
    };

    // VO2max trenger HR-grensene; uten hr_max degraderer estimatet til 0.
    let vo2max_est = match inputs.profile.hr_max {
        Some(hr_max) => {
            let watts: Vec<f64> = samples.iter().map(|s| s.watts.unwrap_or(0.0)).collect();
            let hr: Vec<f64> = samples.iter().map(|s| s.hr.unwrap_or(0.0)).collect();
            let params = Vo2Params {
                body_weight_kg: inputs
                    .profile
                    .body_weight_kg
                    .unwrap_or(DEFAULT_BODY_WEIGHT_KG),
                hr_max,
                hr_rest: inputs.profile.hr_rest.unwrap_or(DEFAULT_HR_REST),
                hr_floor: inputs.cfg.vo2_hr_floor,
                power_spread: inputs.cfg.vo2_power_spread,
                spread_limit: inputs.cfg.vo2_spread_limit,
            };
            estimate_vo2max(&watts, &hr, gap, &params)
        }
        None => 0.0,
    };

    let (ascent_m, descent_m) = climb_totals(samples);

    // Diagramserier på auto-valgt segmentbredde.
    let elapsed: Vec<f64> = samples.iter().map(|s| s.t).collect();
    let chart_gap_sec = axis_time_gap(&elapsed);

    let hr_values: Vec<f64> = samples.iter().map(|s| s.hr.unwrap_or(0.0)).collect();
    let watt_values: Vec<f64> = samples.iter().map(|s| s.watts.unwrap_or(0.0)).collect();
    let cadence_values: Vec<f64> = samples.iter().map(|s| s.cadence.unwrap_or(0.0)).collect();

    let hr_series = segment_average_series(chart_gap_sec, &elapsed, &hr_values, true, false);
    let power_series = segment_average_series(
        chart_gap_sec,
        &elapsed,
        &watt_values,
        inputs.cfg.include_zero_watts,
        false,
    );
    let cadence_series = segment_average_series(
        chart_gap_sec,
        &elapsed,
        &cadence_values,
        inputs.cfg.include_zero_cadence,
        false,
    );

    SessionSummary {
        session_id: inputs.meta.session_id.clone(),
        duration_sec,
        moving_time_sec: moving_sec,
        avg_power: avg_power(samples, inputs.cfg.include_zero_watts),
        avg_hr: avg_hr(samples),
        avg_cadence: avg_cadence(samples, inputs.cfg.include_zero_cadence),
        np,
        r#if: ifv,
        tss,
        tss_by_power_zone,
        tss_by_hr_zone,
        time_in_power_zone,
        time_in_hr_zone,
        vo2max_est,
        ascent_m,
        descent_m,
        altitude_min_m: altitude_min(samples),
        altitude_max_m: altitude_max(samples),
        chart_gap_sec,
        hr_series,
        power_series,
        cadence_series,
    }
}
