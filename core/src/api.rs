// core/src/api.rs
//! JSON-grenseflate mot vertsappen. Parserne er tolerante: vanlige
//! klientvarianter av feltnavn aksepteres via alias, valgfrie felt
//! defaultes, og alle parse-feil rapporteres med sti via
//! serde_path_to_error. Tallpipelinen bak grenseflaten feiler aldri.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::analyze_session::{analyze_session, AnalyzeInputs};
use crate::telemetry::TELEMETRY;
use crate::types::{
    ActivitySource, AnalysisConfig, AthleteProfile, SessionMeta, TrackPoint,
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("samples parse at {path}: {msg}")]
    Samples { path: String, msg: String },
    #[error("profile parse at {path}: {msg}")]
    Profile { path: String, msg: String },
    #[error("config parse at {path}: {msg}")]
    Config { path: String, msg: String },
    #[error("serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ──────────────────────────────────────────────────────────────────────────
// Tolerante inngangstyper (konverteres til kjernetyper før kall)
// ──────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct TrackPointIn {
    t: f64,
    #[serde(default)]
    hr: Option<f64>,
    #[serde(default, alias = "power", alias = "power_w", alias = "device_watts")]
    watts: Option<f64>,
    #[serde(default, alias = "rpm")]
    cadence: Option<f64>,
    #[serde(default, alias = "v_ms", alias = "velocity")]
    speed: Option<f64>,
    #[serde(default, alias = "alt", alias = "altitude_m", alias = "elev")]
    altitude: Option<f64>,
    #[serde(default, alias = "distance_m")]
    distance: Option<f64>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

impl From<TrackPointIn> for TrackPoint {
    fn from(s: TrackPointIn) -> Self {
        TrackPoint {
            t: s.t,
            hr: s.hr,
            watts: s.watts,
            cadence: s.cadence,
            speed: s.speed,
            altitude: s.altitude,
            distance: s.distance,
            lat: s.lat,
            lon: s.lon,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProfileIn {
    #[serde(default, alias = "FTP")]
    ftp: Option<f64>,
    #[serde(default, alias = "lthr", alias = "threshold_heart_rate")]
    threshold_hr: Option<f64>,
    #[serde(default)]
    hr_max: Option<f64>,
    #[serde(default)]
    hr_rest: Option<f64>,
    #[serde(default, alias = "weight_kg", alias = "weightKg")]
    body_weight_kg: Option<f64>,
}

impl From<ProfileIn> for AthleteProfile {
    fn from(p: ProfileIn) -> Self {
        AthleteProfile {
            ftp: p.ftp,
            threshold_hr: p.threshold_hr,
            hr_max: p.hr_max,
            hr_rest: p.hr_rest,
            body_weight_kg: p.body_weight_kg,
        }
    }
}

// Økt-meta og analysevalg kommer samlet i ett config-dokument fra verten.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigIn {
    session_id: Option<String>,
    #[serde(alias = "gap_sec", alias = "trackpoint_gap")]
    trackpoint_gap_sec: Option<u32>,
    source: Option<ActivitySource>,
    start_time_utc: Option<DateTime<Utc>>,
    include_zero_watts: Option<bool>,
    include_zero_cadence: Option<bool>,
    power_zone_ratios: Option<Vec<f64>>,
    hr_zone_ratios: Option<Vec<f64>>,
    vo2_hr_floor: Option<f64>,
    vo2_power_spread: Option<f64>,
    vo2_spread_limit: Option<f64>,
}

fn parse_with_path<T>(raw: &str) -> Result<T, (String, String)>
where
    T: serde::de::DeserializeOwned,
{
    let mut de = serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize(&mut de)
        .map_err(|e| (e.path().to_string(), e.inner().to_string()))
}

/// Analyser en økt gitt som JSON-strenger og returner sammendraget som JSON.
/// `cfg_json` er valgfri; utelatt gir defaults for både meta og analysevalg.
pub fn analyze_session_json(
    samples_json: &str,
    profile_json: &str,
    cfg_json: Option<&str>,
) -> Result<String, ApiError> {
    let samples_in: Vec<TrackPointIn> = parse_with_path(samples_json).map_err(|(path, msg)| {
        TELEMETRY.parse_errors_total.inc();
        ApiError::Samples { path, msg }
    })?;
    let profile_in: ProfileIn = parse_with_path(profile_json).map_err(|(path, msg)| {
        TELEMETRY.parse_errors_total.inc();
        ApiError::Profile { path, msg }
    })?;
    let cfg_in: ConfigIn = match cfg_json {
        Some(raw) => parse_with_path(raw).map_err(|(path, msg)| {
            TELEMETRY.parse_errors_total.inc();
            ApiError::Config { path, msg }
        })?,
        None => ConfigIn::default(),
    };

    let samples: Vec<TrackPoint> = samples_in.into_iter().map(TrackPoint::from).collect();
    let profile = AthleteProfile::from(profile_in);

    let meta = SessionMeta {
        session_id: cfg_in.session_id.unwrap_or_default(),
        trackpoint_gap_sec: cfg_in.trackpoint_gap_sec.unwrap_or(1),
        source: cfg_in.source.unwrap_or_default(),
        start_time_utc: cfg_in.start_time_utc,
    };

    let defaults = AnalysisConfig::default();
    let cfg = AnalysisConfig {
        include_zero_watts: cfg_in
            .include_zero_watts
            .unwrap_or(defaults.include_zero_watts),
        include_zero_cadence: cfg_in
            .include_zero_cadence
            .unwrap_or(defaults.include_zero_cadence),
        power_zone_ratios: cfg_in.power_zone_ratios,
        hr_zone_ratios: cfg_in.hr_zone_ratios,
        vo2_hr_floor: cfg_in.vo2_hr_floor.unwrap_or(defaults.vo2_hr_floor),
        vo2_power_spread: cfg_in
            .vo2_power_spread
            .unwrap_or(defaults.vo2_power_spread),
        vo2_spread_limit: cfg_in
            .vo2_spread_limit
            .unwrap_or(defaults.vo2_spread_limit),
    };

    let summary = analyze_session(AnalyzeInputs {
        samples: &samples,
        profile: &profile,
        meta: &meta,
        cfg: &cfg,
    });

    TELEMETRY.sessions_analyzed_total.inc();
    if samples.is_empty() {
        TELEMETRY.empty_sessions_total.inc();
    }

    Ok(serde_json::to_string(&summary)?)
}
