use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ett sample fra opptaket (typisk 1 Hz). Alle signalfelt er valgfrie:
/// None betyr "mangler", Some(0.0) betyr "målt null" – de to behandles ulikt
/// i snitt- og sonefunksjonene.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackPoint {
    pub t: f64, // sekunder fra start
    #[serde(default)]
    pub hr: Option<f64>, // bpm
    #[serde(default)]
    pub watts: Option<f64>, // watt
    #[serde(default)]
    pub cadence: Option<f64>, // rpm
    #[serde(default)]
    pub speed: Option<f64>, // m/s
    #[serde(default)]
    pub altitude: Option<f64>, // meter
    #[serde(default)]
    pub distance: Option<f64>, // meter så langt
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// Utøverparametre, gitt per økt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AthleteProfile {
    pub ftp: Option<f64>,          // watt
    pub threshold_hr: Option<f64>, // bpm
    pub hr_max: Option<f64>,
    pub hr_rest: Option<f64>,
    /// Kroppsvekt i kg. None → plassholderverdi inntil ekte vektoppslag finnes.
    pub body_weight_kg: Option<f64>,
}

/// Hvor økten kommer fra. Valget styrer HR-soneratioene og hvilken
/// TSS-variant som brukes (ren inkrementsum vs. NP-basert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivitySource {
    Strava,
    #[default]
    Device,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    pub session_id: String,
    /// Fast avstand mellom samples (sek). All tidsvekting bruker denne,
    /// ikke deltaene mellom faktiske tidsstempler.
    pub trackpoint_gap_sec: u32,
    #[serde(default)]
    pub source: ActivitySource,
    #[serde(default)]
    pub start_time_utc: Option<DateTime<Utc>>,
}

impl Default for SessionMeta {
    fn default() -> Self {
        Self {
            session_id: String::new(),
            trackpoint_gap_sec: 1,
            source: ActivitySource::default(),
            start_time_utc: None,
        }
    }
}

/// Eksplisitte analysevalg – erstatter den gamle globale settings-singletonen,
/// slik at pipelinen er en ren funksjon av inndataene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub include_zero_watts: bool,
    pub include_zero_cadence: bool,
    /// Overstyr soneratioer; ellers brukes presetene i zones.rs.
    pub power_zone_ratios: Option<Vec<f64>>,
    pub hr_zone_ratios: Option<Vec<f64>>,
    /// VO2max-filter: HR-gulv, spredningsproxy og grense for proxyen.
    pub vo2_hr_floor: f64,
    pub vo2_power_spread: f64,
    pub vo2_spread_limit: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            include_zero_watts: true,
            include_zero_cadence: true,
            power_zone_ratios: None,
            hr_zone_ratios: None,
            vo2_hr_floor: 130.0,
            vo2_power_spread: 10.0,
            vo2_spread_limit: 20.0,
        }
    }
}

/// Flat resultatpost – fylles én gang per analyse og muteres ikke etterpå.
/// Alle felt er rene tall/arrays og kan serialiseres rett til en key-value-post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub duration_sec: f64,
    pub moving_time_sec: f64,
    pub avg_power: Option<f64>,
    pub avg_hr: Option<f64>,
    pub avg_cadence: Option<f64>,
    pub np: Option<f64>,
    pub r#if: Option<f64>,
    pub tss: Option<f64>,
    /// 6 buckets; tom uten FTP.
    pub tss_by_power_zone: Vec<f64>,
    /// 5 buckets; tom uten FTP eller terskelpuls.
    pub tss_by_hr_zone: Vec<f64>,
    /// Avstemt mot moving_time_sec (se zones::reconcile_zone_times).
    pub time_in_power_zone: Vec<f64>,
    pub time_in_hr_zone: Vec<f64>,
    pub vo2max_est: f64,
    pub ascent_m: f64,
    pub descent_m: f64,
    pub altitude_min_m: Option<f64>,
    pub altitude_max_m: Option<f64>,
    /// Segmentbredde valgt for diagramseriene.
    pub chart_gap_sec: f64,
    pub hr_series: Vec<f64>,
    pub power_series: Vec<f64>,
    pub cadence_series: Vec<f64>,
}
