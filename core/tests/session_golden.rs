// core/tests/session_golden.rs
// Golden-test mot en fast CSV-økt: 120 sek jevn tråkk med slak stigning.

use pulsegraph_core::analyze_session::{analyze_session, AnalyzeInputs};
use pulsegraph_core::types::{
    ActivitySource, AnalysisConfig, AthleteProfile, SessionMeta, TrackPoint,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Row {
    t: f64,
    hr: f64,
    watts: f64,
    cadence: f64,
    speed: f64,
    altitude: f64,
}

fn load_fixture() -> Vec<TrackPoint> {
    let mut rdr = csv::Reader::from_path("tests/data/steady_ride.csv").expect("fixture mangler");
    rdr.deserialize()
        .map(|r| {
            let row: Row = r.expect("ugyldig rad i fixture");
            TrackPoint {
                t: row.t,
                hr: Some(row.hr),
                watts: Some(row.watts),
                cadence: Some(row.cadence),
                speed: Some(row.speed),
                altitude: Some(row.altitude),
                ..Default::default()
            }
        })
        .collect()
}

#[test]
fn golden_steady_ride() {
    let samples = load_fixture();
    assert_eq!(samples.len(), 120);

    let profile = AthleteProfile {
        ftp: Some(260.0),
        threshold_hr: Some(165.0),
        hr_max: Some(190.0),
        hr_rest: Some(60.0),
        body_weight_kg: Some(69.0),
    };
    let meta = SessionMeta {
        session_id: "golden".into(),
        trackpoint_gap_sec: 1,
        source: ActivitySource::Device,
        start_time_utc: None,
    };
    let cfg = AnalysisConfig::default();

    let out = analyze_session(AnalyzeInputs {
        samples: &samples,
        profile: &profile,
        meta: &meta,
        cfg: &cfg,
    });

    assert_eq!(out.duration_sec, 120.0);
    assert_eq!(out.moving_time_sec, 120.0);
    assert_eq!(out.avg_power, Some(220.0));
    assert_eq!(out.avg_hr, Some(140.0));
    assert_eq!(out.avg_cadence, Some(90.0));

    assert_eq!(out.np, Some(220.0));
    assert_eq!(out.r#if, Some(0.846));
    assert_eq!(out.tss, Some(2.4));

    // 220 W @ FTP 260 ligger i sone 2 (grense 195–234)
    assert_eq!(out.time_in_power_zone[2], 120.0);
    assert_eq!(out.tss_by_power_zone[2], 2.4);

    // Puls 140 @ terskel 165 ligger i sone 2; ekvivalent effekt 234 W → 2.7
    assert_eq!(out.time_in_hr_zone[2], 120.0);
    assert_eq!(out.tss_by_hr_zone[2], 2.7);

    assert_eq!(out.vo2max_est, 68.3);

    assert_eq!(out.ascent_m, 11.9);
    assert_eq!(out.descent_m, 0.0);
    assert_eq!(out.altitude_min_m, Some(100.0));
    assert_eq!(out.altitude_max_m, Some(111.9));

    // 119 sek varighet → 15s-buckets i diagrammet
    assert_eq!(out.chart_gap_sec, 15.0);
    assert_eq!(out.hr_series.len(), 120);
    assert!(out.power_series.iter().all(|&v| (v - 220.0).abs() < 1e-9));
}
