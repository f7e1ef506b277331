// core/tests/test_analyze_session.rs

use pulsegraph_core::analyze_session::{analyze_session, AnalyzeInputs};
use pulsegraph_core::types::{
    ActivitySource, AnalysisConfig, AthleteProfile, SessionMeta, TrackPoint,
};

fn steady_session(n: usize, watts: f64, hr: f64) -> Vec<TrackPoint> {
    (0..n)
        .map(|i| TrackPoint {
            t: i as f64,
            watts: Some(watts),
            hr: Some(hr),
            speed: Some(5.0),
            ..Default::default()
        })
        .collect()
}

fn meta(source: ActivitySource) -> SessionMeta {
    SessionMeta {
        session_id: "t1".into(),
        trackpoint_gap_sec: 1,
        source,
        start_time_utc: None,
    }
}

#[test]
fn steady_device_hour_hits_reference_numbers() {
    // 1 time konstant 200 W på FTP 200 → NP 200, IF 1.000, TSS 100.0
    let samples = steady_session(3600, 200.0, 140.0);
    let profile = AthleteProfile {
        ftp: Some(200.0),
        threshold_hr: Some(180.0),
        ..Default::default()
    };
    let cfg = AnalysisConfig::default();

    let out = analyze_session(AnalyzeInputs {
        samples: &samples,
        profile: &profile,
        meta: &meta(ActivitySource::Device),
        cfg: &cfg,
    });

    assert_eq!(out.session_id, "t1");
    assert_eq!(out.np, Some(200.0));
    assert_eq!(out.r#if, Some(1.0));
    assert_eq!(out.tss, Some(100.0));
    assert_eq!(out.moving_time_sec, 3600.0);

    // 200 W @ FTP 200 ligger i sone 3 (grense 180–210)
    assert_eq!(out.time_in_power_zone.len(), 6);
    assert_eq!(out.time_in_power_zone[3], 3600.0);
    assert_eq!(out.tss_by_power_zone[3], 100.0);

    // Puls 140 @ terskel 180 (device-ratioer) ligger i sone 1
    assert_eq!(out.time_in_hr_zone.len(), 5);
    assert_eq!(out.time_in_hr_zone[1], 3600.0);
}

#[test]
fn zone_times_reconcile_to_moving_time() {
    // Blandet intensitet – summen av sonetider skal treffe bevegelsestiden
    let samples: Vec<TrackPoint> = (0..600)
        .map(|i| TrackPoint {
            t: i as f64,
            watts: Some(100.0 + ((i % 7) as f64) * 45.0),
            hr: Some(110.0 + ((i % 5) as f64) * 15.0),
            speed: Some(6.0),
            ..Default::default()
        })
        .collect();
    let profile = AthleteProfile {
        ftp: Some(250.0),
        threshold_hr: Some(170.0),
        ..Default::default()
    };
    let cfg = AnalysisConfig::default();

    let out = analyze_session(AnalyzeInputs {
        samples: &samples,
        profile: &profile,
        meta: &meta(ActivitySource::Device),
        cfg: &cfg,
    });

    let power_sum: f64 = out.time_in_power_zone.iter().sum();
    let hr_sum: f64 = out.time_in_hr_zone.iter().sum();
    assert!((power_sum - out.moving_time_sec).abs() < 0.05);
    assert!((hr_sum - out.moving_time_sec).abs() < 0.05);
}

#[test]
fn strava_source_uses_incremental_sum_and_preset() {
    // 10 samples 0 W + 10 samples 500 W på FTP 250:
    // TSS = 10·100·(500/250)²/3600 = 1.1
    let mut samples = steady_session(10, 0.0, 120.0);
    samples.extend(steady_session(10, 500.0, 160.0));
    for (i, s) in samples.iter_mut().enumerate() {
        s.t = i as f64;
    }
    let profile = AthleteProfile {
        ftp: Some(250.0),
        ..Default::default()
    };
    let cfg = AnalysisConfig::default();

    let out = analyze_session(AnalyzeInputs {
        samples: &samples,
        profile: &profile,
        meta: &meta(ActivitySource::Strava),
        cfg: &cfg,
    });

    assert_eq!(out.tss, Some(1.1));
    assert_eq!(out.tss_by_power_zone[5], 1.1);
    assert_eq!(out.tss_by_power_zone[0], 0.0);
}

#[test]
fn missing_ftp_gives_absent_power_outputs() {
    let samples = steady_session(120, 210.0, 150.0);
    let profile = AthleteProfile {
        threshold_hr: Some(170.0),
        ..Default::default()
    };
    let cfg = AnalysisConfig::default();

    let out = analyze_session(AnalyzeInputs {
        samples: &samples,
        profile: &profile,
        meta: &meta(ActivitySource::Device),
        cfg: &cfg,
    });

    assert_eq!(out.tss, None);
    assert_eq!(out.r#if, None);
    assert!(out.tss_by_power_zone.is_empty());
    assert!(out.time_in_power_zone.is_empty());
    // HR-siden lever videre uten FTP
    assert_eq!(out.time_in_hr_zone.len(), 5);
    assert!(out.tss_by_hr_zone.is_empty()); // estimatet trenger FTP
}

#[test]
fn empty_session_degrades_to_zeros() {
    let profile = AthleteProfile {
        ftp: Some(200.0),
        threshold_hr: Some(170.0),
        hr_max: Some(190.0),
        ..Default::default()
    };
    let cfg = AnalysisConfig::default();

    let out = analyze_session(AnalyzeInputs {
        samples: &[],
        profile: &profile,
        meta: &meta(ActivitySource::Device),
        cfg: &cfg,
    });

    assert_eq!(out.duration_sec, 0.0);
    assert_eq!(out.moving_time_sec, 0.0);
    assert_eq!(out.tss, Some(0.0));
    assert_eq!(out.np, None);
    assert_eq!(out.avg_power, None);
    assert_eq!(out.vo2max_est, 0.0);
    assert_eq!(out.ascent_m, 0.0);
    assert_eq!(out.descent_m, 0.0);
    assert_eq!(out.altitude_min_m, None);
    assert!(out.hr_series.is_empty());
    assert!(out.time_in_power_zone.iter().all(|&t| t == 0.0));
}

#[test]
fn config_overrides_zone_ratios() {
    let samples = steady_session(60, 200.0, 140.0);
    let profile = AthleteProfile {
        ftp: Some(200.0),
        ..Default::default()
    };
    // Én sone: alt havner i bucket 0
    let cfg = AnalysisConfig {
        power_zone_ratios: Some(vec![0.0]),
        ..Default::default()
    };

    let out = analyze_session(AnalyzeInputs {
        samples: &samples,
        profile: &profile,
        meta: &meta(ActivitySource::Device),
        cfg: &cfg,
    });

    assert_eq!(out.time_in_power_zone.len(), 1);
    assert_eq!(out.time_in_power_zone[0], 60.0);
}
