use std::fmt::Write as _;

use crate::types::SessionSummary;

/// Tekstrapport for terminal/logg. Felt uten verdi utelates fra rapporten.
pub fn render_summary(s: &SessionSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "--- Session Report: {} ---", s.session_id);
    let _ = writeln!(
        out,
        "Varighet: {:.0} s (bevegelse: {:.0} s)",
        s.duration_sec, s.moving_time_sec
    );

    if let Some(p) = s.avg_power {
        let _ = writeln!(out, "Snitt watt: {p:.1}");
    }
    if let Some(h) = s.avg_hr {
        let _ = writeln!(out, "Snitt puls: {h:.1}");
    }
    if let Some(c) = s.avg_cadence {
        let _ = writeln!(out, "Snitt kadens: {c:.1}");
    }
    if let Some(np) = s.np {
        let _ = writeln!(out, "NP: {np:.0}");
    }
    if let Some(ifv) = s.r#if {
        let _ = writeln!(out, "IF: {ifv:.3}");
    }
    if let Some(tss) = s.tss {
        let _ = writeln!(out, "TSS: {tss:.1}");
    }

    if !s.time_in_power_zone.is_empty() {
        let _ = writeln!(out, "Tid i kraftsoner: {:?}", s.time_in_power_zone);
    }
    if !s.time_in_hr_zone.is_empty() {
        let _ = writeln!(out, "Tid i pulssoner: {:?}", s.time_in_hr_zone);
    }

    if s.vo2max_est > 0.0 {
        let _ = writeln!(out, "VO2max-estimat: {:.1}", s.vo2max_est);
    }
    let _ = writeln!(out, "Stigning: {:.1} m / Fall: {:.1} m", s.ascent_m, s.descent_m);

    out
}

/// Skriv rapporten rett til stdout.
pub fn print_summary(s: &SessionSummary) {
    println!("{}", render_summary(s));
}
